pub mod marker;

pub use marker::{MarkerAction, MarkerState};
