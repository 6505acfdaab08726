//! Isometric tile board with a keyboard-driven marker.
//!
//! Pure pieces (grid, projection, input mapping, the marker reducer, config)
//! live beside the Yew components that draw them, so they can be exercised
//! without a browser.

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod projection;
pub mod state;
pub mod util;
