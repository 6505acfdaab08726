pub mod app;
pub mod board_view;
pub mod controls_panel;
pub mod iso_tile;
pub mod marker_pin;
pub mod settings_modal;
pub mod status_line;

pub use app::App;
