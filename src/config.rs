//! Board configuration: size, tile geometry, stepping and cosmetic constants.
//!
//! The two presets correspond to the two ways the board is played: a 3x3
//! board with whole-cell moves, and a 5x5 board with 1/9-cell moves plus the
//! movement-mode toggle. A config lives for the session only.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MAX_BOARD_EDGE};

pub const DEFAULT_WALL_H: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Simple,
    Fine,
}

impl Preset {
    pub fn label(self) -> &'static str {
        match self {
            Preset::Simple => "3x3 whole-cell",
            Preset::Fine => "5x5 fine-step",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub cols: u32,
    pub rows: u32,
    /// Width of a tile's top face in px.
    pub tile_w: f64,
    /// Height of a tile's top face in px.
    pub tile_h: f64,
    /// Side wall thickness in px; 0 draws flat diamonds.
    pub wall_h: f64,
    /// Top margin above the board's back corner.
    pub origin_y: f64,
    /// Key presses needed to cross one cell.
    pub step_divisions: u32,
    /// Whether `m` switches between screen-orthogonal and grid-axis movement.
    pub mode_toggle: bool,
    /// How far the pin is lifted above its projected point.
    pub pin_lift: f64,
    /// Marker transition length; 0 disables the transition.
    pub transition_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::fine()
    }
}

impl BoardConfig {
    pub fn simple() -> Self {
        Self {
            cols: 3,
            rows: 3,
            tile_w: 64.0,
            tile_h: 32.0,
            wall_h: 0.0,
            origin_y: 40.0,
            step_divisions: 1,
            mode_toggle: false,
            pin_lift: 18.0,
            transition_ms: 0,
        }
    }

    pub fn fine() -> Self {
        Self {
            cols: 5,
            rows: 5,
            tile_w: 64.0,
            tile_h: 32.0,
            wall_h: DEFAULT_WALL_H,
            origin_y: 40.0,
            step_divisions: 9,
            mode_toggle: true,
            pin_lift: 18.0,
            transition_ms: 60,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Simple => Self::simple(),
            Preset::Fine => Self::fine(),
        }
    }

    /// Switch to `preset` but keep this config's wall choice.
    pub fn with_preset(self, preset: Preset) -> Self {
        let wall_h = self.wall_h;
        Self {
            wall_h,
            ..Self::from_preset(preset)
        }
    }

    /// The preset this config was derived from, judged by its stepping.
    pub fn preset(&self) -> Preset {
        if self.is_fine_step() {
            Preset::Fine
        } else {
            Preset::Simple
        }
    }

    pub fn step(&self) -> f64 {
        1.0 / self.step_divisions.max(1) as f64
    }

    pub fn is_fine_step(&self) -> bool {
        self.step_divisions > 1
    }

    pub fn with_walls(mut self, on: bool) -> Self {
        self.wall_h = if on { DEFAULT_WALL_H } else { 0.0 };
        self
    }

    pub fn with_step_divisions(mut self, divisions: u32) -> Self {
        self.step_divisions = divisions;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyBoard {
                cols: self.cols,
                rows: self.rows,
            });
        }
        let edge = self.cols.max(self.rows);
        if edge > MAX_BOARD_EDGE {
            return Err(ConfigError::BoardTooLarge { edge });
        }
        if !(self.tile_w > 0.0 && self.tile_h > 0.0) {
            return Err(ConfigError::BadTileSize {
                w: self.tile_w,
                h: self.tile_h,
            });
        }
        if self.step_divisions == 0 {
            return Err(ConfigError::ZeroStepDivisions);
        }
        if self.wall_h < 0.0 || self.wall_h.is_nan() {
            return Err(ConfigError::NegativeWall(self.wall_h));
        }
        Ok(self)
    }
}
