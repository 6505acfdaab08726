//! Grid to screen mapping for the isometric board.

use crate::config::BoardConfig;
use crate::model::{Coord, GridSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPos {
    pub left: f64,
    pub top: f64,
}

/// Fixed isometric transform for one board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub size: GridSize,
    pub tile_w: f64,
    pub tile_h: f64,
    pub wall_h: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Projection {
    pub fn new(cfg: &BoardConfig) -> Self {
        let size = GridSize {
            cols: cfg.cols,
            rows: cfg.rows,
        };
        let map_w = ((size.cols + size.rows) as f64 * cfg.tile_w) / 2.0;
        Self {
            size,
            tile_w: cfg.tile_w,
            tile_h: cfg.tile_h,
            wall_h: cfg.wall_h,
            // centers the diamond horizontally
            origin_x: map_w / 2.0,
            origin_y: cfg.origin_y,
        }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> ScreenPos {
        ScreenPos {
            left: self.origin_x + (x - y) * (self.tile_w / 2.0),
            top: self.origin_y + (x + y) * (self.tile_h / 2.0),
        }
    }

    pub fn project(&self, c: Coord) -> ScreenPos {
        self.to_screen(c.x, c.y)
    }

    pub fn map_px_w(&self) -> f64 {
        ((self.size.cols + self.size.rows) as f64 * self.tile_w) / 2.0
    }

    pub fn map_px_h(&self) -> f64 {
        ((self.size.cols + self.size.rows) as f64 * self.tile_h) / 2.0 + self.wall_h
    }
}
