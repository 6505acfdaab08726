//! Core data types for the isometric board.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    pub fn max_x(&self) -> f64 {
        self.cols.saturating_sub(1) as f64
    }

    pub fn max_y(&self) -> f64 {
        self.rows.saturating_sub(1) as f64
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.cols && (cell.y as u32) < self.rows
    }
}

/// Integer tile index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Grid position; fractional while the marker sits between tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp each axis independently into the board.
    pub fn clamped(self, size: GridSize) -> Self {
        Self {
            x: self.x.clamp(0.0, size.max_x()),
            y: self.y.clamp(0.0, size.max_y()),
        }
    }

    /// Nearest tile, rounding each axis on its own.
    pub fn nearest_cell(self) -> Cell {
        Cell {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveMode {
    /// Arrows follow the screen: Up moves the pin visually up.
    #[default]
    ScreenOrtho,
    /// Arrows follow the grid's own x/y axes.
    GridAxis,
}

impl MoveMode {
    pub fn toggled(self) -> Self {
        match self {
            MoveMode::ScreenOrtho => MoveMode::GridAxis,
            MoveMode::GridAxis => MoveMode::ScreenOrtho,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoveMode::ScreenOrtho => "screen axes",
            MoveMode::GridAxis => "grid axes",
        }
    }
}

/// Every tile on the board, row-major (y outer, x inner).
pub fn cells(size: GridSize) -> impl Iterator<Item = Cell> {
    (0..size.rows as i32).flat_map(move |y| (0..size.cols as i32).map(move |x| Cell { x, y }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major() {
        let got: Vec<Cell> = cells(GridSize { cols: 3, rows: 2 }).collect();
        let want: Vec<Cell> = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
            .iter()
            .map(|&(x, y)| Cell { x, y })
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn cells_cover_board_once() {
        let size = GridSize { cols: 5, rows: 4 };
        let all: Vec<Cell> = cells(size).collect();
        assert_eq!(all.len(), 20);
        assert!(all.iter().all(|c| size.contains(*c)));
        let uniq: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(uniq.len(), all.len());
    }

    #[test]
    fn nearest_cell_rounds_axes_independently() {
        assert_eq!(Coord::new(1.6, 1.4).nearest_cell(), Cell { x: 2, y: 1 });
        assert_eq!(Coord::new(2.5, 0.49).nearest_cell(), Cell { x: 3, y: 0 });
    }

    #[test]
    fn clamp_keeps_coord_on_board() {
        let size = GridSize { cols: 5, rows: 3 };
        assert_eq!(Coord::new(-0.3, 9.0).clamped(size), Coord::new(0.0, 2.0));
        assert_eq!(Coord::new(4.5, -1.0).clamped(size), Coord::new(4.0, 0.0));
        assert_eq!(Coord::new(1.25, 1.75).clamped(size), Coord::new(1.25, 1.75));
    }

    #[test]
    fn mode_double_toggle_is_identity() {
        let m = MoveMode::ScreenOrtho;
        assert_eq!(m.toggled(), MoveMode::GridAxis);
        assert_eq!(m.toggled().toggled(), m);
    }
}
