//! Marker position controller.
//!
//! One reducer covers both boards: whole-cell stepping on the simple preset
//! and 1/N-cell stepping with a switchable axis mapping on the fine preset.
//! Every transition is `(state, action) -> state` and ends with a clamp, so
//! the marker can never leave the board.

use std::rc::Rc;
use yew::Reducible;

use crate::config::BoardConfig;
use crate::input::{Arrow, KeyInput};
use crate::model::{Cell, Coord, GridSize, MoveMode};

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerAction {
    Key(KeyInput),
    /// Back to the board center; mode is kept.
    Recenter,
    /// Swap the board and start over from its center.
    Reconfigure(BoardConfig),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerState {
    pub config: BoardConfig,
    pub pos: Coord,
    pub mode: MoveMode,
}

impl MarkerState {
    pub fn new(config: BoardConfig) -> Self {
        let pos = center(&config);
        let mode = if config.mode_toggle {
            MoveMode::ScreenOrtho
        } else {
            MoveMode::GridAxis
        };
        Self { config, pos, mode }
    }

    pub fn size(&self) -> GridSize {
        GridSize {
            cols: self.config.cols,
            rows: self.config.rows,
        }
    }

    /// Tile drawn as selected; does not feed back into state.
    pub fn selected(&self) -> Cell {
        self.pos.nearest_cell()
    }

    /// Current mode name, or `None` on boards without the toggle.
    pub fn switchable_mode(&self) -> Option<&'static str> {
        self.config.mode_toggle.then(|| self.mode.label())
    }

    pub fn apply(&self, action: MarkerAction) -> Self {
        match action {
            MarkerAction::Key(KeyInput::ToggleMode) => {
                if !self.config.mode_toggle {
                    return self.clone();
                }
                Self {
                    mode: self.mode.toggled(),
                    ..self.clone()
                }
            }
            MarkerAction::Key(KeyInput::Move(arrow)) => {
                let (dx, dy) = delta(self.mode, arrow, self.config.step());
                let pos = Coord::new(self.pos.x + dx, self.pos.y + dy).clamped(self.size());
                Self {
                    pos,
                    ..self.clone()
                }
            }
            MarkerAction::Recenter => Self {
                pos: center(&self.config),
                ..self.clone()
            },
            MarkerAction::Reconfigure(config) => Self::new(config),
        }
    }
}

impl Default for MarkerState {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Reducible for MarkerState {
    type Action = MarkerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

/// Starting point: exact center when stepping in fractions, otherwise the
/// integer-divided center so the marker sits on a tile.
pub fn center(cfg: &BoardConfig) -> Coord {
    let size = GridSize {
        cols: cfg.cols,
        rows: cfg.rows,
    };
    let c = if cfg.is_fine_step() {
        Coord::new(cfg.cols as f64 / 2.0, cfg.rows as f64 / 2.0)
    } else {
        Coord::new((cfg.cols / 2) as f64, (cfg.rows / 2) as f64)
    };
    c.clamped(size)
}

pub fn delta(mode: MoveMode, arrow: Arrow, step: f64) -> (f64, f64) {
    match (mode, arrow) {
        (MoveMode::ScreenOrtho, Arrow::Up) => (-step, -step),
        (MoveMode::ScreenOrtho, Arrow::Down) => (step, step),
        (MoveMode::ScreenOrtho, Arrow::Left) => (-step, step),
        (MoveMode::ScreenOrtho, Arrow::Right) => (step, -step),
        (MoveMode::GridAxis, Arrow::Up) => (0.0, -step),
        (MoveMode::GridAxis, Arrow::Down) => (0.0, step),
        (MoveMode::GridAxis, Arrow::Left) => (-step, 0.0),
        (MoveMode::GridAxis, Arrow::Right) => (step, 0.0),
    }
}
