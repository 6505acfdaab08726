use thiserror::Error;

/// Largest board edge accepted from an edited config.
pub const MAX_BOARD_EDGE: u32 = 32;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have at least one column and one row (got {cols}x{rows})")]
    EmptyBoard { cols: u32, rows: u32 },
    #[error("board edge {edge} exceeds the maximum of {max}", max = MAX_BOARD_EDGE)]
    BoardTooLarge { edge: u32 },
    #[error("tile size must be positive (got {w}x{h})")]
    BadTileSize { w: f64, h: f64 },
    #[error("step divisions must be at least 1")]
    ZeroStepDivisions,
    #[error("wall height must not be negative (got {0})")]
    NegativeWall(f64),
}
