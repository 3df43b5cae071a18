use thiserror::Error;

use crate::GridInt;

#[derive(Debug, Error)]
pub enum GameError {
    /// Every cell is taken by the snake, there is nowhere left for food
    #[error("no free cell left for food on a grid of {cells} cells")]
    FoodPlacementExhausted { cells: usize },

    #[error("invalid grid size {0}, must be at least 2")]
    InvalidGridSize(GridInt),

    #[error("terminal is too small: need {needed:?}, have {available:?}")]
    TerminalTooSmall { needed: (u16, u16), available: (u16, u16) },

    #[error("could not set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
