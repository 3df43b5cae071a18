use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::{Coords, GridInt};
use crate::error::GameError;
use crate::grid::GridSpace;

/// Snake on a wrap-around grid, played in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "toroid-snake", version)]
pub struct Config {
    /// Width and height of the grid, in cells
    #[arg(long, default_value_t = 20)]
    pub size: GridInt,

    /// Milliseconds between two steps
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Seed for food placement, random if not given
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn grid(&self) -> Result<GridSpace, GameError> {
        GridSpace::new(self.size)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.grid().map(|_| ())
    }

    /// Where the snake starts every run.
    pub fn spawn(&self) -> Coords {
        (self.size / 2, self.size / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["toroid-snake"]);
        assert_eq!(config.size, 20);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.spawn(), (10, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_tiny_grid() {
        let config = Config::parse_from(["toroid-snake", "--size", "1", "--seed", "9"]);
        assert_eq!(config.seed, Some(9));
        assert!(matches!(config.validate(), Err(GameError::InvalidGridSize(1))));
    }
}
