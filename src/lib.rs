pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;
pub mod turns;

pub type GridInt = i32;
pub type Coords = (GridInt, GridInt);

pub use engine::{RunState, RunSummary, Simulation, Snapshot, TickOutcome};
pub use error::GameError;
pub use food::{CellSource, FoodPlacer, RandomCells};
pub use grid::GridSpace;
pub use snake::{Direction, Segment, Snake};
pub use turns::TurnLedger;
