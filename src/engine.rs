use log::{debug, info};

use crate::Coords;
use crate::error::GameError;
use crate::food::{CellSource, FoodPlacer};
use crate::grid::GridSpace;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Set between detecting a collision and resetting the chain, within one tick.
    ResetPending,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub score: usize,
    pub length: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: usize },
    /// The head ran into the body. The chain has already been reset.
    RunEnded(RunSummary),
}

/// What a renderer needs, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub body: Vec<Coords>,
    pub food: Coords,
    pub score: usize,
}

pub struct Simulation<S: CellSource> {
    grid: GridSpace,
    snake: Snake,
    food: Coords,
    placer: FoodPlacer,
    cells: S,
    spawn: Coords,
    state: RunState,
    best_score: usize,
    runs: usize,
}

impl<S: CellSource> Simulation<S> {
    pub fn new(grid: GridSpace, spawn: Coords, cells: S) -> Result<Self, GameError> {
        let snake = Snake::new(grid, spawn);
        Self::with_snake(snake, None, spawn, cells)
    }

    /// Starts from an existing chain. `food` is re-placed if it is missing or
    /// lands on the chain.
    pub fn with_snake(snake: Snake, food: Option<Coords>, spawn: Coords, mut cells: S) -> Result<Self, GameError> {
        let grid = snake.grid();
        let placer = FoodPlacer::new(grid);
        let occupied = snake.occupied();

        let food = match food.map(|f| grid.wrap_coords(f)) {
            Some(f) if !occupied.contains(&f) => f,
            _ => placer.place(&occupied, &mut cells)?,
        };

        info!("New run on a {0}x{0} grid, spawn {1:?}, food {2:?}", grid.size(), spawn, food);

        Ok(Simulation {
            grid,
            snake,
            food,
            placer,
            cells,
            spawn: grid.wrap_coords(spawn),
            state: RunState::Running,
            best_score: 0,
            runs: 0,
        })
    }

    /// One step: steer, move, eat, then check for a crash.
    pub fn tick(&mut self, intent: Option<Direction>) -> Result<TickOutcome, GameError> {
        if let Some(dir) = intent {
            self.snake.set_direction(dir);
        }

        self.snake.advance();

        let mut outcome = TickOutcome::Moved;

        if self.snake.head().position() == self.food {
            self.snake.grow();
            self.food = self.placer.place(&self.snake.occupied(), &mut self.cells)?;
            let score = self.score();
            self.best_score = self.best_score.max(score);
            debug!("Food eaten, score {}", score);
            outcome = TickOutcome::Ate { score };
        }

        if self.snake.has_self_collision() {
            self.state = RunState::ResetPending;
            let summary = RunSummary { score: self.score(), length: self.snake.len() };
            self.runs += 1;
            info!("Run {} ended at {:?} with score {}", self.runs, self.snake.head().position(), summary.score);

            self.reset()?;
            return Ok(TickOutcome::RunEnded(summary));
        }

        Ok(outcome)
    }

    /// Back to a single segment at the spawn cell, keeping the food unless it's in the way.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.snake.reset(self.spawn);

        let occupied = self.snake.occupied();
        if occupied.contains(&self.food) {
            self.food = self.placer.place(&occupied, &mut self.cells)?;
        }

        self.state = RunState::Running;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot { body: self.snake.positions(), food: self.food, score: self.score() }
    }

    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Food eaten in the current run.
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    pub fn best_score(&self) -> usize {
        self.best_score
    }

    pub fn runs(&self) -> usize {
        self.runs
    }
}
