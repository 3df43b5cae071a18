use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::Coords;
use crate::error::GameError;
use crate::grid::GridSpace;

/// Supplier of candidate food cells, expected to be uniform over the grid.
pub trait CellSource {
    fn draw(&mut self) -> Coords;
}

impl<F: FnMut() -> Coords> CellSource for F {
    fn draw(&mut self) -> Coords {
        (self)()
    }
}

/// Uniform cells from any `rand` generator.
pub struct RandomCells<R: Rng> {
    grid: GridSpace,
    rng: R,
}

impl<R: Rng> RandomCells<R> {
    pub fn new(grid: GridSpace, rng: R) -> Self {
        RandomCells { grid, rng }
    }
}

impl<R: Rng> CellSource for RandomCells<R> {
    fn draw(&mut self) -> Coords {
        let size = self.grid.size();
        (self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }
}

pub struct FoodPlacer {
    grid: GridSpace,
}

impl FoodPlacer {
    pub fn new(grid: GridSpace) -> Self {
        FoodPlacer { grid }
    }

    /// Draws candidates until one is free. Fails up front when the grid is full.
    pub fn place<S: CellSource + ?Sized>(&self, occupied: &HashSet<Coords>, source: &mut S) -> Result<Coords, GameError> {
        let cells = self.grid.cell_count();
        let free = self.grid.cells().filter(|c| !occupied.contains(c)).count();
        if free == 0 {
            return Err(GameError::FoodPlacementExhausted { cells });
        }

        loop {
            let candidate = self.grid.wrap_coords(source.draw());
            if !occupied.contains(&candidate) {
                debug!("Food placed at {:?}, {} free cells", candidate, free);
                return Ok(candidate);
            }
        }
    }
}
