use crate::{Coords, GridInt};
use crate::error::GameError;

/// Square play field whose edges wrap around onto each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSpace {
    size: GridInt,
}

impl GridSpace {
    pub fn new(size: GridInt) -> Result<Self, GameError> {
        if size < 2 {
            return Err(GameError::InvalidGridSize(size));
        }

        Ok(GridSpace { size })
    }

    pub fn size(&self) -> GridInt {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Maps any integer onto `[0, size)`.
    pub fn wrap(&self, n: GridInt) -> GridInt {
        n.rem_euclid(self.size)
    }

    pub fn wrap_coords(&self, pos: Coords) -> Coords {
        (self.wrap(pos.0), self.wrap(pos.1))
    }

    /// Moves `pos` by `delta`, reappearing on the opposite edge when it falls off.
    pub fn offset(&self, pos: Coords, delta: Coords) -> Coords {
        (self.wrap(pos.0 + delta.0), self.wrap(pos.1 + delta.1))
    }

    pub fn contains(&self, pos: Coords) -> bool {
        (0..self.size).contains(&pos.0) && (0..self.size).contains(&pos.1)
    }

    pub fn center(&self) -> Coords {
        (self.size / 2, self.size / 2)
    }

    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }
}
