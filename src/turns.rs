use std::collections::HashMap;

use crate::Coords;
use crate::snake::Direction;

/// Pending turns, keyed by the cell where the head turned.
///
/// Every segment walks the exact path of the head, so a turn stays here until
/// the tail, which is always the last one through a given cell, has taken it.
#[derive(Clone, Debug, Default)]
pub struct TurnLedger {
    turns: HashMap<Coords, Direction>,
}

impl TurnLedger {
    pub fn new() -> Self {
        TurnLedger { turns: HashMap::new() }
    }

    /// Only the latest turn issued at a cell matters, older ones are overwritten.
    pub fn record(&mut self, cell: Coords, direction: Direction) {
        self.turns.insert(cell, direction);
    }

    /// Looks up the turn at `cell`, removing it when the caller is the tail.
    pub fn consume(&mut self, cell: Coords, is_tail: bool) -> Option<Direction> {
        if is_tail {
            self.turns.remove(&cell)
        } else {
            self.turns.get(&cell).copied()
        }
    }

    pub fn get(&self, cell: Coords) -> Option<Direction> {
        self.turns.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
