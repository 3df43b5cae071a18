use std::collections::HashSet;

use log::debug;

use crate::{Coords, GridInt};
use crate::grid::GridSpace;
use crate::turns::TurnLedger;
use Direction::*;

/// Direction every fresh chain starts out with.
pub const INITIAL_DIRECTION: Direction = Down;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step in screen coordinates, y grows downwards.
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    position: Coords,
    direction: Direction,
}

impl Segment {
    pub fn new(position: Coords, direction: Direction) -> Self {
        Segment { position, direction }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Chain of segments, head first. Never empty.
#[derive(Clone, Debug)]
pub struct Snake {
    grid: GridSpace,
    segments: Vec<Segment>,
    direction: Direction,
    turns: TurnLedger,
}

impl Snake {
    pub fn new(grid: GridSpace, start: Coords) -> Self {
        let mut snake = Snake {
            grid,
            segments: vec![],
            direction: INITIAL_DIRECTION,
            turns: TurnLedger::new(),
        };
        snake.reset(start);
        snake
    }

    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_turns(&self) -> &TurnLedger {
        &self.turns
    }

    pub fn positions(&self) -> Vec<Coords> {
        self.segments.iter().map(Segment::position).collect()
    }

    pub fn occupied(&self) -> HashSet<Coords> {
        self.segments.iter().map(Segment::position).collect()
    }

    /// Returns whether the turn was accepted. Reversing onto the body is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.reverse() {
            return false;
        }

        self.direction = new_direction;
        let head = self.head().position;
        self.turns.record(head, new_direction);
        debug!("Turn {:?} recorded at {:?}", new_direction, head);
        true
    }

    /// Moves every segment one cell. Segments pick up pending turns at the cell
    /// they are standing on before moving; the tail clears the turn behind it.
    pub fn advance(&mut self) {
        let last = self.segments.len() - 1;

        for (i, segment) in self.segments.iter_mut().enumerate() {
            if let Some(turn) = self.turns.consume(segment.position, i == last) {
                segment.direction = turn;
            }
            segment.position = self.grid.offset(segment.position, segment.direction.delta());
        }
    }

    /// Appends a segment one cell behind the tail, travelling the same way.
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let behind = tail.direction.reverse().delta();
        let position = self.grid.offset(tail.position, behind);
        self.segments.push(Segment::new(position, tail.direction));
    }

    /// Only the head is checked: trailing segments follow one path and never cross.
    pub fn has_self_collision(&self) -> bool {
        let head = self.head().position;
        self.segments[1..].iter().any(|s| s.position == head)
    }

    pub fn reset(&mut self, start: Coords) {
        let start = self.grid.wrap_coords(start);
        self.segments.clear();
        self.segments.push(Segment::new(start, INITIAL_DIRECTION));
        self.direction = INITIAL_DIRECTION;
        self.turns.clear();
    }
}
