use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell in `direction`.
    ///
    /// No clamping: the result may lie outside the grid. Off-grid positions
    /// are legal intermediate states; collision evaluation decides what they
    /// mean.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Canonical start body, head first: four cells on row 9, heading right.
/// Used both at construction and after a reset.
const INITIAL_SEGMENTS: [Position; 4] = [
    Position { x: 6, y: 9 },
    Position { x: 5, y: 9 },
    Position { x: 4, y: 9 },
    Position { x: 3, y: 9 },
];

const INITIAL_DIRECTION: Direction = Direction::Right;

/// Mutable snake state: the ordered body, its authoritative travel direction,
/// and the one-tick growth latch.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    grow: bool,
}

impl Snake {
    /// Creates the canonical initial snake.
    #[must_use]
    pub fn initial() -> Self {
        Self::from_segments(INITIAL_SEGMENTS.to_vec(), INITIAL_DIRECTION)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            grow: false,
        }
    }

    /// Restores the canonical initial body and direction.
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    /// Queues growth for the next advance.
    pub fn grow_next(&mut self) {
        self.grow = true;
    }

    /// Sets the travel direction used by subsequent advances.
    ///
    /// Callers are expected to have validated the change against the
    /// no-reversal rule; this method just records it.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Moves one cell in the current direction.
    ///
    /// The new head is pushed at the front. A pending growth latch keeps the
    /// tail in place (net length +1) and is cleared; otherwise the tail cell
    /// is removed (net length unchanged).
    pub fn advance(&mut self) {
        let next_head = self.next_head_position();
        self.body.push_front(next_head);

        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the head position the next advance would produce.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
