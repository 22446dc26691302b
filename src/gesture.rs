use crate::config::{SWIPE_THRESHOLD, TERMINAL_CELL_PITCH};
use crate::input::Direction;

/// A pointer location in swipe units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Converts a terminal cell to swipe units using the fixed cell pitch.
    #[must_use]
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: i32::from(column) * TERMINAL_CELL_PITCH.0,
            y: i32::from(row) * TERMINAL_CELL_PITCH.1,
        }
    }
}

/// Classifies a press-to-release displacement as a swipe.
///
/// The dominant axis wins; a tie counts as vertical. The displacement along
/// that axis must exceed the threshold.
#[must_use]
pub fn swipe_direction(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx > SWIPE_THRESHOLD {
            Some(Direction::Right)
        } else if dx < -SWIPE_THRESHOLD {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy > SWIPE_THRESHOLD {
        Some(Direction::Down)
    } else if dy < -SWIPE_THRESHOLD {
        Some(Direction::Up)
    } else {
        None
    }
}

/// What a completed press-and-release turned out to be.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Gesture {
    Swipe(Direction),
    Tap,
}

/// Remembers where the current press started.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    origin: Option<Point>,
}

impl SwipeTracker {
    pub fn begin(&mut self, at: Point) {
        self.origin = Some(at);
    }

    /// Ends the gesture started by the last press.
    ///
    /// Returns `None` when no press is being tracked.
    pub fn end(&mut self, at: Point) -> Option<Gesture> {
        let origin = self.origin.take()?;
        Some(match swipe_direction(at.x - origin.x, at.y - origin.y) {
            Some(direction) => Gesture::Swipe(direction),
            None => Gesture::Tap,
        })
    }

    /// Forgets a press that is still held.
    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
