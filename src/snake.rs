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
    /// Returns true when the position lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body plus the length it is allowed to reach.
///
/// Segments are stored oldest-first: the tail is at the front of the deque
/// and the head at the back.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    target_len: usize,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            body: VecDeque::from([start]),
            target_len: 1,
        }
    }

    /// Creates a snake from explicit segments, tail first and head last.
    ///
    /// The target length is the number of segments.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        let target_len = segments.len();
        Self {
            body: VecDeque::from(segments),
            target_len,
        }
    }

    /// Appends `next_head` and drops tail segments beyond the target length.
    pub fn advance(&mut self, next_head: Position) {
        self.body.push_back(next_head);
        while self.body.len() > self.target_len {
            let _ = self.body.pop_front();
        }
    }

    /// Raises the target length by one; the body catches up on later moves.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the oldest segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head overlaps any other segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .take(self.body.len() - 1)
            .any(|segment| *segment == head)
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

    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Iterates over segments from tail to head.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn bounds_are_half_open() {
        assert!(Position { x: 0, y: 0 }.is_within_bounds(BOUNDS));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(BOUNDS));
        assert!(!Position { x: 10, y: 0 }.is_within_bounds(BOUNDS));
        assert!(!Position { x: 0, y: 8 }.is_within_bounds(BOUNDS));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(BOUNDS));
        assert!(!Position { x: 3, y: -1 }.is_within_bounds(BOUNDS));
    }

    #[test]
    fn stepping_follows_screen_coordinates() {
        let origin = Position { x: 4, y: 4 };
        assert_eq!(origin.stepped(Direction::Up), Position { x: 4, y: 3 });
        assert_eq!(origin.stepped(Direction::Down), Position { x: 4, y: 5 });
        assert_eq!(origin.stepped(Direction::Left), Position { x: 3, y: 4 });
        assert_eq!(origin.stepped(Direction::Right), Position { x: 5, y: 4 });
    }

    #[test]
    fn snake_translates_when_not_growing() {
        let mut snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
        ]);

        snake.advance(Position { x: 3, y: 1 });

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position { x: 2, y: 1 });
        assert_eq!(snake.head(), Position { x: 3, y: 1 });
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        snake.grow();
        snake.advance(Position { x: 6, y: 5 });

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.target_len(), 2);
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::new(Position { x: 5, y: 5 });
        assert!(!snake.head_overlaps_body());

        let looped = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 2, y: 2 },
        ]);
        assert!(looped.head_overlaps_body());
    }

    #[test]
    fn segments_run_tail_to_head() {
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);

        let xs: Vec<i32> = snake.segments().map(|segment| segment.x).collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }
}
