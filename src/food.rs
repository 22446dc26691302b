use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell of the grid.
    ///
    /// Cells under the snake are not excluded.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(spawn_position(rng, bounds))
    }
}

/// Picks a uniformly random cell inside `bounds`.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
