use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BASE_TICK_RATE, GridSize, MAX_TICK_RATE, POINTS_PER_SPEED_STEP};
use crate::food::Food;
use crate::input::{Direction, direction_change_is_valid};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver,
}

/// What ended the last game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one [`GameState::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    Continued,
    /// Food was eaten; the tick timer must be rescheduled at `tick_rate`.
    Ate { tick_rate: u32 },
    GameOver { score: u32, reason: DeathReason },
}

/// Returns the tick rate in ticks per second for `score`.
#[must_use]
pub fn tick_rate_for_score(score: u32) -> u32 {
    (BASE_TICK_RATE + score / POINTS_PER_SPEED_STEP).min(MAX_TICK_RATE)
}

/// Returns the delay between ticks at `tick_rate` ticks per second.
#[must_use]
pub fn tick_interval(tick_rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(tick_rate.max(1)))
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    heading: Option<Direction>,
    requested: Option<Direction>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a not-yet-started game seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let food = Food::spawn(&mut rng, bounds);
        Self {
            snake: Snake::new(center_of(bounds)),
            food,
            score: 0,
            status: GameStatus::NotStarted,
            heading: None,
            requested: None,
            bounds,
            rng,
        }
    }

    /// Resets the board and enters `Running`. Also used to restart.
    pub fn start(&mut self) {
        self.snake = Snake::new(center_of(self.bounds));
        self.heading = None;
        self.requested = None;
        self.score = 0;
        self.food = Food::spawn(&mut self.rng, self.bounds);
        self.status = GameStatus::Running;

        info!(
            "game started on {}x{} grid, food at ({}, {})",
            self.bounds.width, self.bounds.height, self.food.position.x, self.food.position.y
        );
    }

    /// Advances the simulation by one tick.
    ///
    /// Returns `None` when the game is not running.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.status != GameStatus::Running {
            return None;
        }

        if let Some(requested) = self.requested.take() {
            self.heading = Some(requested);
        }

        let Some(heading) = self.heading else {
            return Some(StepOutcome::Continued);
        };

        let next_head = self.snake.head().stepped(heading);
        if !next_head.is_within_bounds(self.bounds) {
            return Some(self.finish(DeathReason::WallCollision));
        }

        self.snake.advance(next_head);

        if self.snake.head_overlaps_body() {
            return Some(self.finish(DeathReason::SelfCollision));
        }

        if next_head == self.food.position {
            self.snake.grow();
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, self.bounds);

            let tick_rate = self.tick_rate();
            debug!(
                "food eaten, score {} length {}, tick rate {tick_rate}/s",
                self.score,
                self.snake.target_len()
            );
            return Some(StepOutcome::Ate { tick_rate });
        }

        Some(StepOutcome::Continued)
    }

    /// Requests a new heading for the next step.
    ///
    /// Requests along the axis the snake is already travelling are ignored.
    /// Later accepted requests replace earlier ones until the next step.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        if !direction_change_is_valid(self.heading, requested) {
            debug!("ignored {requested:?} while heading {:?}", self.heading);
            return false;
        }

        self.requested = Some(requested);
        true
    }

    /// Committed heading; `None` until the first accepted move is stepped.
    #[must_use]
    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// Direction waiting to be committed by the next step.
    #[must_use]
    pub fn requested_direction(&self) -> Option<Direction> {
        self.requested
    }

    /// Current tick rate in ticks per second.
    #[must_use]
    pub fn tick_rate(&self) -> u32 {
        tick_rate_for_score(self.score)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Replaces the heading directly, bypassing the pending-request slot.
    #[cfg(test)]
    pub(crate) fn force_heading(&mut self, heading: Option<Direction>) {
        self.heading = heading;
        self.requested = None;
    }

    fn finish(&mut self, reason: DeathReason) -> StepOutcome {
        self.status = GameStatus::GameOver;
        info!("game over: {reason:?} with score {}", self.score);
        StepOutcome::GameOver {
            score: self.score,
            reason,
        }
    }
}

fn center_of(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{BASE_TICK_RATE, GridSize, MAX_TICK_RATE};
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{
        DeathReason, GameState, GameStatus, StepOutcome, tick_interval, tick_rate_for_score,
    };

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, seed);
        state.start();
        state
    }

    #[test]
    fn new_state_waits_for_start() {
        let mut state = GameState::new_with_seed(BOUNDS, 1);

        assert_eq!(state.status, GameStatus::NotStarted);
        assert_eq!(state.step(), None);
        assert!(!state.set_direction(Direction::Up));
    }

    #[test]
    fn start_centres_a_single_still_segment() {
        let state = running(1);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.target_len(), 1);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.heading(), None);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_rate(), BASE_TICK_RATE);
        assert!(state.food.position.is_within_bounds(BOUNDS));
    }

    #[test]
    fn zero_heading_never_moves_or_collides() {
        let mut state = running(2);
        state.snake = Snake::from_segments(vec![
            Position { x: 3, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 5, y: 5 },
        ]);
        state.food = Food::new(Position { x: 0, y: 0 });

        for _ in 0..20 {
            assert_eq!(state.step(), Some(StepOutcome::Continued));
        }

        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn direction_takes_effect_on_next_step() {
        let mut state = running(3);
        state.food = Food::new(Position { x: 0, y: 0 });

        assert!(state.set_direction(Direction::Right));
        assert_eq!(state.heading(), None);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });

        state.step();
        assert_eq!(state.heading(), Some(Direction::Right));
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn reversal_is_ignored_and_perpendicular_accepted() {
        let mut state = running(4);
        state.force_heading(Some(Direction::Right));

        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.requested_direction(), None);

        assert!(state.set_direction(Direction::Up));
        assert!(state.set_direction(Direction::Down));
        assert_eq!(state.requested_direction(), Some(Direction::Down));
    }

    #[test]
    fn two_quick_turns_cannot_reverse_into_the_body() {
        let mut state = running(5);
        state.snake = Snake::from_segments(vec![
            Position { x: 3, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 5, y: 5 },
        ]);
        state.food = Food::new(Position { x: 0, y: 0 });
        state.force_heading(Some(Direction::Right));

        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Left));

        assert_eq!(state.step(), Some(StepOutcome::Continued));
        assert_eq!(state.snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn wall_collision_leaves_snake_untouched() {
        let mut state = running(6);
        state.snake = Snake::new(Position { x: 9, y: 1 });
        state.force_heading(Some(Direction::Right));

        let outcome = state.step();

        assert_eq!(
            outcome,
            Some(StepOutcome::GameOver {
                score: 0,
                reason: DeathReason::WallCollision
            })
        );
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.head(), Position { x: 9, y: 1 });
        assert_eq!(state.step(), None);
    }

    #[test]
    fn every_edge_is_a_wall() {
        let cases = [
            (Position { x: 0, y: 4 }, Direction::Left),
            (Position { x: 4, y: 0 }, Direction::Up),
            (Position { x: 4, y: 9 }, Direction::Down),
            (Position { x: 9, y: 4 }, Direction::Right),
        ];

        for (start, heading) in cases {
            let mut state = running(7);
            state.snake = Snake::new(start);
            state.force_heading(Some(heading));

            assert!(matches!(
                state.step(),
                Some(StepOutcome::GameOver {
                    reason: DeathReason::WallCollision,
                    ..
                })
            ));
        }
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut state = running(8);
        state.score = 3;
        state.snake = Snake::from_segments(vec![
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 1, y: 3 },
            Position { x: 1, y: 2 },
            Position { x: 2, y: 2 },
        ]);
        state.food = Food::new(Position { x: 9, y: 9 });
        state.force_heading(Some(Direction::Down));

        assert_eq!(
            state.step(),
            Some(StepOutcome::GameOver {
                score: 3,
                reason: DeathReason::SelfCollision
            })
        );
    }

    #[test]
    fn moving_into_the_vacated_tail_cell_is_safe() {
        let mut state = running(9);
        state.snake = Snake::from_segments(vec![
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 3 },
            Position { x: 2, y: 3 },
        ]);
        state.food = Food::new(Position { x: 9, y: 9 });
        state.force_heading(Some(Direction::Up));

        assert_eq!(state.step(), Some(StepOutcome::Continued));
        assert_eq!(state.snake.head(), Position { x: 2, y: 2 });
    }

    #[test]
    fn eating_grows_target_and_score_by_one() {
        let mut state = running(10);
        state.snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 3, y: 1 },
        ]);
        state.food = Food::new(Position { x: 4, y: 1 });
        state.force_heading(Some(Direction::Right));

        assert_eq!(
            state.step(),
            Some(StepOutcome::Ate {
                tick_rate: BASE_TICK_RATE
            })
        );
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.target_len(), 4);
        assert_eq!(state.snake.len(), 3);
        assert!(state.food.position.is_within_bounds(BOUNDS));

        state.food = Food::new(Position { x: 0, y: 9 });
        state.step();
        assert_eq!(state.snake.len(), 4);
        state.step();
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn fifth_food_raises_tick_rate() {
        let mut state = running(11);
        state.score = 4;
        state.food = Food::new(Position { x: 6, y: 5 });
        state.force_heading(Some(Direction::Right));

        assert_eq!(
            state.step(),
            Some(StepOutcome::Ate {
                tick_rate: BASE_TICK_RATE + 1
            })
        );
        assert_eq!(state.tick_rate(), BASE_TICK_RATE + 1);
    }

    #[test]
    fn restart_resets_the_session() {
        let mut state = running(12);
        state.score = 9;
        state.snake = Snake::new(Position { x: 0, y: 0 });
        state.force_heading(Some(Direction::Left));
        state.step();
        assert_eq!(state.status, GameStatus::GameOver);

        state.start();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.heading(), None);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
    }

    #[test]
    fn tick_rate_follows_fixed_curve() {
        for score in 0..5 {
            assert_eq!(tick_rate_for_score(score), BASE_TICK_RATE);
        }
        for score in 5..10 {
            assert_eq!(tick_rate_for_score(score), BASE_TICK_RATE + 1);
        }
        assert_eq!(tick_rate_for_score(74), MAX_TICK_RATE - 1);
        assert_eq!(tick_rate_for_score(75), MAX_TICK_RATE);
        assert_eq!(tick_rate_for_score(10_000), MAX_TICK_RATE);
    }

    #[test]
    fn tick_interval_is_reciprocal_of_rate() {
        assert_eq!(tick_interval(5).as_millis(), 200);
        assert_eq!(tick_interval(20).as_millis(), 50);
        assert_eq!(tick_interval(0).as_millis(), 1000);
    }
}
