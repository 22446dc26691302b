use std::time::Instant;

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info};

use crate::game::{DeathReason, GameState, GameStatus, StepOutcome};
use crate::gesture::{Gesture, Point, SwipeTracker};
use crate::input::{Direction, KeyCommand, key_command};
use crate::timer::TickTimer;
use crate::ui::layout::ScreenLayout;

/// How an overlay was dismissed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dismiss {
    Key(KeyCommand),
    Tap,
}

/// Overlay listener that exists only while its game state is current.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OverlaySubscription {
    Start,
    GameOver,
}

impl OverlaySubscription {
    /// Returns the overlay listening in `status`, if any.
    #[must_use]
    pub fn for_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::NotStarted => Some(Self::Start),
            GameStatus::GameOver => Some(Self::GameOver),
            GameStatus::Running => None,
        }
    }

    /// Returns true when `dismiss` closes this overlay.
    #[must_use]
    pub fn accepts(self, dismiss: Dismiss) -> bool {
        matches!(
            (self, dismiss),
            (_, Dismiss::Tap)
                | (Self::Start, Dismiss::Key(KeyCommand::Start))
                | (Self::GameOver, Dismiss::Key(KeyCommand::Restart))
        )
    }
}

/// The presentation shell: game state plus everything needed to drive it.
#[derive(Debug)]
pub struct App {
    state: GameState,
    timer: TickTimer,
    swipe: SwipeTracker,
    layout: Option<ScreenLayout>,
    death_reason: Option<DeathReason>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            timer: TickTimer::new(),
            swipe: SwipeTracker::default(),
            layout: None,
            death_reason: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Overlay currently shown and listening for its dismiss action.
    #[must_use]
    pub fn overlay(&self) -> Option<OverlaySubscription> {
        OverlaySubscription::for_status(self.state.status)
    }

    /// Cause of the most recent game over.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores the layout of the last drawn frame for mouse hit-testing.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = Some(layout);
    }

    /// Dispatches one terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(command) = key_command(key) else {
            return;
        };

        match command {
            KeyCommand::Quit => self.quit(),
            KeyCommand::Direction(direction) => self.request_direction(direction),
            other => self.dismiss_overlay(Dismiss::Key(other), now),
        }
    }

    /// Left press starts a gesture; release either swipes or clicks.
    ///
    /// A release whose press was dropped by a state change does nothing.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let point = Point::from_cell(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.begin(point),
            MouseEventKind::Up(MouseButton::Left) => {
                match self.swipe.end(point) {
                    Some(Gesture::Swipe(direction)) => self.request_direction(direction),
                    Some(Gesture::Tap) => self.click(mouse.column, mouse.row, now),
                    None => {}
                }
            }
            _ => {}
        }
    }

    /// Fires the tick timer if due and applies the step result.
    pub fn on_frame(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.timer.poll(now) {
            return None;
        }

        let outcome = self.state.step()?;
        match outcome {
            StepOutcome::Continued => {}
            StepOutcome::Ate { tick_rate } => self.timer.reschedule(tick_rate, now),
            StepOutcome::GameOver { reason, .. } => {
                self.timer.cancel();
                self.swipe.cancel();
                self.death_reason = Some(reason);
            }
        }

        Some(outcome)
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(layout) = self.layout else {
            return;
        };

        if self.overlay().is_some() {
            if layout.board_contains(column, row) {
                self.dismiss_overlay(Dismiss::Tap, now);
            }
            return;
        }

        if let Some(direction) = layout.button_at(column, row) {
            self.request_direction(direction);
        }
    }

    fn request_direction(&mut self, direction: Direction) {
        if self.state.status == GameStatus::Running {
            self.state.set_direction(direction);
        }
    }

    fn dismiss_overlay(&mut self, dismiss: Dismiss, now: Instant) {
        let Some(overlay) = self.overlay() else {
            return;
        };

        if !overlay.accepts(dismiss) {
            return;
        }

        debug!("{overlay:?} overlay dismissed by {dismiss:?}");
        self.swipe.cancel();
        self.death_reason = None;
        self.state.start();
        self.timer.start(self.state.tick_rate(), now);
    }

    fn quit(&mut self) {
        self.timer.cancel();
        self.should_quit = true;
        info!("quit requested with score {}", self.state.score);
    }
}
