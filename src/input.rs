use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a direction moves along.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Unit displacement `(dx, dy)` in grid cells; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether `requested` may replace `heading`.
///
/// A stationary snake accepts any direction. A moving snake only accepts
/// turns onto the other axis.
#[must_use]
pub fn direction_change_is_valid(heading: Option<Direction>, requested: Direction) -> bool {
    heading.is_none_or(|current| current.axis() != requested.axis())
}

/// Keyboard commands understood by the shell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyCommand {
    Direction(Direction),
    /// Space: dismisses the start screen.
    Start,
    /// C: dismisses the game-over screen.
    Restart,
    Quit,
}

/// Maps a raw key event to a command, ignoring releases and unbound keys.
#[must_use]
pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyCommand::Quit)
        }
        KeyCode::Up => Some(KeyCommand::Direction(Direction::Up)),
        KeyCode::Down => Some(KeyCommand::Direction(Direction::Down)),
        KeyCode::Left => Some(KeyCommand::Direction(Direction::Left)),
        KeyCode::Right => Some(KeyCommand::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(KeyCommand::Start),
        KeyCode::Char('c' | 'C') => Some(KeyCommand::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(KeyCommand::Quit),
        _ => None,
    }
}
