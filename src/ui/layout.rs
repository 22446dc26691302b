use ratatui::layout::{Constraint, Flex, Layout, Margin, Position as ScreenPosition, Rect};

use crate::config::{BUTTON_WIDTH, CELL_COLUMNS, CONTROLS_HEIGHT, GridSize};
use crate::input::Direction;
use crate::snake::Position;

/// Left-to-right order of the on-screen control buttons.
pub const BUTTON_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Down,
    Direction::Right,
];

/// One on-screen direction button.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ControlButton {
    pub direction: Direction,
    pub area: Rect,
}

/// Screen regions for one frame, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScreenLayout {
    /// Bordered board, border included.
    pub board: Rect,
    pub buttons: [ControlButton; 4],
}

impl ScreenLayout {
    /// Centres the board and the control row inside `area`.
    #[must_use]
    pub fn compute(area: Rect, grid: GridSize) -> Self {
        let board_width = grid.width.saturating_mul(CELL_COLUMNS).saturating_add(2);
        let board_height = grid.height.saturating_add(2);

        let [board_row, controls_row] = Layout::vertical([
            Constraint::Length(board_height),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [board] = Layout::horizontal([Constraint::Length(board_width)])
            .flex(Flex::Center)
            .areas(board_row);

        let button_areas: [Rect; 4] =
            Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 4])
                .flex(Flex::Center)
                .spacing(1)
                .areas(controls_row);

        let buttons = std::array::from_fn(|index| ControlButton {
            direction: BUTTON_ORDER[index],
            area: button_areas[index],
        });

        Self { board, buttons }
    }

    /// Board area inside the border.
    #[must_use]
    pub fn board_inner(&self) -> Rect {
        self.board.inner(Margin::new(1, 1))
    }

    #[must_use]
    pub fn board_contains(&self, column: u16, row: u16) -> bool {
        self.board.contains(ScreenPosition::new(column, row))
    }

    /// Returns the direction of the button under `(column, row)`.
    #[must_use]
    pub fn button_at(&self, column: u16, row: u16) -> Option<Direction> {
        let point = ScreenPosition::new(column, row);
        self.buttons
            .iter()
            .find(|button| button.area.contains(point))
            .map(|button| button.direction)
    }

    /// Terminal coordinate of the left column of a grid cell, when visible.
    #[must_use]
    pub fn cell_origin(&self, grid: GridSize, position: Position) -> Option<(u16, u16)> {
        if !position.is_within_bounds(grid) {
            return None;
        }

        let inner = self.board_inner();
        let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
        let y_offset = u16::try_from(position.y).ok()?;

        let x = inner.x.checked_add(x_offset)?;
        let y = inner.y.checked_add(y_offset)?;
        if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
            return None;
        }

        Some((x, y))
    }
}
