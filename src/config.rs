use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Playfield size in cells (a 400x400 board of 20-unit blocks).
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Tick rate, in ticks per second, at score zero.
pub const BASE_TICK_RATE: u32 = 5;

/// Upper bound on the tick rate regardless of score.
pub const MAX_TICK_RATE: u32 = 20;

/// Score needed per tick-rate step.
pub const POINTS_PER_SPEED_STEP: u32 = 5;

/// Minimum displacement along the dominant axis for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: i32 = 30;

/// Approximate size of one terminal cell in swipe units (columns, rows).
pub const TERMINAL_CELL_PITCH: (i32, i32) = (8, 16);

/// Terminal columns used to draw one logical cell.
pub const CELL_COLUMNS: u16 = 2;

/// Height of the on-screen control row.
pub const CONTROLS_HEIGHT: u16 = 3;

/// Width of a single on-screen control button.
pub const BUTTON_WIDTH: u16 = 7;

/// Event poll timeout for the main loop.
pub const FRAME_POLL_MS: u64 = 16;

/// Colour palette applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    /// Fill of the head cell.
    pub snake_head: Color,
    /// Colour of the eyes drawn on the head.
    pub snake_eyes: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub score: Color,
    pub title: Color,
    pub game_over_title: Color,
    pub muted: Color,
}

/// Green snake and red food on a black board.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(0x00, 0x96, 0x00),
    snake_eyes: Color::White,
    snake_body: Color::Rgb(0x00, 0xC8, 0x00),
    snake_tail: Color::Rgb(0x00, 0xFA, 0x96),
    food: Color::Rgb(0xC8, 0x00, 0x00),
    play_bg: Color::Black,
    border_fg: Color::White,
    score: Color::White,
    title: Color::Rgb(0x00, 0xC8, 0x00),
    game_over_title: Color::Red,
    muted: Color::DarkGray,
};

/// Border whose solid half faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD: &str = "••";
pub const GLYPH_SNAKE_SEGMENT: &str = "  ";
pub const GLYPH_FOOD: &str = "▐▌";

