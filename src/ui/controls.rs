use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::Theme;
use crate::input::Direction;
use crate::ui::layout::ScreenLayout;

/// Draws the four direction buttons; inactive buttons are dimmed.
pub fn render_controls(frame: &mut Frame<'_>, layout: &ScreenLayout, theme: &Theme, active: bool) {
    let style = if active {
        Style::new().fg(theme.border_fg)
    } else {
        Style::new().fg(theme.muted)
    };

    for button in layout.buttons {
        frame.render_widget(
            Paragraph::new(button_label(button.direction))
                .alignment(Alignment::Center)
                .style(style.add_modifier(Modifier::BOLD))
                .block(Block::bordered().border_style(style)),
            button.area,
        );
    }
}

fn button_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}
