use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::styled(
            "Snake Game",
            Style::new().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Press SPACE or TAP to Start"),
        Line::from(""),
        Line::styled("Arrows, swipe or buttons to steer", Style::new().fg(theme.muted)),
        Line::styled("[Q]/[Esc] Quit", Style::new().fg(theme.muted)),
    ];

    render_popup(frame, area, " start ", lines);
}

/// Draws the game-over screen with the final score.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::new()
                .fg(theme.game_over_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("Press C / TAP to Play Again"),
        Line::styled("[Q]/[Esc] Quit", Style::new().fg(theme.muted)),
    ];

    render_popup(frame, area, " game over ", lines);
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let content_width = lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.width())
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0)
        .max(title.width());

    // Two border columns plus one column of padding on each side.
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_popup(area, width, height);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title.to_owned())),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    center
}
