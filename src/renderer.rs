use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Block;

use crate::app::{App, OverlaySubscription};
use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_HEAD, GLYPH_SNAKE_SEGMENT, THEME_CLASSIC, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::ui::controls::render_controls;
use crate::ui::layout::ScreenLayout;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full frame from immutable state and returns its layout.
pub fn render(frame: &mut Frame<'_>, app: &App) -> ScreenLayout {
    let theme = &THEME_CLASSIC;
    let state = app.state();
    let layout = ScreenLayout::compute(frame.area(), state.bounds());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg))
        .title_top(
            Line::styled(
                format!(" Score: {} ", state.score),
                Style::new().fg(theme.score).add_modifier(Modifier::BOLD),
            )
            .left_aligned(),
        )
        .title_top(
            Line::styled(
                format!(" {}/s ", state.tick_rate()),
                Style::new().fg(theme.muted),
            )
            .right_aligned(),
        );
    frame.render_widget(block, layout.board);

    render_food(frame, &layout, state, theme);
    render_snake(frame, &layout, state, theme);
    render_controls(
        frame,
        &layout,
        theme,
        state.status == GameStatus::Running,
    );

    match app.overlay() {
        Some(OverlaySubscription::Start) => render_start_menu(frame, layout.board, theme),
        Some(OverlaySubscription::GameOver) => render_game_over_menu(
            frame,
            layout.board,
            state.score,
            app.death_reason(),
            theme,
        ),
        None => {}
    }

    layout
}

fn render_food(frame: &mut Frame<'_>, layout: &ScreenLayout, state: &GameState, theme: &Theme) {
    let Some((x, y)) = layout.cell_origin(state.bounds(), state.food.position) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).bg(theme.play_bg),
    );
}

/// Head is drawn last so it wins when the snake is a single cell.
fn render_snake(frame: &mut Frame<'_>, layout: &ScreenLayout, state: &GameState, theme: &Theme) {
    let bounds = state.bounds();
    let buffer = frame.buffer_mut();
    let last = state.snake.len().saturating_sub(1);

    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = layout.cell_origin(bounds, *segment) else {
            continue;
        };

        if index == last {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_eyes)
                    .bg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_SEGMENT,
                Style::new().bg(theme.snake_tail),
            );
        } else {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_SEGMENT,
                Style::new().bg(theme.snake_body),
            );
        }
    }
}
