use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::{GameOverCause, RoundEnd};

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    round: RoundEnd,
    reference_high_score: u32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let is_new_high = round.score > reference_high_score;
    let high_score = reference_high_score.max(round.score);
    let lines = vec![
        Line::from("GAME OVER").style(
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(match round.cause {
            GameOverCause::WallCollision => "You hit the wall",
            GameOverCause::SelfCollision => "You bit yourself",
        }),
        Line::from(format!("Score: {}", round.score)),
        Line::from(format!("High score: {high_score}")),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("Press an arrow key to play again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
