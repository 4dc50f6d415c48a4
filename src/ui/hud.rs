use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;

const TITLE: &str = "Retro Snake";
const HELP: &str = "arrows/WASD steer · t theme · q quit";

/// Supplemental values displayed alongside the game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    /// High score as it stood before the most recent round ended; the
    /// game-over popup compares against this to announce a new record.
    pub game_over_reference_high_score: u32,
}

/// Renders the title/stats row and help row, returning the play area between
/// them.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo,
    theme: &Theme,
) -> Rect {
    let [title_row, play_area, help_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let stats = stats_line(state, info, theme);
    let stats_width = u16::try_from(stats_text(state, info).width()).unwrap_or(u16::MAX);
    let [title_area, stats_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(stats_width)]).areas(title_row);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE)).style(
            Style::new()
                .fg(theme.hud_title)
                .add_modifier(Modifier::BOLD),
        ),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(stats).alignment(Alignment::Right),
        stats_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(HELP))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_muted)),
        help_row,
    );

    play_area
}

fn stats_line(state: &GameState, info: &HudInfo, theme: &Theme) -> Line<'static> {
    let value_style = Style::new().fg(theme.hud_score);
    let label_style = Style::new().fg(theme.hud_muted);

    Line::from(vec![
        Span::styled("Score: ", label_style),
        Span::styled(state.score.to_string(), value_style),
        Span::styled(" │ Length: ", label_style),
        Span::styled(state.snake.len().to_string(), value_style),
        Span::styled(" │ Hi: ", label_style),
        Span::styled(info.high_score.to_string(), value_style),
    ])
}

fn stats_text(state: &GameState, info: &HudInfo) -> String {
    format!(
        "Score: {} │ Length: {} │ Hi: {}",
        state.score,
        state.snake.len(),
        info.high_score,
    )
}
