// Teams widget: every team's roster, in display order.
//
// Each team is a header line followed by its players. The selected team's
// header is highlighted and scrolled into view.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the teams panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (lines, selected_line) = team_lines(state);

    let title = if state.draft_order.is_some() {
        "Teams (draft order)"
    } else {
        "Teams"
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let visible = area.height.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_for(selected_line, visible) as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Lines for the panel, plus the index of the selected team's header.
pub fn team_lines(state: &ViewState) -> (Vec<Line<'static>>, usize) {
    if state.teams.is_empty() {
        return (vec![Line::from("  No teams in workbook")], 0);
    }

    let mut lines = Vec::new();
    let mut selected_line = 0;
    for (idx, team) in state.teams.iter().enumerate() {
        let selected = idx == state.selected_team;
        if selected {
            selected_line = lines.len();
        }
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{} ({})", team.name, team.players.len()),
            style,
        )));

        if team.players.is_empty() {
            lines.push(Line::from(Span::styled(
                "    --",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for player in &team.players {
            lines.push(Line::from(format!(
                "    {:>4} {:<3} {}",
                player.grade.to_string(),
                player.mw.to_string(),
                player.name
            )));
        }
    }
    (lines, selected_line)
}

/// Scroll so `line` stays inside a viewport of `visible` rows.
fn scroll_for(line: usize, visible: usize) -> usize {
    if visible == 0 || line < visible {
        0
    } else {
        line + 1 - visible
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
