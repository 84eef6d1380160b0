// Available players widget: filterable table of the unassigned pool.
//
// Columns: Grade, MW, Player. The selected row is highlighted and kept in
// view as the selection moves.

use draftsheet_core::sheet::Player;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the pool table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let filtered = state.filtered_players();

    let header = Row::new(vec![
        Cell::from("Grade"),
        Cell::from("MW"),
        Cell::from("Player"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = filtered
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.grade.to_string()),
                Cell::from(p.mw.to_string()),
                Cell::from(p.name.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Min(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(build_title(state, filtered.len())),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let selected = (!filtered.is_empty()).then_some(state.selected_player);
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Case-insensitive substring match on the player name.
pub fn filter_players<'a>(players: &'a [Player], filter_text: &str) -> Vec<&'a Player> {
    let needle = filter_text.to_lowercase();
    players
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Available Players");
    if !state.filter_text.is_empty() || state.filter_mode {
        title.push_str(&format!(" \"{}\"", state.filter_text));
    }
    title.push_str(&format!(" ({}/{})", filtered_count, state.available.len()));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use draftsheet_core::sheet::CellValue;

    fn make_player(name: &str, grade: f64) -> Player {
        Player::new(CellValue::Number(grade), CellValue::text("W"), name)
    }

    #[test]
    fn filter_empty_text_keeps_everything() {
        let players = vec![make_player("Doe, Jane", 9.0), make_player("Roe, Rick", 10.0)];
        assert_eq!(filter_players(&players, "").len(), 2);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let players = vec![
            make_player("Doe, Jane", 9.0),
            make_player("Roe, Rick", 10.0),
            make_player("Janeway, Kay", 11.0),
        ];
        let result = filter_players(&players, "JANE");
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Doe, Jane", "Janeway, Kay"]);
    }

    #[test]
    fn title_shows_filter_and_counts() {
        let mut state = ViewState::default();
        state.available = vec![make_player("Doe, Jane", 9.0), make_player("Roe, Rick", 10.0)];
        state.filter_text = "doe".into();
        let title = build_title(&state, 1);
        assert_eq!(title.to_string(), "Available Players \"doe\" (1/2)");
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(60, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_shows_whole_number_grades() {
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.available = vec![make_player("Doe, Jane", 9.0)];
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Doe, Jane"));
        assert!(!text.contains("9.0"));
    }
}
