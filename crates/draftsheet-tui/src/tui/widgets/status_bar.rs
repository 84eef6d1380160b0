// Status bar widget: pool size, sync time, latest notice.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::NoticeLevel;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [title] [pool count] [sync time] [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(" draftsheet ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{} available", state.available.len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(sync_label(&state.synced_at), Style::default().fg(Color::White)),
    ];

    if let Some(notice) = &state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            notice.message.clone(),
            Style::default().fg(notice_color(notice.level)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Error => Color::Red,
    }
}

pub fn sync_label(synced_at: &str) -> String {
    if synced_at.is_empty() {
        "not loaded".to_string()
    } else {
        format!("synced {synced_at}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
