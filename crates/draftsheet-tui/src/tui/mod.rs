// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the roster snapshot pushed by the
// app loop. It applies `UiUpdate` messages to `ViewState` and re-renders at
// ~30 fps. Selection, filtering, and confirmations are local to the TUI.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use draftsheet_core::sheet::Player;
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{AppSnapshot, Notice, TeamSnapshot, UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// A destructive action waiting for y/n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Quit,
    ResetPool,
    ResetTeams,
}

/// TUI-local state that mirrors the app state for rendering.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Pool, sorted by name.
    pub available: Vec<Player>,
    /// Teams in display order.
    pub teams: Vec<TeamSnapshot>,
    pub draft_order: Option<Vec<String>>,
    pub synced_at: String,
    /// Index into the filtered pool.
    pub selected_player: usize,
    /// Index into `teams`.
    pub selected_team: usize,
    pub filter_text: String,
    pub filter_mode: bool,
    pub confirm: Option<Confirm>,
    /// Latest message from the app loop.
    pub notice: Option<Notice>,
}

impl ViewState {
    /// Apply a full snapshot, keeping the selected player and team by name
    /// when they are still present.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        let previous = self.selected_player_name().map(str::to_string);
        let previous_team = self.selected_team_name().map(str::to_string);

        self.available = snapshot.available;
        self.teams = snapshot.teams;
        self.draft_order = snapshot.draft_order;
        self.synced_at = snapshot.synced_at;

        let kept = previous.and_then(|name| {
            self.filtered_players()
                .iter()
                .position(|p| p.name == name)
        });
        if let Some(idx) = kept {
            self.selected_player = idx;
        }
        let kept_team =
            previous_team.and_then(|name| self.teams.iter().position(|t| t.name == name));
        if let Some(idx) = kept_team {
            self.selected_team = idx;
        }
        self.clamp_selection();
    }

    /// Pool entries matching the current filter text.
    pub fn filtered_players(&self) -> Vec<&Player> {
        widgets::available::filter_players(&self.available, &self.filter_text)
    }

    pub fn selected_player_name(&self) -> Option<&str> {
        self.filtered_players()
            .get(self.selected_player)
            .map(|p| p.name.as_str())
    }

    pub fn selected_team_name(&self) -> Option<&str> {
        self.teams.get(self.selected_team).map(|t| t.name.as_str())
    }

    /// Keep both selections inside their lists.
    pub fn clamp_selection(&mut self) {
        let pool_len = self.filtered_players().len();
        self.selected_player = self.selected_player.min(pool_len.saturating_sub(1));
        self.selected_team = self.selected_team.min(self.teams.len().saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => state.apply_snapshot(*snapshot),
        UiUpdate::Notice(notice) => state.notice = Some(notice),
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::available::render(frame, layout.pool, state);
    widgets::teams::render(frame, layout.teams, state);
    render_help_bar(frame, &layout, state);

    if let Some(confirm) = state.confirm {
        widgets::confirm::render(frame, frame.area(), confirm);
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let text = if state.filter_mode {
        " Type to filter | Enter:Keep | Esc:Clear"
    } else {
        " ↑↓:Player | ←→/Tab:Team | Enter:Assign | /:Filter | o:Order | P:Reset pool | T:Reset teams | R:Reload | q:Quit"
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits or the app loop goes away.
///
/// Installs a panic hook that restores the terminal before the default hook
/// runs.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // App loop has shut down
                    None => break,
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
