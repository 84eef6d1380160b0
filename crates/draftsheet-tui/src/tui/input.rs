// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// loop, or into local ViewState mutations (selection, filtering, prompts).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Confirm, ViewState};
use crate::protocol::{Notice, UserCommand};

const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press goes to the app loop and
/// `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports Press and Release on Windows
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits, whatever the mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if let Some(pending) = view_state.confirm {
        return handle_confirm(key_event, view_state, pending);
    }

    if view_state.filter_mode {
        handle_filter_mode(key_event, view_state);
        return None;
    }

    match key_event.code {
        // Player selection
        KeyCode::Up | KeyCode::Char('k') => {
            move_player(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_player(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            move_player(view_state, -(PAGE_SIZE as isize));
            None
        }
        KeyCode::PageDown => {
            move_player(view_state, PAGE_SIZE as isize);
            None
        }

        // Team selection
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            move_team(view_state, -1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            move_team(view_state, 1);
            None
        }

        KeyCode::Enter => assign_selected(view_state),

        KeyCode::Char('/') => {
            view_state.filter_mode = true;
            None
        }
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.clamp_selection();
            None
        }

        KeyCode::Char('o') => Some(UserCommand::RandomizeOrder),
        KeyCode::Char('R') => Some(UserCommand::Reload),
        KeyCode::Char('P') => {
            view_state.confirm = Some(Confirm::ResetPool);
            None
        }
        KeyCode::Char('T') => {
            view_state.confirm = Some(Confirm::ResetTeams);
            None
        }
        KeyCode::Char('q') => {
            view_state.confirm = Some(Confirm::Quit);
            None
        }

        _ => None,
    }
}

/// y confirms, n or Esc cancels, everything else is blocked. `q` also
/// confirms a pending quit.
fn handle_confirm(
    key_event: KeyEvent,
    view_state: &mut ViewState,
    pending: Confirm,
) -> Option<UserCommand> {
    let confirmed = match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('q') | KeyCode::Char('Q') if pending == Confirm::Quit => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return None,
    };
    view_state.confirm = None;
    if !confirmed {
        return None;
    }
    Some(match pending {
        Confirm::Quit => UserCommand::Quit,
        Confirm::ResetPool => UserCommand::ResetPool,
        Confirm::ResetTeams => UserCommand::ResetTeams,
    })
}

/// Printable characters extend the filter, Backspace trims it, Enter keeps
/// it, Esc clears it.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => view_state.filter_mode = false,
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            view_state.selected_player = 0;
        }
        _ => {}
    }
    view_state.clamp_selection();
}

fn assign_selected(view_state: &mut ViewState) -> Option<UserCommand> {
    let player = view_state.selected_player_name().map(str::to_string);
    let team = view_state.selected_team_name().map(str::to_string);
    match (player, team) {
        (Some(player), Some(team)) => Some(UserCommand::Assign { player, team }),
        (None, _) => {
            view_state.notice = Some(Notice::error("No player selected"));
            None
        }
        (_, None) => {
            view_state.notice = Some(Notice::error("No team selected"));
            None
        }
    }
}

fn move_player(view_state: &mut ViewState, delta: isize) {
    let len = view_state.filtered_players().len();
    if len == 0 {
        view_state.selected_player = 0;
        return;
    }
    let next = view_state.selected_player as isize + delta;
    view_state.selected_player = next.clamp(0, len as isize - 1) as usize;
}

/// Team selection wraps around.
fn move_team(view_state: &mut ViewState, delta: isize) {
    let len = view_state.teams.len() as isize;
    if len == 0 {
        return;
    }
    view_state.selected_team = (view_state.selected_team as isize + delta).rem_euclid(len) as usize;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
