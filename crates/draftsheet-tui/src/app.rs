// Application state and orchestration logic.
//
// The app loop owns the roster store and the change detector. It applies
// user commands from the TUI, watches the workbook for external edits, and
// pushes state snapshots back to the TUI render loop.

use std::time::Duration;

use chrono::{DateTime, Local};
use draftsheet_core::backend::SheetBackend;
use draftsheet_core::config::Config;
use draftsheet_core::detector::ChangeDetector;
use draftsheet_core::error::StoreError;
use draftsheet_core::store::RosterStore;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::protocol::{AppSnapshot, Notice, TeamSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Everything the app loop needs, handed explicitly to every handler.
pub struct AppState<B: SheetBackend> {
    pub config: Config,
    pub store: RosterStore<B>,
    pub detector: Box<dyn ChangeDetector>,
    /// When the store last matched the file on disk.
    pub last_synced: DateTime<Local>,
}

impl<B: SheetBackend> AppState<B> {
    pub fn new(config: Config, store: RosterStore<B>, detector: Box<dyn ChangeDetector>) -> Self {
        AppState {
            config,
            store,
            detector,
            last_synced: Local::now(),
        }
    }

    /// Build a snapshot of the roster for the TUI.
    pub fn build_snapshot(&self) -> AppSnapshot {
        let teams = self
            .store
            .display_order()
            .into_iter()
            .map(|name| TeamSnapshot {
                players: self.store.list_team(&name).unwrap_or_default(),
                name,
            })
            .collect();

        AppSnapshot {
            available: self.store.list_available(),
            teams,
            draft_order: self.store.draft_order(),
            synced_at: self.last_synced.format("%H:%M:%S").to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the application event loop.
///
/// Listens for user commands and, every `watch.poll_interval_ms`, checks the
/// change detector. Exits on `Quit` or when the command channel closes.
pub async fn run<B: SheetBackend>(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState<B>,
) -> anyhow::Result<()> {
    info!("Application event loop started");
    send_snapshot(&mut state, &ui_tx).await;

    let mut detector_tick =
        tokio::time::interval(Duration::from_millis(state.config.watch.poll_interval_ms));
    detector_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first tick completes immediately.
    detector_tick.tick().await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            _ = detector_tick.tick() => {
                check_for_changes(&mut state, &ui_tx).await;
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

/// Reload the store if the workbook changed on disk.
pub async fn check_for_changes<B: SheetBackend>(
    state: &mut AppState<B>,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    if state.detector.check() {
        reload_external_change(state, ui_tx).await;
    }
}

/// Reload after the detector reported an external edit. Returns whether the
/// store now matches the file.
async fn reload_external_change<B: SheetBackend>(
    state: &mut AppState<B>,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> bool {
    info!("Workbook changed on disk, reloading");

    match state.store.reload() {
        Ok(()) => {
            state.last_synced = Local::now();
            send_snapshot(state, ui_tx).await;
            let _ = ui_tx
                .send(UiUpdate::Notice(Notice::info("Workbook changed on disk, reloaded")))
                .await;
            true
        }
        Err(e) => {
            warn!("Reload after external change failed: {}", e);
            let _ = ui_tx
                .send(UiUpdate::Notice(Notice::error(format!("Reload failed: {e}"))))
                .await;
            false
        }
    }
}

/// Apply a user command from the TUI.
///
/// Failures become error notices; they never stop the loop. A pending
/// external edit is reloaded first so no write is built from a stale
/// snapshot; if that reload fails the command is not applied.
pub async fn handle_user_command<B: SheetBackend>(
    state: &mut AppState<B>,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    if cmd == UserCommand::Quit {
        return;
    }
    if state.detector.check() && !reload_external_change(state, ui_tx).await {
        let _ = ui_tx
            .send(UiUpdate::Notice(Notice::error(
                "Command skipped: workbook changed on disk and could not be reloaded",
            )))
            .await;
        return;
    }

    let result: Result<String, StoreError> = match cmd {
        UserCommand::Assign { player, team } => state
            .store
            .assign(&team, &player)
            .map(|p| format!("{} drafted by {}", p.name, team)),
        UserCommand::ResetPool => state
            .store
            .reset_pool()
            .map(|()| "Pool restored from original_players".to_string()),
        UserCommand::ResetTeams => state
            .store
            .reset_teams()
            .map(|()| "All team sheets cleared".to_string()),
        UserCommand::RandomizeOrder => state
            .store
            .randomize_order()
            .map(|order| format!("Draft order: {}", order.join(", "))),
        UserCommand::Reload => state
            .store
            .reload()
            .map(|()| "Workbook reloaded".to_string()),
        UserCommand::Quit => return,
    };

    match result {
        Ok(message) => {
            // Our own write (or a fresh read) must not come back as a change.
            state.detector.acknowledge();
            state.last_synced = Local::now();
            send_snapshot(state, ui_tx).await;
            let _ = ui_tx.send(UiUpdate::Notice(Notice::info(message))).await;
        }
        Err(e) => {
            if e.is_validation() {
                info!("Command rejected: {}", e);
            } else {
                warn!("Command failed: {}", e);
                state.detector.acknowledge();
                send_snapshot(state, ui_tx).await;
            }
            let _ = ui_tx.send(UiUpdate::Notice(Notice::error(e.to_string()))).await;
        }
    }
}

/// Takes `&mut` so the returned future stays `Send`.
async fn send_snapshot<B: SheetBackend>(state: &mut AppState<B>, ui_tx: &mpsc::Sender<UiUpdate>) {
    let update = UiUpdate::StateSnapshot(Box::new(state.build_snapshot()));
    let _ = ui_tx.send(update).await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
