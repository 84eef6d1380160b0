// Messages exchanged between the TUI and the app loop.
//
// The TUI sends `UserCommand`s; the app loop answers with `UiUpdate`s that
// carry full snapshots of the roster state.

use draftsheet_core::sheet::Player;
use serde::{Deserialize, Serialize};

/// Commands from the TUI to the app loop.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Move a pool player onto a team.
    Assign { player: String, team: String },
    /// Restore the pool from the seed sheet.
    ResetPool,
    /// Empty every team sheet.
    ResetTeams,
    /// Shuffle and persist the draft order.
    RandomizeOrder,
    /// Re-read the workbook from disk.
    Reload,
    Quit,
}

/// Updates from the app loop to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    StateSnapshot(Box<AppSnapshot>),
    Notice(Notice),
}

/// Everything the TUI needs to redraw the roster panels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSnapshot {
    /// Pool, sorted by name.
    pub available: Vec<Player>,
    /// Teams in display order.
    pub teams: Vec<TeamSnapshot>,
    pub draft_order: Option<Vec<String>>,
    /// Local time of the last load from disk, `HH:MM:SS`.
    pub synced_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub name: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A one-line message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftsheet_core::sheet::CellValue;

    #[test]
    fn snapshot_serializes_players_with_sheet_columns() {
        let snapshot = AppSnapshot {
            available: vec![],
            teams: vec![TeamSnapshot {
                name: "Team1".into(),
                players: vec![Player::new(
                    CellValue::Number(9.0),
                    CellValue::text("M"),
                    "Doe, Jane",
                )],
            }],
            draft_order: Some(vec!["Team1".into()]),
            synced_at: "12:00:00".into(),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["teams"][0]["players"][0]["Player"], "Doe, Jane");
        assert_eq!(json["teams"][0]["players"][0]["Grade"], 9.0);
        assert_eq!(json["draft_order"][0], "Team1");
    }

    #[test]
    fn notice_constructors_set_level() {
        assert_eq!(Notice::info("ok").level, NoticeLevel::Info);
        assert_eq!(Notice::error("bad").level, NoticeLevel::Error);
    }
}
