// Error taxonomy for roster store and backend operations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What kind of entity a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Player,
    Team,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Player => write!(f, "player"),
            Entity::Team => write!(f, "team"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced player or team is absent.
    #[error("{kind} not found: {name}")]
    NotFound { kind: Entity, name: String },

    /// A multi-step mutation was only partly applied. `rolled_back` reports
    /// whether the compensating write restored the earlier steps.
    #[error(
        "assignment of `{player}` to `{team}` was partially applied ({}): {source}",
        rollback_note(.rolled_back)
    )]
    PartialUpdate {
        team: String,
        player: String,
        rolled_back: bool,
        source: Box<StoreError>,
    },

    /// An expected sheet or column is missing.
    #[error("schema error in sheet `{sheet}`: {message}")]
    Schema { sheet: String, message: String },

    #[error("failed to read workbook {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to write workbook {path}: {message}")]
    Write { path: PathBuf, message: String },
}

fn rollback_note(rolled_back: &bool) -> &'static str {
    if *rolled_back {
        "team sheet restored"
    } else {
        "rollback failed, workbook is inconsistent"
    }
}

impl StoreError {
    pub fn player_not_found(name: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind: Entity::Player,
            name: name.into(),
        }
    }

    pub fn team_not_found(name: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind: Entity::Team,
            name: name.into(),
        }
    }

    pub fn missing_sheet(sheet: &str) -> Self {
        StoreError::Schema {
            sheet: sheet.to_string(),
            message: "sheet is missing".into(),
        }
    }

    pub fn missing_column(sheet: &str, column: &str) -> Self {
        StoreError::Schema {
            sheet: sheet.to_string(),
            message: format!("column `{column}` is missing"),
        }
    }

    /// Whether this is a validation failure the operator can correct, as
    /// opposed to a persistence failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::Schema { .. })
    }
}
