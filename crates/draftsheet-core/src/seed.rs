// Seed import: build a fresh workbook from a CSV player list.
//
// The CSV carries the same header as the pool sheet (`Grade,MW,Player`).
// Extra columns are ignored.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::sheet::{
    CellValue, Player, Table, Workbook, AVAILABLE_PLAYERS, CANONICAL_COLUMNS, ORIGINAL_PLAYERS,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Raw seed CSV row. Cells are read as strings and classified afterwards so
/// a grade column may mix numbers and text.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawSeedRow {
    #[serde(default)]
    Grade: String,
    #[serde(default)]
    MW: String,
    #[serde(default)]
    Player: String,
}

fn load_seed_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut seen = HashSet::new();
    let mut players = Vec::new();

    for result in reader.deserialize::<RawSeedRow>() {
        match result {
            Ok(raw) => {
                let name = raw.Player.trim();
                if name.is_empty() {
                    warn!("skipping seed row with blank player name");
                    continue;
                }
                if !seen.insert(name.to_string()) {
                    warn!("skipping duplicate seed row for '{}'", name);
                    continue;
                }
                players.push(Player::new(
                    CellValue::from_raw(&raw.Grade),
                    CellValue::from_raw(&raw.MW),
                    name,
                ));
            }
            Err(e) => {
                warn!("skipping malformed seed row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Load the seed player list from a CSV file.
pub fn load_seed_csv(path: &Path) -> Result<Vec<Player>, SeedError> {
    let file = std::fs::File::open(path).map_err(|e| SeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_seed_from_reader(file).map_err(|e| SeedError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Loaded {} seed players from {}", players.len(), path.display());
    Ok(players)
}

/// Lay out a new workbook: seed sheet, an identical pool sheet, then one
/// header-only sheet per team.
pub fn initial_workbook(players: &[Player], teams: &[String]) -> Workbook {
    let mut seed = Table::canonical();
    seed.rows = players
        .iter()
        .map(|p| seed.row_from_named(&p.named_cells()))
        .collect();

    let mut workbook = Workbook::new();
    workbook.set_sheet(ORIGINAL_PLAYERS, seed.clone());
    workbook.set_sheet(AVAILABLE_PLAYERS, seed);
    for team in teams {
        workbook.set_sheet(team, Table::with_columns(&CANONICAL_COLUMNS));
    }
    workbook
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
