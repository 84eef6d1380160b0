// In-memory workbook model: cells, tables, sheets, and the player row view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable seed sheet; only read, never written except on creation.
pub const ORIGINAL_PLAYERS: &str = "original_players";
/// The current pool of unassigned players.
pub const AVAILABLE_PLAYERS: &str = "available_players";
/// Optional permutation of team names used for display ordering.
pub const DRAFT_ORDER: &str = "draft_order";

/// Sheet names that are never treated as teams.
pub const RESERVED_SHEETS: &[&str] = &[ORIGINAL_PLAYERS, AVAILABLE_PLAYERS, DRAFT_ORDER];

pub const GRADE_COLUMN: &str = "Grade";
pub const MW_COLUMN: &str = "MW";
pub const PLAYER_COLUMN: &str = "Player";
pub const ORDER_COLUMN: &str = "Order";

/// Header row written to team sheets.
pub const CANONICAL_COLUMNS: [&str; 3] = [GRADE_COLUMN, MW_COLUMN, PLAYER_COLUMN];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_SHEETS.contains(&name)
}

// ---------------------------------------------------------------------------
// CellValue
// ---------------------------------------------------------------------------

/// A single cell. Serializes untagged so a player row reads as
/// `{"Grade": 9, "MW": "M", "Player": "Doe, Jane"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Interpret a raw cell string: blank is `Empty`, anything that parses as
    /// a finite number is `Number`, everything else is `Text`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            // Whole numbers print without a trailing ".0" (grade 9, not 9.0).
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// One sheet's contents: a header row plus data rows.
///
/// A table with no columns has no header row yet. Data rows may be shorter
/// than the header; missing trailing cells read as `Empty`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn with_columns(columns: &[&str]) -> Self {
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// An empty table carrying the team-sheet header.
    pub fn canonical() -> Self {
        Table::with_columns(&CANONICAL_COLUMNS)
    }

    pub fn has_header(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in the named column, `Empty` when the column or cell is
    /// absent.
    pub fn cell(&self, row: usize, column: &str) -> CellValue {
        self.column_index(column)
            .and_then(|idx| self.rows.get(row).and_then(|r| r.get(idx)))
            .cloned()
            .unwrap_or_default()
    }

    /// Build a row shaped for this table's header from named values. Columns
    /// not covered by `values` are left `Empty`.
    pub fn row_from_named(&self, values: &[(&str, CellValue)]) -> Vec<CellValue> {
        self.columns
            .iter()
            .map(|col| {
                values
                    .iter()
                    .find(|(name, _)| name == col)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default()
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Workbook
// ---------------------------------------------------------------------------

/// Ordered sheet-name -> table mapping. Order matches the file's tab order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<(String, Table)>,
}

impl Workbook {
    pub fn new() -> Self {
        Workbook::default()
    }

    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheet(name).is_some()
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|(n, _)| n.as_str())
    }

    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.sheets.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Replace the named sheet in place, or append it when absent.
    pub fn set_sheet(&mut self, name: &str, table: Table) {
        match self.sheets.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = table,
            None => self.sheets.push((name.to_string(), table)),
        }
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// The row view of a player in the pool or on a team sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "Grade")]
    pub grade: CellValue,
    #[serde(rename = "MW")]
    pub mw: CellValue,
    #[serde(rename = "Player")]
    pub name: String,
}

impl Player {
    pub fn new(grade: CellValue, mw: CellValue, name: impl Into<String>) -> Self {
        Player {
            grade,
            mw,
            name: name.into(),
        }
    }

    /// Read row `row` of `table` by column name. Returns `None` for rows
    /// without a player name.
    pub fn from_row(table: &Table, row: usize) -> Option<Self> {
        let name = table.cell(row, PLAYER_COLUMN).to_string();
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Player {
            grade: table.cell(row, GRADE_COLUMN),
            mw: table.cell(row, MW_COLUMN),
            name: name.to_string(),
        })
    }

    /// All named players in `table`, in row order.
    pub fn all_from(table: &Table) -> Vec<Self> {
        (0..table.rows.len())
            .filter_map(|i| Player::from_row(table, i))
            .collect()
    }

    /// Named cell values, for shaping into any header order.
    pub fn named_cells(&self) -> [(&'static str, CellValue); 3] {
        [
            (GRADE_COLUMN, self.grade.clone()),
            (MW_COLUMN, self.mw.clone()),
            (PLAYER_COLUMN, CellValue::text(self.name.clone())),
        ]
    }
}

/// Where a player currently lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Pool,
    Team(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
