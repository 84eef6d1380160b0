// Roster store: CRUD over the sheet-partitioned draft workbook.
//
// Reads are served from an in-memory snapshot of the workbook. Mutations go
// to the backend first and only touch the snapshot once the write has
// succeeded, so the snapshot always mirrors what was last persisted.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::backend::SheetBackend;
use crate::error::StoreError;
use crate::sheet::{
    is_reserved, CellValue, Location, Player, Table, Workbook, AVAILABLE_PLAYERS,
    CANONICAL_COLUMNS, DRAFT_ORDER, ORDER_COLUMN, ORIGINAL_PLAYERS, PLAYER_COLUMN,
};

pub struct RosterStore<B: SheetBackend> {
    backend: B,
    workbook: Workbook,
}

impl<B: SheetBackend> RosterStore<B> {
    /// Load the workbook from `backend` and check its required sheets.
    pub fn open(backend: B) -> Result<Self, StoreError> {
        let workbook = backend.load()?;
        validate(&workbook)?;
        info!(
            "Roster store opened: {} teams, {} players available",
            team_names(&workbook).len(),
            workbook.sheet(AVAILABLE_PLAYERS).map_or(0, |t| t.rows.len())
        );
        Ok(RosterStore { backend, workbook })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend, for out-of-band edits in tests and tools.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Discard the in-memory snapshot and reload the whole workbook.
    ///
    /// On failure the previous snapshot is kept.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let workbook = self.backend.load()?;
        validate(&workbook)?;
        self.workbook = workbook;
        info!("Roster store reloaded from backend");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The current pool, sorted by player name.
    pub fn list_available(&self) -> Vec<Player> {
        let mut players = self
            .workbook
            .sheet(AVAILABLE_PLAYERS)
            .map(Player::all_from)
            .unwrap_or_default();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        players
    }

    /// A team's roster in sheet order. A sheet without a header row is an
    /// empty roster; a header without a `Player` column is a schema error.
    pub fn list_team(&self, team: &str) -> Result<Vec<Player>, StoreError> {
        let table = self.team_table(team)?;
        if !table.has_header() {
            return Ok(Vec::new());
        }
        if table.column_index(PLAYER_COLUMN).is_none() {
            return Err(StoreError::missing_column(team, PLAYER_COLUMN));
        }
        Ok(Player::all_from(table))
    }

    /// Team sheet names in workbook order.
    pub fn list_teams(&self) -> Vec<String> {
        team_names(&self.workbook)
    }

    /// The persisted draft order, restricted to teams that still exist.
    pub fn draft_order(&self) -> Option<Vec<String>> {
        let table = self.workbook.sheet(DRAFT_ORDER)?;
        let teams = self.list_teams();
        let order: Vec<String> = (0..table.rows.len())
            .map(|i| table.cell(i, ORDER_COLUMN).to_string())
            .filter(|name| teams.contains(name))
            .collect();
        if order.is_empty() {
            None
        } else {
            Some(order)
        }
    }

    /// Teams in display order: the draft order when it is a full permutation
    /// of the current teams, otherwise workbook order.
    pub fn display_order(&self) -> Vec<String> {
        let teams = self.list_teams();
        match self.draft_order() {
            Some(order) if is_permutation(&order, &teams) => order,
            _ => teams,
        }
    }

    /// Where `player` currently lives, if anywhere.
    pub fn locate(&self, player: &str) -> Option<Location> {
        if self.list_available().iter().any(|p| p.name == player) {
            return Some(Location::Pool);
        }
        self.list_teams().into_iter().find_map(|team| {
            let on_team = self
                .list_team(&team)
                .map(|players| players.iter().any(|p| p.name == player))
                .unwrap_or(false);
            on_team.then_some(Location::Team(team))
        })
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Overwrite the pool with the full seed sheet.
    pub fn reset_pool(&mut self) -> Result<(), StoreError> {
        let seed = self
            .workbook
            .sheet(ORIGINAL_PLAYERS)
            .cloned()
            .ok_or_else(|| StoreError::missing_sheet(ORIGINAL_PLAYERS))?;

        self.backend.write_sheet(AVAILABLE_PLAYERS, &seed)?;
        info!("Pool reset: {} players restored", seed.rows.len());
        self.workbook.set_sheet(AVAILABLE_PLAYERS, seed);
        Ok(())
    }

    /// Empty every team sheet, keeping the canonical header row. The pool is
    /// not touched.
    pub fn reset_teams(&mut self) -> Result<(), StoreError> {
        let teams = self.list_teams();
        let empty = Table::canonical();
        let batch: Vec<(&str, &Table)> = teams.iter().map(|t| (t.as_str(), &empty)).collect();

        self.backend.write_sheets(&batch)?;
        for team in &teams {
            self.workbook.set_sheet(team, empty.clone());
        }
        info!("Team sheets reset: {} teams cleared", teams.len());
        Ok(())
    }

    /// Move `player` from the pool onto `team`.
    ///
    /// The team sheet is written first, then the pool. If the pool write
    /// fails the team sheet is restored; the failure is reported as
    /// `PartialUpdate` whether or not that restore succeeds.
    pub fn assign(&mut self, team: &str, player: &str) -> Result<Player, StoreError> {
        let old_team = self.team_table(team)?.clone();
        if let Some(column) = missing_canonical_column(&old_team) {
            return Err(StoreError::missing_column(team, column));
        }
        let pool = self
            .workbook
            .sheet(AVAILABLE_PLAYERS)
            .ok_or_else(|| StoreError::missing_sheet(AVAILABLE_PLAYERS))?;

        let row = (0..pool.rows.len())
            .find(|&i| Player::from_row(pool, i).is_some_and(|p| p.name == player))
            .ok_or_else(|| StoreError::player_not_found(player))?;
        let picked = Player::from_row(pool, row).ok_or_else(|| StoreError::player_not_found(player))?;

        // Lazily write the header on a team sheet's first assignment.
        let mut new_team = if old_team.has_header() {
            old_team.clone()
        } else {
            Table::canonical()
        };
        let new_row = new_team.row_from_named(&picked.named_cells());
        new_team.rows.push(new_row);

        let mut new_pool = pool.clone();
        let player_idx = new_pool.column_index(PLAYER_COLUMN);
        new_pool.rows.retain(|r| {
            let name = player_idx
                .and_then(|i| r.get(i))
                .map(CellValue::to_string)
                .unwrap_or_default();
            name.trim() != player
        });

        self.backend.write_sheet(team, &new_team)?;

        if let Err(pool_err) = self.backend.write_sheet(AVAILABLE_PLAYERS, &new_pool) {
            let rolled_back = match self.backend.write_sheet(team, &old_team) {
                Ok(()) => true,
                Err(rollback_err) => {
                    warn!(
                        "Rollback of team sheet '{}' failed after pool write error: {}",
                        team, rollback_err
                    );
                    // Mirror what is on disk: the team row landed, the pool did not change.
                    self.workbook.set_sheet(team, new_team);
                    false
                }
            };
            return Err(StoreError::PartialUpdate {
                team: team.to_string(),
                player: player.to_string(),
                rolled_back,
                source: Box::new(pool_err),
            });
        }

        self.workbook.set_sheet(team, new_team);
        self.workbook.set_sheet(AVAILABLE_PLAYERS, new_pool);
        info!("Assigned '{}' to {}", picked.name, team);
        Ok(picked)
    }

    /// Shuffle the teams with the thread-local RNG and persist the result
    /// as the draft order.
    pub fn randomize_order(&mut self) -> Result<Vec<String>, StoreError> {
        self.randomize_order_with(&mut rand::thread_rng())
    }

    /// Shuffle the teams with `rng` and persist the result as the draft
    /// order, replacing any previous order in a single write.
    pub fn randomize_order_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<String>, StoreError> {
        let mut order = self.list_teams();
        order.shuffle(rng);

        let mut table = Table::with_columns(&[ORDER_COLUMN]);
        table.rows = order.iter().map(|t| vec![CellValue::text(t.clone())]).collect();

        self.backend.write_sheet(DRAFT_ORDER, &table)?;
        self.workbook.set_sheet(DRAFT_ORDER, table);
        info!("Draft order randomized: {}", order.join(", "));
        Ok(order)
    }

    fn team_table(&self, team: &str) -> Result<&Table, StoreError> {
        if is_reserved(team) {
            return Err(StoreError::team_not_found(team));
        }
        self.workbook
            .sheet(team)
            .ok_or_else(|| StoreError::team_not_found(team))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn team_names(workbook: &Workbook) -> Vec<String> {
    workbook
        .sheet_names()
        .filter(|name| !is_reserved(name))
        .map(str::to_string)
        .collect()
}

/// The first canonical column absent from a team sheet that already has a
/// header row. A headerless sheet gets the canonical header on first write.
fn missing_canonical_column(table: &Table) -> Option<&'static str> {
    if !table.has_header() {
        return None;
    }
    CANONICAL_COLUMNS
        .into_iter()
        .find(|column| table.column_index(column).is_none())
}

fn is_permutation(order: &[String], teams: &[String]) -> bool {
    let mut a: Vec<&String> = order.iter().collect();
    let mut b: Vec<&String> = teams.iter().collect();
    a.sort();
    b.sort();
    a == b
}

/// The seed and pool sheets must exist, and each needs a `Player` column
/// once it has a header row.
fn validate(workbook: &Workbook) -> Result<(), StoreError> {
    for name in [ORIGINAL_PLAYERS, AVAILABLE_PLAYERS] {
        let table = workbook
            .sheet(name)
            .ok_or_else(|| StoreError::missing_sheet(name))?;
        if table.has_header() && table.column_index(PLAYER_COLUMN).is_none() {
            return Err(StoreError::missing_column(name, PLAYER_COLUMN));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::seed::initial_workbook;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // -----------------------------------------------------------------------
    // Test helpers
    // -----------------------------------------------------------------------

    fn jane() -> Player {
        Player::new(CellValue::Number(9.0), CellValue::text("M"), "Doe, Jane")
    }

    fn roster() -> Vec<Player> {
        vec![
            Player::new(CellValue::Number(11.0), CellValue::text("W"), "Smith, Ann"),
            jane(),
            Player::new(CellValue::Number(10.0), CellValue::text("M"), "Roe, Rick"),
        ]
    }

    fn teams(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Team{i}")).collect()
    }

    fn store_with(players: Vec<Player>, team_count: usize) -> RosterStore<MemoryBackend> {
        let wb = initial_workbook(&players, &teams(team_count));
        RosterStore::open(MemoryBackend::new(wb)).expect("open store")
    }

    /// Backend whose writes start failing after a fixed number of successes.
    struct FlakyBackend {
        inner: MemoryBackend,
        writes_allowed: usize,
        rollback_fails: bool,
    }

    impl SheetBackend for FlakyBackend {
        fn load(&self) -> Result<Workbook, StoreError> {
            self.inner.load()
        }

        fn write_sheet(&mut self, name: &str, table: &Table) -> Result<(), StoreError> {
            if self.writes_allowed == 0 {
                if self.rollback_fails || name == AVAILABLE_PLAYERS {
                    return Err(StoreError::Write {
                        path: "flaky.xlsx".into(),
                        message: format!("refused write to {name}"),
                    });
                }
            } else {
                self.writes_allowed -= 1;
            }
            self.inner.write_sheet(name, table)
        }
    }

    fn flaky_store(writes_allowed: usize, rollback_fails: bool) -> RosterStore<FlakyBackend> {
        let wb = initial_workbook(&roster(), &teams(2));
        RosterStore::open(FlakyBackend {
            inner: MemoryBackend::new(wb),
            writes_allowed,
            rollback_fails,
        })
        .unwrap()
    }

    // -----------------------------------------------------------------------
    // open / validate
    // -----------------------------------------------------------------------

    #[test]
    fn open_requires_reserved_sheets() {
        let mut wb = Workbook::new();
        wb.set_sheet(ORIGINAL_PLAYERS, Table::canonical());
        let err = RosterStore::open(MemoryBackend::new(wb)).err().unwrap();
        match err {
            StoreError::Schema { sheet, .. } => assert_eq!(sheet, AVAILABLE_PLAYERS),
            other => panic!("expected Schema error, got: {other}"),
        }
    }

    #[test]
    fn open_requires_player_column_in_pool() {
        let mut wb = initial_workbook(&[], &teams(1));
        wb.set_sheet(AVAILABLE_PLAYERS, Table::with_columns(&["Grade", "MW"]));
        let err = RosterStore::open(MemoryBackend::new(wb)).err().unwrap();
        assert!(matches!(err, StoreError::Schema { ref sheet, .. } if sheet == AVAILABLE_PLAYERS));
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    #[test]
    fn list_available_is_sorted_by_name() {
        let store = store_with(roster(), 2);
        let names: Vec<String> = store.list_available().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Doe, Jane", "Roe, Rick", "Smith, Ann"]);
    }

    #[test]
    fn list_teams_excludes_reserved_sheets() {
        let mut store = store_with(roster(), 3);
        store.randomize_order_with(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(store.list_teams(), teams(3));
    }

    #[test]
    fn list_team_unknown_is_not_found() {
        let store = store_with(roster(), 2);
        let err = store.list_team("Team9").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        let err = store.list_team(AVAILABLE_PLAYERS).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn list_team_without_header_is_empty() {
        let mut wb = initial_workbook(&roster(), &teams(1));
        wb.set_sheet("Team1", Table::default());
        let store = RosterStore::open(MemoryBackend::new(wb)).unwrap();
        assert!(store.list_team("Team1").unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // assign
    // -----------------------------------------------------------------------

    #[test]
    fn assign_moves_player_from_pool_to_team() {
        let mut store = store_with(vec![jane()], 2);

        let moved = store.assign("Team1", "Doe, Jane").unwrap();
        assert_eq!(moved, jane());
        assert_eq!(store.list_team("Team1").unwrap(), vec![jane()]);
        assert!(store.list_available().is_empty());
        assert!(store.list_team("Team2").unwrap().is_empty());

        // Persisted, not just cached
        let persisted = store.backend().workbook();
        assert_eq!(Player::all_from(persisted.sheet("Team1").unwrap()), vec![jane()]);
        assert!(Player::all_from(persisted.sheet(AVAILABLE_PLAYERS).unwrap()).is_empty());
    }

    #[test]
    fn assign_writes_header_lazily() {
        let mut wb = initial_workbook(&[jane()], &teams(1));
        wb.set_sheet("Team1", Table::default());
        let mut store = RosterStore::open(MemoryBackend::new(wb)).unwrap();

        store.assign("Team1", "Doe, Jane").unwrap();
        let sheet = store.backend().workbook().sheet("Team1").unwrap().clone();
        assert_eq!(sheet.columns, CANONICAL_COLUMNS.map(String::from).to_vec());
        assert_eq!(sheet.rows.len(), 1);
    }

    #[test]
    fn assign_to_sheet_missing_canonical_columns_changes_nothing() {
        let mut wb = initial_workbook(&roster(), &teams(2));
        wb.set_sheet("Team1", Table::with_columns(&["Notes"]));
        wb.set_sheet("Team2", Table::with_columns(&["Grade", "Player"]));
        let mut store = RosterStore::open(MemoryBackend::new(wb)).unwrap();
        let before = store.backend().workbook().clone();

        let err = store.assign("Team1", "Doe, Jane").unwrap_err();
        assert!(matches!(err, StoreError::Schema { ref sheet, .. } if sheet == "Team1"));
        let err = store.assign("Team2", "Doe, Jane").unwrap_err();
        assert!(err.to_string().contains("MW"));

        assert_eq!(store.backend().workbook(), &before);
        assert_eq!(store.locate("Doe, Jane"), Some(Location::Pool));
        assert_eq!(store.list_available().len(), 3);
    }

    #[test]
    fn list_team_without_player_column_is_schema_error() {
        let mut wb = initial_workbook(&roster(), &teams(1));
        wb.set_sheet("Team1", Table::with_columns(&["Notes"]));
        let store = RosterStore::open(MemoryBackend::new(wb)).unwrap();
        let err = store.list_team("Team1").unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
    }

    #[test]
    fn assign_appends_in_order() {
        let mut store = store_with(roster(), 1);
        store.assign("Team1", "Roe, Rick").unwrap();
        store.assign("Team1", "Doe, Jane").unwrap();
        let names: Vec<String> = store
            .list_team("Team1")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Roe, Rick", "Doe, Jane"]);
    }

    #[test]
    fn assign_missing_player_leaves_store_unchanged() {
        let mut store = store_with(roster(), 2);
        let before = store.backend().workbook().clone();

        let err = store.assign("Team1", "Nobody").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.backend().workbook(), &before);
        assert_eq!(store.list_available().len(), 3);
    }

    #[test]
    fn assign_twice_fails_second_time() {
        let mut store = store_with(roster(), 2);
        store.assign("Team1", "Doe, Jane").unwrap();
        let err = store.assign("Team2", "Doe, Jane").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.locate("Doe, Jane"), Some(Location::Team("Team1".into())));
    }

    #[test]
    fn assign_to_unknown_team_is_not_found() {
        let mut store = store_with(roster(), 2);
        let err = store.assign("Team7", "Doe, Jane").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.locate("Doe, Jane"), Some(Location::Pool));
    }

    #[test]
    fn pool_write_failure_rolls_back_team_sheet() {
        // One write allowed: the team sheet lands, the pool write fails.
        let mut store = flaky_store(1, false);

        let err = store.assign("Team1", "Doe, Jane").unwrap_err();
        match err {
            StoreError::PartialUpdate { rolled_back, .. } => assert!(rolled_back),
            other => panic!("expected PartialUpdate, got: {other}"),
        }
        let persisted = store.backend().inner.workbook().clone();
        assert!(Player::all_from(persisted.sheet("Team1").unwrap()).is_empty());
        assert!(store.list_team("Team1").unwrap().is_empty());
        assert_eq!(store.locate("Doe, Jane"), Some(Location::Pool));
    }

    #[test]
    fn failed_rollback_reports_inconsistency() {
        let mut store = flaky_store(1, true);

        let err = store.assign("Team1", "Doe, Jane").unwrap_err();
        match err {
            StoreError::PartialUpdate {
                rolled_back, team, ..
            } => {
                assert!(!rolled_back);
                assert_eq!(team, "Team1");
            }
            other => panic!("expected PartialUpdate, got: {other}"),
        }
        // Snapshot mirrors disk: the team row landed, the pool still has her.
        assert_eq!(store.list_team("Team1").unwrap(), vec![jane()]);
        assert!(store.list_available().iter().any(|p| p.name == "Doe, Jane"));
    }

    #[test]
    fn team_write_failure_changes_nothing() {
        let mut store = flaky_store(0, true);
        let err = store.assign("Team1", "Doe, Jane").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(store.list_team("Team1").unwrap().is_empty());
        assert_eq!(store.list_available().len(), 3);
    }

    // -----------------------------------------------------------------------
    // resets
    // -----------------------------------------------------------------------

    #[test]
    fn reset_pool_restores_seed_after_assignments() {
        let mut store = store_with(roster(), 2);
        let seed = store.list_available();
        store.assign("Team1", "Doe, Jane").unwrap();
        store.assign("Team2", "Smith, Ann").unwrap();

        store.reset_pool().unwrap();
        assert_eq!(store.list_available(), seed);

        // Idempotent
        store.reset_pool().unwrap();
        assert_eq!(store.list_available(), seed);
    }

    #[test]
    fn reset_teams_keeps_header_and_pool() {
        let mut store = store_with(roster(), 2);
        store.assign("Team1", "Doe, Jane").unwrap();
        let pool_before = store.list_available();

        store.reset_teams().unwrap();
        for team in store.list_teams() {
            assert!(store.list_team(&team).unwrap().is_empty());
            assert_eq!(store.backend().workbook().sheet(&team), Some(&Table::canonical()));
        }
        assert_eq!(store.list_available(), pool_before);
    }

    // -----------------------------------------------------------------------
    // draft order
    // -----------------------------------------------------------------------

    #[test]
    fn randomize_order_persists_a_permutation() {
        let mut store = store_with(roster(), 4);
        let order = store
            .randomize_order_with(&mut StdRng::seed_from_u64(7))
            .unwrap();

        assert!(is_permutation(&order, &teams(4)));
        assert_eq!(store.draft_order(), Some(order.clone()));
        assert_eq!(store.display_order(), order);

        let persisted = store.backend().workbook().sheet(DRAFT_ORDER).unwrap().clone();
        assert_eq!(persisted.columns, vec!["Order".to_string()]);
        assert_eq!(persisted.rows.len(), 4);
    }

    #[test]
    fn randomize_order_overwrites_previous_order() {
        let mut store = store_with(roster(), 3);
        store.randomize_order_with(&mut StdRng::seed_from_u64(1)).unwrap();
        let second = store.randomize_order_with(&mut StdRng::seed_from_u64(2)).unwrap();
        let sheet = store.backend().workbook().sheet(DRAFT_ORDER).unwrap().clone();
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(store.draft_order(), Some(second));
    }

    #[test]
    fn stale_draft_order_falls_back_to_workbook_order() {
        let mut wb = initial_workbook(&roster(), &teams(2));
        let mut order = Table::with_columns(&["Order"]);
        order.rows = vec![vec![CellValue::text("Team2")], vec![CellValue::text("Gone")]];
        wb.set_sheet(DRAFT_ORDER, order);
        let store = RosterStore::open(MemoryBackend::new(wb)).unwrap();

        assert_eq!(store.draft_order(), Some(vec!["Team2".to_string()]));
        assert_eq!(store.display_order(), teams(2));
    }

    #[test]
    fn no_draft_order_sheet() {
        let store = store_with(roster(), 2);
        assert_eq!(store.draft_order(), None);
        assert_eq!(store.display_order(), teams(2));
    }

    // -----------------------------------------------------------------------
    // reload
    // -----------------------------------------------------------------------

    #[test]
    fn reload_picks_up_external_edits() {
        let mut store = store_with(roster(), 2);
        let mut pool = Table::canonical();
        pool.rows.push(pool.row_from_named(&jane().named_cells()));
        store.backend_mut().edit_sheet(AVAILABLE_PLAYERS, pool);

        // Snapshot is stale until reload
        assert_eq!(store.list_available().len(), 3);
        store.reload().unwrap();
        assert_eq!(store.list_available(), vec![jane()]);
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let mut store = store_with(roster(), 2);
        store
            .backend_mut()
            .edit_sheet(AVAILABLE_PLAYERS, Table::with_columns(&["Grade"]));
        assert!(store.reload().is_err());
        assert_eq!(store.list_available().len(), 3);
    }
}
