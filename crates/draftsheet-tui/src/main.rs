// draftsheet entry point.
//
// Startup sequence:
// 1. Load config (copying defaults on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Open the workbook, or create it from the seed CSV
// 4. Build the roster store and change detector
// 5. Create mpsc channels
// 6. Spawn app loop task
// 7. Run the TUI until the user quits
// 8. Wait for the app loop to finish

use std::path::{Path, PathBuf};

use anyhow::Context;
use draftsheet_core::backend::XlsxBackend;
use draftsheet_core::config::{self, Config};
use draftsheet_core::detector;
use draftsheet_core::seed;
use draftsheet_core::store::RosterStore;
use draftsheet_tui::app;
use draftsheet_tui::tui;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.logging.filter)?;
    info!("draftsheet starting up");
    info!(
        "Config loaded: workbook={}, {} teams, watch={:?}",
        config.workbook.path,
        config.teams.names.len(),
        config.watch.strategy
    );

    // 3. Open or create the workbook
    let backend = open_workbook(&config)?;

    // 4. Roster store and change detector
    let store = RosterStore::open(backend).context("failed to open roster workbook")?;
    for team in &config.teams.names {
        if !store.list_teams().contains(team) {
            warn!("Configured team '{}' has no sheet in the workbook", team);
        }
    }
    let detector = detector::from_config(store.backend().path(), &config.watch);
    let app_state = app::AppState::new(config, store, detector);

    // 5. Channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 6. App loop
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 7. TUI (blocks until quit)
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 8. Cleanup
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("draftsheet shut down cleanly");
    Ok(())
}

/// Open the configured workbook, creating it from the seed CSV when missing.
fn open_workbook(config: &Config) -> anyhow::Result<XlsxBackend> {
    let path = PathBuf::from(&config.workbook.path);
    if path.exists() {
        info!("Opening workbook {}", path.display());
        return XlsxBackend::open(&path).context("failed to open workbook");
    }

    let seed_csv = config.workbook.seed_csv.as_deref().with_context(|| {
        format!(
            "workbook {} does not exist and no workbook.seed_csv is configured",
            path.display()
        )
    })?;
    let players = seed::load_seed_csv(Path::new(seed_csv)).context("failed to load seed CSV")?;
    let workbook = seed::initial_workbook(&players, &config.teams.names);
    info!(
        "Creating workbook {} with {} players and {} teams",
        path.display(),
        players.len(),
        config.teams.names.len()
    );
    XlsxBackend::create(&path, &workbook).context("failed to create workbook")
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftsheet.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
