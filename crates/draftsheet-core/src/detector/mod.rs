// Change detection for the backing workbook file.
//
// A detector exposes an edge-triggered "changed since last check" signal.
// `check` consumes the signal, so one external edit yields one reload.

mod poll;
mod watch;

pub use poll::PollDetector;
pub use watch::{Debouncer, WatchDetector};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{WatchConfig, WatchStrategy};

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("failed to watch {path}: {source}")]
    Watch {
        path: PathBuf,
        source: notify::Error,
    },

    #[error("invalid watch target {path}: {message}")]
    Target { path: PathBuf, message: String },
}

pub trait ChangeDetector: Send {
    /// Whether the file changed since the previous call. Clears the signal.
    fn check(&mut self) -> bool;

    /// Absorb a change made by this process so it is not reported back.
    fn acknowledge(&mut self);
}

/// Shared read-and-clear flag set by a watcher thread.
#[derive(Debug, Clone, Default)]
pub struct ChangeFlag(Arc<AtomicBool>);

impl ChangeFlag {
    pub fn new() -> Self {
        ChangeFlag::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Return the flag and reset it to false in one step.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Build the detector selected by `config` for `target`.
///
/// An event watcher that cannot be created falls back to polling.
pub fn from_config(target: &Path, config: &WatchConfig) -> Box<dyn ChangeDetector> {
    match config.strategy {
        WatchStrategy::Poll => {
            info!("Watching {} by polling", target.display());
            Box::new(PollDetector::new(target))
        }
        WatchStrategy::Event => {
            let window = Duration::from_millis(config.debounce_ms);
            match WatchDetector::new(target, window) {
                Ok(detector) => {
                    info!("Watching {} for filesystem events", target.display());
                    Box::new(detector)
                }
                Err(e) => {
                    warn!("File watcher unavailable ({}), falling back to polling", e);
                    Box::new(PollDetector::new(target))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_read_and_clear() {
        let flag = ChangeFlag::new();
        assert!(!flag.take());
        flag.raise();
        flag.raise();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn flag_clones_share_state() {
        let flag = ChangeFlag::new();
        let remote = flag.clone();
        remote.raise();
        assert!(flag.take());
    }

    #[test]
    fn poll_strategy_builds_a_quiet_detector() {
        let target = std::env::temp_dir().join("draftsheet_detector_factory.xlsx");
        std::fs::write(&target, b"x").unwrap();
        let config = WatchConfig {
            strategy: WatchStrategy::Poll,
            ..WatchConfig::default()
        };
        let mut detector = from_config(&target, &config);
        assert!(!detector.check());
        let _ = std::fs::remove_file(&target);
    }

    #[test]
    fn unwatchable_target_falls_back_to_polling() {
        // Parent directory does not exist, so the watcher cannot start.
        let target = std::env::temp_dir()
            .join("draftsheet_detector_no_such_dir")
            .join("draft.xlsx");
        let mut detector = from_config(&target, &WatchConfig::default());
        assert!(!detector.check());
    }
}
