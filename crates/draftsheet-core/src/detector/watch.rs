use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::{ChangeDetector, ChangeFlag, DetectorError};

/// Drops events that arrive within `window` of the last accepted one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            last_accepted: None,
        }
    }

    /// Whether an event at `now` passes. Accepted events restart the window.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(prev) if now.saturating_duration_since(prev) < self.window => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }

    /// Restart the window at `now` without accepting anything.
    pub fn reset(&mut self, now: Instant) {
        self.last_accepted = Some(now);
    }
}

/// Filesystem-notification detector.
///
/// Watches the target's parent directory so rename-over saves are seen.
/// The notify callback only updates the debouncer and raises the flag.
pub struct WatchDetector {
    path: PathBuf,
    flag: ChangeFlag,
    debouncer: Arc<Mutex<Debouncer>>,
    _watcher: RecommendedWatcher,
}

impl WatchDetector {
    pub fn new(target: &Path, window: Duration) -> Result<Self, DetectorError> {
        let file_name = target
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| DetectorError::Target {
                path: target.to_path_buf(),
                message: "path has no file name".into(),
            })?;
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let flag = ChangeFlag::new();
        let debouncer = Arc::new(Mutex::new(Debouncer::new(window)));

        let handler = {
            let flag = flag.clone();
            let debouncer = Arc::clone(&debouncer);
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !is_target_event(&event, &file_name) {
                        return;
                    }
                    let accepted = debouncer
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .accept(Instant::now());
                    if accepted {
                        flag.raise();
                    } else {
                        debug!("Debounced {:?} event", event.kind);
                    }
                }
                Err(e) => warn!("Watch error: {}", e),
            }
        };

        let watch_err = |source| DetectorError::Watch {
            path: target.to_path_buf(),
            source,
        };
        let mut watcher = notify::recommended_watcher(handler).map_err(watch_err)?;
        watcher
            .watch(&parent, RecursiveMode::NonRecursive)
            .map_err(watch_err)?;

        Ok(WatchDetector {
            path: target.to_path_buf(),
            flag,
            debouncer,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangeDetector for WatchDetector {
    fn check(&mut self) -> bool {
        self.flag.take()
    }

    fn acknowledge(&mut self) {
        self.flag.take();
        self.debouncer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .reset(Instant::now());
    }
}

/// Modify or create events naming the target file. Events for siblings in
/// the same directory (including our own temp file) are ignored.
fn is_target_event(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}
