use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use super::ChangeDetector;

/// Compares the file's modification time against the last recorded one.
#[derive(Debug)]
pub struct PollDetector {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl PollDetector {
    /// The baseline is recorded now, so an existing file does not count as
    /// a change on the first check.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_modified = modified_time(&path);
        PollDetector {
            path,
            last_modified,
        }
    }
}

impl ChangeDetector for PollDetector {
    fn check(&mut self) -> bool {
        let current = modified_time(&self.path);
        let changed = match (self.last_modified, current) {
            (Some(prev), Some(now)) => prev != now,
            (None, Some(_)) => true,
            // Deleted: forget the baseline so recreation is a change.
            (_, None) => false,
        };
        if changed {
            debug!("{} modified", self.path.display());
        }
        self.last_modified = current;
        changed
    }

    fn acknowledge(&mut self) {
        self.last_modified = modified_time(&self.path);
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("draftsheet_poll_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("draft.xlsx");
        fs::write(&path, b"v1").unwrap();
        path
    }

    fn bump_mtime(path: &Path, secs: u64) {
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + secs))
            .unwrap();
    }

    #[test]
    fn existing_file_is_quiet_on_first_check() {
        let path = scratch_file("first_check");
        let mut detector = PollDetector::new(&path);
        assert!(!detector.check());
        assert!(!detector.check());
    }

    #[test]
    fn fires_once_per_modification() {
        let path = scratch_file("fires_once");
        let mut detector = PollDetector::new(&path);

        bump_mtime(&path, 10);
        assert!(detector.check());
        assert!(!detector.check());

        bump_mtime(&path, 20);
        assert!(detector.check());
    }

    #[test]
    fn acknowledge_absorbs_own_write() {
        let path = scratch_file("acknowledge");
        let mut detector = PollDetector::new(&path);

        bump_mtime(&path, 30);
        detector.acknowledge();
        assert!(!detector.check());
    }

    #[test]
    fn recreation_after_delete_is_a_change() {
        let path = scratch_file("recreate");
        let mut detector = PollDetector::new(&path);

        fs::remove_file(&path).unwrap();
        assert!(!detector.check());

        fs::write(&path, b"v2").unwrap();
        assert!(detector.check());
        assert!(!detector.check());
    }

    #[test]
    fn missing_file_appearing_is_a_change() {
        let path = scratch_file("appears");
        fs::remove_file(&path).unwrap();
        let mut detector = PollDetector::new(&path);
        assert!(!detector.check());

        fs::write(&path, b"new").unwrap();
        assert!(detector.check());
    }
}
