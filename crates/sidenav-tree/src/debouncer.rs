//! Coalescing of filesystem events into rebuild triggers.
//!
//! Editors and `git checkout` emit bursts of events. The sidebar only needs
//! one rebuild per burst, so events are collected until no new event has
//! arrived for the debounce duration.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Default)]
struct Pending {
    paths: BTreeSet<PathBuf>,
    deadline: Option<Instant>,
}

/// Thread-safe change debouncer.
pub(crate) struct ChangeDebouncer {
    pending: Mutex<Pending>,
    debounce_duration: Duration,
}

impl ChangeDebouncer {
    pub fn new(debounce_duration: Duration) -> Self {
        Self {
            pending: Mutex::new(Pending::default()),
            debounce_duration,
        }
    }

    /// Record a changed path and push the deadline out.
    ///
    /// Called from watcher callbacks.
    pub fn record(&self, path: PathBuf) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.paths.insert(path);
        pending.deadline = Some(Instant::now() + self.debounce_duration);
    }

    /// Take the accumulated paths once the deadline has passed.
    ///
    /// Returns `None` while the burst is still active or nothing is pending.
    pub fn drain_ready(&self) -> Option<Vec<PathBuf>> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        let deadline = pending.deadline?;
        if deadline > Instant::now() {
            return None;
        }
        let taken = std::mem::take(&mut *pending);
        Some(taken.paths.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_nothing_pending() {
        let debouncer = ChangeDebouncer::new(Duration::from_millis(10));
        assert!(debouncer.drain_ready().is_none());
    }

    #[test]
    fn test_single_change_emitted_after_deadline() {
        let debouncer = ChangeDebouncer::new(Duration::from_millis(10));
        debouncer.record(PathBuf::from("/docs/guide.md"));

        // Before deadline
        assert!(debouncer.drain_ready().is_none());

        thread::sleep(Duration::from_millis(15));

        assert_eq!(
            debouncer.drain_ready(),
            Some(vec![PathBuf::from("/docs/guide.md")])
        );
        // Should be empty after drain
        assert!(debouncer.drain_ready().is_none());
    }

    #[test]
    fn test_burst_coalesces_and_deduplicates() {
        let debouncer = ChangeDebouncer::new(Duration::from_millis(10));
        debouncer.record(PathBuf::from("/docs/b.md"));
        debouncer.record(PathBuf::from("/docs/a.md"));
        debouncer.record(PathBuf::from("/docs/b.md"));

        thread::sleep(Duration::from_millis(15));

        assert_eq!(
            debouncer.drain_ready(),
            Some(vec![PathBuf::from("/docs/a.md"), PathBuf::from("/docs/b.md")])
        );
    }

    #[test]
    fn test_new_event_extends_deadline() {
        let debouncer = ChangeDebouncer::new(Duration::from_millis(200));
        debouncer.record(PathBuf::from("/docs/a.md"));
        thread::sleep(Duration::from_millis(100));
        debouncer.record(PathBuf::from("/docs/b.md"));
        thread::sleep(Duration::from_millis(120));

        // Past the first deadline but not the second
        assert!(debouncer.drain_ready().is_none());

        thread::sleep(Duration::from_millis(150));
        assert_eq!(debouncer.drain_ready().map(|paths| paths.len()), Some(2));
    }
}
