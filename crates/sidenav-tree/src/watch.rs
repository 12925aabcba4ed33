//! Change notification for the content directory.
//!
//! The watcher reports that the tree *may* have changed; callers rebuild the
//! whole sidebar with [`build`](crate::build). Only events that can alter the
//! sidebar are considered: creations, removals and renames. Content edits do
//! not change labels or slugs and are ignored.

use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use notify::event::ModifyKind;
use notify::{EventKind, RecursiveMode, Watcher};

use crate::debouncer::ChangeDebouncer;
use crate::error::WatchError;

/// Poll interval of the drain thread.
const DRAIN_INTERVAL: Duration = Duration::from_millis(50);

/// A debounced batch of changed paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Absolute paths touched during the burst, sorted and deduplicated.
    pub paths: Vec<PathBuf>,
}

/// Receiver for [`Change`] notifications.
pub struct ChangeReceiver {
    rx: mpsc::Receiver<Change>,
}

impl ChangeReceiver {
    /// Wait for the next change (blocking).
    ///
    /// Returns `None` once the watcher has stopped.
    #[must_use]
    pub fn recv(&self) -> Option<Change> {
        self.rx.recv().ok()
    }

    /// Wait for the next change for at most `timeout`.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Change> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Blocking iterator over changes.
    pub fn iter(&self) -> impl Iterator<Item = Change> + '_ {
        self.rx.iter()
    }
}

/// Keeps the watcher alive; dropping it stops watching.
pub struct WatchHandle {
    _shutdown: Option<mpsc::Sender<()>>,
}

impl WatchHandle {
    /// Stop watching immediately.
    pub fn stop(mut self) {
        self._shutdown.take();
    }
}

/// Watch `root` recursively and emit one [`Change`] per burst of events.
///
/// # Errors
///
/// Returns [`WatchError::NotADirectory`] if `root` is not a directory and
/// [`WatchError::Notify`] if the platform watcher cannot be started.
pub fn watch(root: &Path, debounce: Duration) -> Result<(ChangeReceiver, WatchHandle), WatchError> {
    if !root.is_dir() {
        return Err(WatchError::NotADirectory(root.to_path_buf()));
    }

    let (change_tx, change_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
    let debouncer = Arc::new(ChangeDebouncer::new(debounce));

    let watcher_debouncer = Arc::clone(&debouncer);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let Ok(event) = res else { return };
        if !affects_sidebar(event.kind) {
            return;
        }
        for path in event.paths {
            watcher_debouncer.record(path);
        }
    })?;
    watcher.watch(root, RecursiveMode::Recursive)?;
    tracing::debug!(root = %root.display(), "Watching content directory");

    // The watcher moves into the drain thread to stay alive.
    std::thread::spawn(move || {
        let _watcher = watcher;
        loop {
            match shutdown_rx.recv_timeout(DRAIN_INTERVAL) {
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
            if let Some(paths) = debouncer.drain_ready()
                && change_tx.send(Change { paths }).is_err()
            {
                return;
            }
        }
    });

    Ok((
        ChangeReceiver { rx: change_rx },
        WatchHandle {
            _shutdown: Some(shutdown_tx),
        },
    ))
}

/// Whether an event kind can change labels, slugs or ordering.
fn affects_sidebar(kind: EventKind) -> bool {
    match kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(modify) => matches!(modify, ModifyKind::Name(_) | ModifyKind::Any),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, RemoveKind, RenameMode};
    use std::fs;

    #[test]
    fn test_affects_sidebar() {
        assert!(affects_sidebar(EventKind::Create(CreateKind::File)));
        assert!(affects_sidebar(EventKind::Remove(RemoveKind::Folder)));
        assert!(affects_sidebar(EventKind::Modify(ModifyKind::Name(
            RenameMode::Both
        ))));
        assert!(!affects_sidebar(EventKind::Modify(ModifyKind::Data(
            DataChange::Content
        ))));
        assert!(!affects_sidebar(EventKind::Access(AccessKind::Any)));
    }

    #[test]
    fn test_watch_rejects_missing_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = watch(&temp_dir.path().join("missing"), Duration::from_millis(10));
        assert!(matches!(result, Err(WatchError::NotADirectory(_))));
    }

    #[test]
    fn test_watch_reports_new_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (rx, handle) = watch(temp_dir.path(), Duration::from_millis(20)).unwrap();

        // Give the platform watcher a moment to register
        std::thread::sleep(Duration::from_millis(100));
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();

        let change = rx.recv_timeout(Duration::from_secs(5));
        assert!(change.is_some(), "expected a change notification");
        handle.stop();
    }

    #[test]
    fn test_stop_ends_receiver() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (rx, handle) = watch(temp_dir.path(), Duration::from_millis(10)).unwrap();

        handle.stop();

        assert!(rx.recv().is_none());
    }
}
