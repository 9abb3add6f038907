//! Change tracker.
//!
//! Computes a point-in-time snapshot mapping each watched file to its
//! last-modification timestamp. There is no caching and no diffing here:
//! every poll recomputes the snapshot from scratch, and the comparison
//! against previously seen timestamps happens entirely in the browser.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Mapping from watched path to modification time in seconds since the
/// Unix epoch, with sub-second precision.
pub(crate) type Snapshot = BTreeMap<String, f64>;

/// Compute a fresh snapshot of the watched files.
///
/// Paths are resolved relative to `root_dir`. A file that is missing or
/// whose metadata cannot be read is omitted from the result; this is a
/// per-entry condition, never an error. An all-missing watch list yields
/// an empty map.
pub(crate) fn snapshot(root_dir: &Path, watch_files: &[String]) -> Snapshot {
    let mut times = Snapshot::new();
    for file in watch_files {
        let Ok(metadata) = std::fs::metadata(root_dir.join(file)) else {
            continue;
        };
        let Ok(modified) = metadata.modified() else {
            continue;
        };
        // Pre-epoch mtimes are treated like unreadable metadata
        let Ok(since_epoch) = modified.duration_since(UNIX_EPOCH) else {
            continue;
        };
        times.insert(file.clone(), since_epoch.as_secs_f64());
    }
    times
}
