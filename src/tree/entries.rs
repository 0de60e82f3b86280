//! Directory listing, filtering and ordering.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{TreeError, TreeResult};

use super::filter::EntryFilter;
use super::metadata::EntryMetadata;
use super::node::TreeSummary;

/// A directory entry with its metadata captured at listing time.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub name: OsString,
    pub metadata: EntryMetadata,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>, metadata: EntryMetadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }
}

/// Entries to display for one directory, plus what the directory contributes
/// to the totals.
#[derive(Debug, Clone)]
pub struct Listing {
    pub display: Vec<RawEntry>,
    /// Counted before the directories-only filter.
    pub counts: TreeSummary,
}

/// List a directory, capturing each entry's metadata without following symlinks.
///
/// Failing to open or iterate the directory is a `ReadError`. When an entry
/// cannot be stat'ed (the directory is readable but not searchable) it is kept
/// with the type reported by the listing and no permission bits. An entry
/// that vanishes between listing and stat is skipped.
pub fn read_entries(path: &Path) -> TreeResult<Vec<RawEntry>> {
    let read_error = |source| TreeError::ReadError {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let metadata = match entry.metadata() {
            Ok(meta) => EntryMetadata::from_fs(&meta),
            // no search permission on `path`: the type still comes with the listing
            Err(e) => match entry.file_type() {
                Ok(file_type) => {
                    debug!(path = %entry.path().display(), error = %e, "stat failed, using listed type");
                    EntryMetadata::without_stat(file_type)
                }
                Err(_) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping entry");
                    continue;
                }
            },
        };
        entries.push(RawEntry::new(entry.file_name(), metadata));
    }
    Ok(entries)
}

/// Filter and order a raw listing.
///
/// Excluded (hidden or ignored) entries are dropped before counting; the
/// directories-only filter is applied after counting, so it changes what is
/// shown but never the totals.
pub fn prepare_listing(
    raw: Vec<RawEntry>,
    filter: &EntryFilter,
    dirs_only: bool,
    sort_by_time: bool,
) -> Listing {
    let mut display: Vec<RawEntry> = raw
        .into_iter()
        .filter(|e| !filter.is_excluded(&e.name))
        .collect();

    let directories = display.iter().filter(|e| e.metadata.is_dir()).count();
    let counts = TreeSummary::new(directories, display.len() - directories);

    if dirs_only {
        display.retain(|e| e.metadata.is_dir());
    }
    sort_entries(&mut display, sort_by_time);

    Listing { display, counts }
}

/// Sort by name (byte order), or by modification time with the newest first.
/// Time ties fall back to name order; a missing time sorts as oldest.
pub fn sort_entries(entries: &mut [RawEntry], by_time: bool) {
    entries.sort_by(|a, b| compare_entries(a, b, by_time));
}

/// Ordering used by [`sort_entries`].
pub fn compare_entries(a: &RawEntry, b: &RawEntry, by_time: bool) -> Ordering {
    let by_name = a.name.cmp(&b.name);
    if by_time {
        b.metadata.modified.cmp(&a.metadata.modified).then(by_name)
    } else {
        by_name
    }
}
