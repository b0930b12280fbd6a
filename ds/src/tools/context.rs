//! ToolContext - per-session state the tools gate on

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::builtin::{DirectoryListing, EntryKind};

/// Execution context for tools - owned by a single session
///
/// Tracks every path the session has confirmed through a listing or a write
/// (the discovery sets) and whether writes are permitted. Reads are only
/// allowed on paths in the discovered-files set.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    /// Files seen as "file" entries in a listing, or written this session
    discovered_files: HashSet<PathBuf>,

    /// Directories listed, or seen as "directory" entries
    discovered_dirs: HashSet<PathBuf>,

    /// Whether write_file may touch the filesystem
    allow_writes: bool,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(allow_writes: bool) -> Self {
        debug!(%allow_writes, "ToolContext::new: called");
        Self {
            allow_writes,
            ..Self::default()
        }
    }

    pub fn allow_writes(&self) -> bool {
        self.allow_writes
    }

    /// Record a listing: the directory itself plus each child by kind
    pub fn record_listing(&mut self, listing: &DirectoryListing) {
        debug!(path = ?listing.current_path, items = listing.items.len(), "ToolContext::record_listing: called");
        self.discovered_dirs.insert(listing.current_path.clone());
        for item in &listing.items {
            match item.kind {
                EntryKind::Directory => {
                    self.discovered_dirs.insert(item.path.clone());
                }
                EntryKind::File => {
                    self.discovered_files.insert(item.path.clone());
                }
            }
        }
    }

    /// Record a file this session just wrote
    pub fn record_written(&mut self, path: &Path) {
        debug!(?path, "ToolContext::record_written: called");
        self.discovered_files.insert(path.to_path_buf());
    }

    /// Whether `path` (already normalized) may be read
    pub fn is_confirmed_file(&self, path: &Path) -> bool {
        self.discovered_files.contains(path)
    }

    /// Whether `path` (already normalized) has been seen as a directory
    pub fn is_known_dir(&self, path: &Path) -> bool {
        self.discovered_dirs.contains(path)
    }

    pub fn discovered_files(&self) -> &HashSet<PathBuf> {
        &self.discovered_files
    }

    pub fn discovered_dirs(&self) -> &HashSet<PathBuf> {
        &self.discovered_dirs
    }
}
