/*!
 * Directory scanning and tree construction
 */

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::anchor::AnchorRegistry;
use crate::config::Config;
use crate::error::Result;
use crate::filter::IgnoreFilter;
use crate::language::Language;
use crate::types::{join_relative, Entry, EntryKind, FileRecord, TreeListing};

/// Marker for directories
pub const FOLDER_SYMBOL: &str = "📁";
/// Marker for files
pub const FILE_SYMBOL: &str = "📄";
/// Indentation added per nesting level
pub const INDENT: &str = "  ";
/// Marker emitted in place of an unreadable directory's children
pub const PERMISSION_DENIED: &str = "⚠️ [Permission denied]";

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Directories listed in the tree, root excluded
    pub directories: usize,
    /// Files listed in the tree
    pub files: usize,
    /// Directories whose children could not be read
    pub permission_denied: usize,
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    filter: IgnoreFilter,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: RefCell<ScannerStatistics>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            filter: IgnoreFilter::from_config(&config),
            config,
            progress,
            statistics: RefCell::new(ScannerStatistics::default()),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.borrow().clone()
    }

    /// Scan the target directory and return the rendered tree with its file records
    pub fn scan(&self) -> Result<TreeListing> {
        let mut listing = TreeListing {
            root_name: self.config.root_name(),
            ..Default::default()
        };
        let mut anchors = AnchorRegistry::new();

        self.scan_directory(&self.config.target_dir, "", 1, &mut anchors, &mut listing)?;

        listing.collisions = anchors.into_collisions();
        Ok(listing)
    }

    /// Append the subtree of `dir` to `listing`, children indented `depth` levels
    fn scan_directory(
        &self,
        dir: &Path,
        rel_dir: &str,
        depth: usize,
        anchors: &mut AnchorRegistry,
        listing: &mut TreeListing,
    ) -> Result<()> {
        let indent = INDENT.repeat(depth);
        tracing::debug!(dir = %dir.display(), "scanning directory");

        let entries = match self.list_children(dir, rel_dir) {
            Ok(entries) => entries,
            Err(e) => {
                let marker = e
                    .io_error()
                    .and_then(|io_err| permission_marker(io_err, &indent));
                let Some(marker) = marker else {
                    return Err(e.into());
                };
                tracing::warn!(dir = %dir.display(), "permission denied, skipping contents");
                self.statistics.borrow_mut().permission_denied += 1;
                listing.lines.push(marker);
                return Ok(());
            }
        };

        // Children come back sorted, so each partition keeps that order
        let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(Entry::is_dir);

        // Directories first, each followed by its own subtree
        for entry in dirs {
            if self.filter.should_ignore(&entry.name) {
                continue;
            }
            listing
                .lines
                .push(format!("{}- {} {}", indent, FOLDER_SYMBOL, entry.name));
            self.statistics.borrow_mut().directories += 1;

            if entry.kind == EntryKind::DirectoryLink {
                tracing::debug!(path = %entry.path.display(), "not following directory link");
                continue;
            }
            self.scan_directory(&entry.path, &entry.rel_path, depth + 1, anchors, listing)?;
        }

        for entry in files {
            if self.filter.should_ignore(&entry.name) {
                continue;
            }
            if Language::from_path(&entry.path).is_none() {
                continue;
            }

            let anchor = anchors.issue(&entry.rel_path);
            listing.lines.push(format!(
                "{}- {} [{}](#{})",
                indent, FILE_SYMBOL, entry.name, anchor
            ));
            self.statistics.borrow_mut().files += 1;
            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", entry.rel_path));

            if self.config.include_file_contents {
                listing.records.push(FileRecord {
                    rel_path: entry.rel_path,
                    anchor,
                    path: entry.path,
                });
            }
        }

        Ok(())
    }

    /// List the immediate children of `dir`, sorted case-insensitively by name
    fn list_children(
        &self,
        dir: &Path,
        rel_dir: &str,
    ) -> std::result::Result<Vec<Entry>, walkdir::Error> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by(|a, b| sort_key(a.file_name()).cmp(&sort_key(b.file_name())));

        for entry in walker {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else if entry.file_type().is_file() {
                EntryKind::File
            } else if entry.path_is_symlink() {
                match fs::metadata(entry.path()) {
                    Ok(target) if target.is_file() => EntryKind::File,
                    Ok(target) if target.is_dir() => EntryKind::DirectoryLink,
                    _ => {
                        tracing::debug!(path = %entry.path().display(), "skipping dangling link");
                        continue;
                    }
                }
            } else {
                tracing::debug!(path = %entry.path().display(), "skipping special entry");
                continue;
            };

            entries.push(Entry {
                rel_path: join_relative(rel_dir, &name),
                path: entry.path().to_path_buf(),
                name,
                kind,
            });
        }

        Ok(entries)
    }
}

/// Case-insensitive ordering with the original name as tie-breaker
fn sort_key(name: &std::ffi::OsStr) -> (String, String) {
    let name = name.to_string_lossy();
    (name.to_lowercase(), name.to_string())
}

/// Tree line replacing the children of a directory that could not be listed.
///
/// Only permission failures are recovered this way; any other error yields `None`.
pub fn permission_marker(err: &io::Error, indent: &str) -> Option<String> {
    (err.kind() == io::ErrorKind::PermissionDenied)
        .then(|| format!("{}- {}", indent, PERMISSION_DENIED))
}
