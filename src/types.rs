/*!
 * Core types and data structures for repo2md
 */

use std::path::PathBuf;

use crate::anchor::AnchorCollision;

/// Kind of a listed filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Symlink to a directory, listed but never descended into
    DirectoryLink,
    File,
}

/// A child of a scanned directory
#[derive(Debug, Clone)]
pub struct Entry {
    /// File name
    pub name: String,
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated
    pub rel_path: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::DirectoryLink)
    }
}

/// A file selected for the contents section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated
    pub rel_path: String,
    pub anchor: String,
    /// Absolute path used to read the content
    pub path: PathBuf,
}

/// Output of a scan: the rendered tree and the files to emit, in traversal order
#[derive(Debug, Clone, Default)]
pub struct TreeListing {
    /// Name shown on the root bullet
    pub root_name: String,
    /// Tree lines below the root bullet
    pub lines: Vec<String>,
    pub records: Vec<FileRecord>,
    pub collisions: Vec<AnchorCollision>,
}

/// Join a parent relative path and a child name with `/`
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

