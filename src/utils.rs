/*!
 * Utility functions for repo2md
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::filter::IgnoreFilter;
use crate::language::Language;

/// Count the files the tree will list, for progress tracking.
///
/// Unreadable directories are skipped rather than reported; the scanner
/// itself marks them in the output.
pub fn count_files(dir: &Path, config: &Config) -> u64 {
    let filter = IgnoreFilter::from_config(config);

    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !filter.should_ignore(&e.file_name().to_string_lossy())
        })
        .filter_map(Result::ok)
        .filter(|e| e.depth() > 0 && !e.file_type().is_dir())
        .filter(|e| Language::from_path(e.path()).is_some())
        .count() as u64
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn formats_sizes_with_units() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn counts_only_listed_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/.cache")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "").unwrap();
        fs::write(dir.path().join("src/.cache/x.rs"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("build.py"), "").unwrap();

        let config = Config {
            ignore_patterns: vec!["build.*".to_string()],
            ..Config::new(dir.path())
        };
        assert_eq!(count_files(dir.path(), &config), 1);
    }
}
