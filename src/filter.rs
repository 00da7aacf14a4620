/*!
 * Ignore rules for directory entries
 */

use glob_match::glob_match;

use crate::config::Config;

/// Characters that turn an ignore pattern into a glob
const WILDCARDS: [char; 3] = ['*', '?', '['];

/// Decides which entries are left out of the listing
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    ignore_hidden: bool,
    patterns: Vec<String>,
}

impl IgnoreFilter {
    pub fn new(ignore_hidden: bool, patterns: Vec<String>) -> Self {
        Self {
            ignore_hidden,
            patterns,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ignore_hidden, config.ignore_patterns.clone())
    }

    /// Check whether an entry with this file name should be skipped
    pub fn should_ignore(&self, name: &str) -> bool {
        if self.ignore_hidden && is_hidden(name) {
            return true;
        }

        self.patterns.iter().any(|pattern| {
            pattern == name || (is_glob(pattern) && glob_match(pattern, name))
        })
    }
}

/// Hidden entries are the ones whose name starts with a dot
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(WILDCARDS)
}
