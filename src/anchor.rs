//! Anchor IDs linking tree entries to their content sections

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("valid anchor regex"));
static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid anchor regex"));

/// Slugify a relative path into an anchor ID.
///
/// The path is lowercased, every character outside `[a-z0-9]` becomes a dash,
/// runs of dashes collapse to one and leading/trailing dashes are stripped.
pub fn anchor_id(relative_path: &str) -> String {
    let lowered = relative_path.to_lowercase();
    let dashed = NON_ALPHANUMERIC.replace_all(&lowered, "-");
    let collapsed = DASH_RUNS.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

/// Two distinct relative paths that slugify to the same anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorCollision {
    pub anchor: String,
    /// Path that claimed the anchor first
    pub first: String,
    pub second: String,
}

/// Issues anchors for a single scan and remembers who owns each one.
///
/// Colliding anchors are still handed out unchanged; the collision is only
/// recorded so callers can report it.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    owners: HashMap<String, String>,
    collisions: Vec<AnchorCollision>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the anchor for `relative_path`, recording any collision
    pub fn issue(&mut self, relative_path: &str) -> String {
        let anchor = anchor_id(relative_path);
        match self.owners.get(&anchor) {
            Some(owner) if owner != relative_path => {
                tracing::warn!(
                    anchor = %anchor,
                    first = %owner,
                    second = %relative_path,
                    "anchor collision"
                );
                self.collisions.push(AnchorCollision {
                    anchor: anchor.clone(),
                    first: owner.clone(),
                    second: relative_path.to_string(),
                });
            }
            Some(_) => {}
            None => {
                self.owners.insert(anchor.clone(), relative_path.to_string());
            }
        }
        anchor
    }

    pub fn collisions(&self) -> &[AnchorCollision] {
        &self.collisions
    }

    pub fn into_collisions(self) -> Vec<AnchorCollision> {
        self.collisions
    }
}
