use std::collections::HashMap;

use crate::error::ChangelogError;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// One-line commit summaries keyed by commit id
pub type CommitSummaries = HashMap<String, String>;

/// Symbol-to-URL table scraped from the documentation site
pub type ReferenceTable = HashMap<String, String>;

/// Parse phase of the entry currently under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// Expecting `area:` or `change:` fields
    Fields,
    /// Every further owned line extends the description
    Description,
}

/// A logical changelog entry reconstructed from attributed lines
#[derive(Debug, Clone)]
pub struct ChangelogEntry {
    pub category: String,
    pub area: String,
    /// Commits that touched any line of this entry, first-seen order
    pub commit_ids: Vec<String>,
    /// One summary per commit id, filled in at finalization
    pub summaries: Vec<String>,
    /// Pull-request numbers found in the summaries; absent ones are omitted
    pub pull_requests: Vec<String>,
    pub description: String,
    pub(crate) phase: EntryPhase,
}

impl ChangelogEntry {
    pub(crate) fn new(category: String, commit_id: String) -> Self {
        Self {
            category,
            area: String::new(),
            commit_ids: vec![commit_id],
            summaries: Vec::new(),
            pull_requests: Vec::new(),
            description: String::new(),
            phase: EntryPhase::Fields,
        }
    }

    /// Records a contributing commit, keeping first-seen order and skipping
    /// commits already present.
    pub(crate) fn record_commit(&mut self, commit_id: &str) {
        if !self.commit_ids.iter().any(|id| id == commit_id) {
            self.commit_ids.push(commit_id.to_string());
        }
    }
}
