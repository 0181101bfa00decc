use crate::patterns::{CATEGORY_HEADER_PATTERN, PULL_REQUEST_PATTERN};
use crate::types::{ChangelogEntry, CommitSummaries, EntryPhase};

const AREA_FIELD: &str = "area: ";
const CHANGE_FIELD: &str = "change: ";

/// Reconstructs logical changelog entries from a stream of attributed lines.
///
/// The input file is only YAML-shaped: category blocks are bare
/// `identifier:` lines, entries are `- ` list items with `area:`/`change:`
/// sub-fields, and description text continues across physical lines. Each
/// physical line arrives with the commit that last touched it; an entry
/// collects every commit that touched any of its lines.
#[derive(Debug, Default)]
pub struct Reconstructor {
    log: Vec<ChangelogEntry>,
    summaries: CommitSummaries,
    current_category: Option<String>,
    current_entry: Option<ChangelogEntry>,
    last_commit_id: String,
}

impl Reconstructor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reconstructor with the commit summary lookup already filled.
    #[must_use]
    pub fn with_summaries(summaries: CommitSummaries) -> Self {
        Self {
            summaries,
            ..Self::default()
        }
    }

    /// Records the one-line summary for a commit. Summaries are consulted
    /// when an entry is finalized; commits without one yield an empty string.
    pub fn record_summary(&mut self, commit_id: impl Into<String>, summary: impl Into<String>) {
        self.summaries.insert(commit_id.into(), summary.into());
    }

    /// Consumes one attributed physical line of the changelog file.
    ///
    /// Lines must arrive in file order. Blank lines carry no content but
    /// still update the sticky commit id.
    pub fn consume(&mut self, commit_id: &str, raw_line: &str) {
        if self.last_commit_id != commit_id {
            self.last_commit_id = commit_id.to_string();
        }

        let line = raw_line.trim_start_matches('\t');
        if line.is_empty() {
            return;
        }

        // Category headers open a new block and belong to no entry. Checked
        // before list-item detection; a line cannot be both.
        if CATEGORY_HEADER_PATTERN.is_match(line) {
            self.current_category = Some(line.trim_end_matches(':').to_string());
            return;
        }

        if line.starts_with("- ") {
            self.finalize_current();
            self.current_entry = Some(ChangelogEntry::new(
                self.current_category.clone().unwrap_or_default(),
                self.last_commit_id.clone(),
            ));
        }

        // Content before the first list item has nothing to belong to.
        let Some(entry) = self.current_entry.as_mut() else {
            return;
        };
        entry.record_commit(&self.last_commit_id);

        let line = line.trim_start_matches(['-', ' ']);

        match entry.phase {
            EntryPhase::Description => {
                entry.description.push_str(line);
                entry.description.push(' ');
            }
            EntryPhase::Fields => {
                if let Some(area) = line.strip_prefix(AREA_FIELD) {
                    entry.area = area.to_string();
                } else if line.starts_with(CHANGE_FIELD) {
                    // The marker line itself contributes no description text.
                    entry.phase = EntryPhase::Description;
                }
                // Unrecognized fields are skipped.
            }
        }
    }

    /// Finalizes the entry under construction and appends it to the log.
    ///
    /// Entries that never saw a category header are dropped: they are
    /// preamble or malformed blocks. For retained entries, one summary is
    /// looked up per contributing commit and pull-request numbers are pulled
    /// out of the summaries that carry one.
    pub fn finalize_current(&mut self) {
        let Some(mut entry) = self.current_entry.take() else {
            return;
        };
        if entry.category.is_empty() {
            return;
        }

        for commit_id in &entry.commit_ids {
            let summary = self.summaries.get(commit_id).cloned().unwrap_or_default();
            if let Some(caps) = PULL_REQUEST_PATTERN.captures(&summary) {
                // `(#1)` is only four characters; anything that short is
                // treated as "no pull request", never an error.
                if caps[0].len() > 4 {
                    entry.pull_requests.push(caps[1].to_string());
                }
            }
            entry.summaries.push(summary);
        }

        self.log.push(entry);
    }

    /// Finalizes any outstanding entry and returns the reconstructed log.
    #[must_use]
    pub fn finish(mut self) -> Vec<ChangelogEntry> {
        self.finalize_current();
        self.log
    }
}
