use crate::config::SiteConfig;
use crate::resolver::ReferenceResolver;
use crate::types::{ChangelogEntry, ReferenceTable};

// --- Traits ---

/// Renders a reconstructed changelog into a release-notes document.
pub trait NotesFormatter: Send + Sync {
    fn format(
        &self,
        version: &str,
        notes_url: &str,
        entries: &[ChangelogEntry],
        table: &ReferenceTable,
    ) -> String;
}

/// Markdown renderer.
///
/// Consecutive entries sharing a category are grouped under one heading;
/// commits and pull requests become links built from the configured URL
/// templates, and descriptions are resolved against the reference table.
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    config: SiteConfig,
    resolver: ReferenceResolver,
}

impl MarkdownFormatter {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let resolver = ReferenceResolver::new(config.host.clone());
        Self { config, resolver }
    }
}

impl NotesFormatter for MarkdownFormatter {
    fn format(
        &self,
        version: &str,
        notes_url: &str,
        entries: &[ChangelogEntry],
        table: &ReferenceTable,
    ) -> String {
        let mut doc = String::with_capacity(entries.len() * 256 + 128);
        doc.push_str(&format!(
            "# {} Release {version}\n\n",
            self.config.product
        ));
        doc.push_str(&format!("[release note]({notes_url})\n\n"));

        let mut current_category = "";
        for entry in entries {
            if entry.category != current_category {
                current_category = &entry.category;
                doc.push_str(&format!("## {current_category}\n\n"));
            }

            doc.push_str(&format!("**category**   : {}  \n", entry.category));
            doc.push_str(&format!("**area**       : {}  \n", entry.area));
            for summary in &entry.summaries {
                doc.push_str(&format!("**summary**    : {summary}  \n"));
            }

            doc.push_str("**commit**     : ");
            for commit in &entry.commit_ids {
                doc.push_str(&format!(
                    "[{commit}]({}{commit}) ",
                    self.config.commit_base_url
                ));
            }
            doc.push_str(" \n");

            doc.push_str("**pr**         : ");
            for pr in &entry.pull_requests {
                doc.push_str(&format!("[{pr}]({}{pr}) ", self.config.pull_base_url));
            }
            doc.push_str(" \n");

            let description = self.resolver.resolve(&entry.description, table);
            doc.push_str(&format!("**description**:  \n{description}  \n"));
            doc.push_str(" \n---\n\n");
        }

        doc
    }
}
