use crate::error::ChangelogError;
use crate::types::Result;

/// Link targets for the rendered release-notes document
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Product name used in the document title
    pub product: String,
    /// Documentation site root; `:option:` links resolve relative to it
    pub host: String,
    /// Base URL for pull-request links
    pub pull_base_url: String,
    /// Base URL for commit links
    pub commit_base_url: String,
    /// Path under `host` where versioned release-notes pages live
    pub docs_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            product: "Envoy".to_string(),
            host: "https://www.envoyproxy.io".to_string(),
            pull_base_url: "https://github.com/envoyproxy/envoy/pull/".to_string(),
            commit_base_url: "https://github.com/envoyproxy/envoy/commit/".to_string(),
            docs_path: "/docs/envoy/latest/version_history".to_string(),
        }
    }
}

impl SiteConfig {
    /// URL of the published release-notes page for a version.
    ///
    /// `v1.33.0` lives under its `v1.33` series directory; a version without
    /// a dotted tail has no series and is rejected.
    pub fn release_notes_url(&self, version: &str) -> Result<String> {
        let (series, _) = version
            .rsplit_once('.')
            .ok_or_else(|| ChangelogError::InvalidVersion(version.to_string()))?;
        Ok(format!(
            "{}{}/{}/{}",
            self.host, self.docs_path, series, version
        ))
    }
}
