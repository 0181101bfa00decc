use std::collections::HashMap;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use thiserror::Error;

/// Anchors the documentation generator marks as cross-references carry a
/// class starting with this prefix (`reference internal`, `reference
/// external`, ...).
const REFERENCE_CLASS_PREFIX: &str = "reference";

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("Failed to compile anchor selector"));

/// Errors that can occur while building the cross-reference table
#[derive(Error, Debug)]
pub enum XrefError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Documentation page returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Documentation page content type was '{0}', not text/html")]
    ContentType(String),
}

impl XrefError {
    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => format!("Failed to fetch documentation page: {}", e),
            Self::Status(status) => format!("Documentation page returned HTTP {}", status),
            Self::ContentType(ctype) => {
                format!("Documentation page was '{}', expected text/html", ctype)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, XrefError>;

/// Fetches the published release-notes page and scrapes it into a
/// symbol-to-URL table.
///
/// The caller decides how a failure degrades; typically an empty table, so
/// cross-references render with empty link targets instead of aborting.
pub async fn fetch_reference_table(url: &str) -> Result<HashMap<String, String>> {
    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(XrefError::Status(status));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.starts_with("text/html") {
        return Err(XrefError::ContentType(content_type));
    }

    let body = response.text().await?;
    Ok(scrape_reference_links(&body))
}

/// Collects reference anchors from an already-fetched HTML document.
///
/// Every text fragment of a matching anchor is keyed to that anchor's
/// `href`; on symbol collision the last anchor wins.
pub fn scrape_reference_links(html: &str) -> HashMap<String, String> {
    let document = Html::parse_document(html);
    let mut table = HashMap::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let element = anchor.value();
        let is_reference = element
            .attr("class")
            .is_some_and(|class| class.starts_with(REFERENCE_CLASS_PREFIX));
        if !is_reference {
            continue;
        }
        let Some(href) = element.attr("href").filter(|href| !href.is_empty()) else {
            continue;
        };

        for fragment in anchor.text() {
            if !fragment.trim().is_empty() {
                table.insert(fragment.to_string(), href.to_string());
            }
        }
    }

    table
}
