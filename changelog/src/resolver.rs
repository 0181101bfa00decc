use regex::Captures;

use crate::patterns::{OPTION_MARKUP_PATTERN, REF_MARKUP_PATTERN};
use crate::types::ReferenceTable;

/// Rewrites inline `:ref:` and `:option:` markup into Markdown links.
///
/// A pure transform: each description is resolved independently against a
/// read-only symbol table. Symbols missing from the table become links with
/// an empty target rather than errors, so an empty table (say, the
/// documentation site was unreachable) still renders.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    site_root: String,
}

impl ReferenceResolver {
    pub fn new(site_root: impl Into<String>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }

    /// Resolves all cross-reference markup in a description.
    ///
    /// `:ref:` targets come straight from the table; `:option:` targets are
    /// table paths relative to the site root. Text without markup passes
    /// through unchanged, which makes resolution idempotent.
    #[must_use]
    pub fn resolve(&self, description: &str, table: &ReferenceTable) -> String {
        let resolved = REF_MARKUP_PATTERN.replace_all(description, |caps: &Captures| {
            let symbol = &caps[1];
            let target = table.get(symbol).map(String::as_str).unwrap_or_default();
            format!("[{symbol}]({target})")
        });

        OPTION_MARKUP_PATTERN
            .replace_all(&resolved, |caps: &Captures| {
                let symbol = &caps[1];
                let path = table.get(symbol).map(String::as_str).unwrap_or_default();
                format!("[{symbol}]({}{path})", self.site_root)
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> ReferenceTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_ref_markup_against_the_table() {
        let resolver = ReferenceResolver::new("https://example.com");
        let table = table(&[("foo_bar", "/x")]);

        let resolved = resolver.resolve("see :ref:`foo_bar <api_foo>` for details", &table);
        assert_eq!(resolved, "see [foo_bar](/x) for details");
    }

    #[test]
    fn missing_ref_symbol_yields_empty_target() {
        let resolver = ReferenceResolver::new("https://example.com");

        let resolved = resolver.resolve("see :ref:`unknown_symbol`", &ReferenceTable::new());
        assert_eq!(resolved, "see [unknown_symbol]()");
    }

    #[test]
    fn option_markup_is_resolved_relative_to_the_site_root() {
        let resolver = ReferenceResolver::new("https://example.com");
        let table = table(&[("--flag", "/docs/flags#flag")]);

        let resolved = resolver.resolve("pass :option:`--flag` to enable", &table);
        assert_eq!(
            resolved,
            "pass [--flag](https://example.com/docs/flags#flag) to enable"
        );
    }

    #[test]
    fn option_markup_with_empty_table_links_to_the_root() {
        let resolver = ReferenceResolver::new("https://example.com");

        let resolved = resolver.resolve(":option:`foo`", &ReferenceTable::new());
        assert_eq!(resolved, "[foo](https://example.com)");
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = ReferenceResolver::new("https://example.com");
        let table = table(&[("foo_bar", "/x")]);

        let once = resolver.resolve("fix :ref:`foo_bar <y>` and :option:`foo_bar`", &table);
        let twice = resolver.resolve(&once, &table);
        assert_eq!(once, twice);
    }

    #[test]
    fn multiple_matches_resolve_left_to_right() {
        let resolver = ReferenceResolver::new("https://example.com");
        let table = table(&[("aaa", "/a"), ("bbb", "/b")]);

        let resolved = resolver.resolve(":ref:`aaa <x>` then :ref:`bbb <y>`", &table);
        assert_eq!(resolved, "[aaa](/a) then [bbb](/b)");
    }

    #[test]
    fn text_without_markup_passes_through() {
        let resolver = ReferenceResolver::new("https://example.com");

        let text = "plain text with `backticks` and a (#123) marker";
        assert_eq!(resolver.resolve(text, &ReferenceTable::new()), text);
    }
}
