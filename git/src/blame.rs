use std::collections::HashMap;

const SUMMARY_FIELD: &str = "summary ";

/// A physical content line of the blamed file together with the commit that
/// last touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedLine {
    pub commit_id: String,
    pub text: String,
}

/// Per-line attribution for one file, as reported by `git blame -p`.
#[derive(Debug, Default)]
pub struct BlameFile {
    /// Content lines in file order
    pub lines: Vec<AttributedLine>,
    /// One-line commit messages keyed by commit id
    pub summaries: HashMap<String, String>,
}

/// Parses the porcelain stream produced by `git blame -p`.
///
/// Three line classes matter: header lines whose first token is a commit id
/// set the pending commit, `summary` metadata records that commit's one-line
/// message, and TAB-prefixed lines are file content attributed to the
/// pending commit. All other metadata (`author`, `filename`, ...) is
/// skipped.
pub fn parse_porcelain(output: &str) -> BlameFile {
    let mut blame = BlameFile::default();
    let mut pending_commit = String::new();

    for line in output.lines() {
        if let Some(text) = line.strip_prefix('\t') {
            blame.lines.push(AttributedLine {
                commit_id: pending_commit.clone(),
                text: text.to_string(),
            });
            continue;
        }

        let first_token = line.split(' ').next().unwrap_or_default();
        if is_commit_id(first_token) {
            pending_commit = first_token.to_string();
            continue;
        }

        if let Some(summary) = line.strip_prefix(SUMMARY_FIELD) {
            // Porcelain emits commit metadata once per commit; keep the
            // first summary seen for a commit.
            blame
                .summaries
                .entry(pending_commit.clone())
                .or_insert_with(|| summary.to_string());
        }
    }

    blame
}

/// An abbreviated or full commit id: non-empty, lowercase hex only.
fn is_commit_id(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORCELAIN: &str = "\
aaa1111aaa1111aaa1111aaa1111aaa1111aaa11 1 1 2
author Dev One
author-mail <dev.one@example.com>
summary Add changelog scaffolding (#12)
filename changelogs/current.yaml
\tbug_fixes:
aaa1111aaa1111aaa1111aaa1111aaa1111aaa11 2 2
\t- area: http
bbb2222bbb2222bbb2222bbb2222bbb2222bbb22 3 3 1
author Dev Two
summary Fix http parsing (#345)
filename changelogs/current.yaml
\t  change: |
bbb2222bbb2222bbb2222bbb2222bbb2222bbb22 4 4
\t  fixes parsing
";

    #[test]
    fn content_lines_are_attributed_to_the_pending_commit() {
        let blame = parse_porcelain(PORCELAIN);

        assert_eq!(blame.lines.len(), 4);
        assert_eq!(
            blame.lines[0],
            AttributedLine {
                commit_id: "aaa1111aaa1111aaa1111aaa1111aaa1111aaa11".to_string(),
                text: "bug_fixes:".to_string(),
            }
        );
        assert_eq!(
            blame.lines[2].commit_id,
            "bbb2222bbb2222bbb2222bbb2222bbb2222bbb22"
        );
        assert_eq!(blame.lines[3].text, "  fixes parsing");
    }

    #[test]
    fn summaries_are_collected_per_commit() {
        let blame = parse_porcelain(PORCELAIN);

        assert_eq!(blame.summaries.len(), 2);
        assert_eq!(
            blame.summaries["aaa1111aaa1111aaa1111aaa1111aaa1111aaa11"],
            "Add changelog scaffolding (#12)"
        );
        assert_eq!(
            blame.summaries["bbb2222bbb2222bbb2222bbb2222bbb2222bbb22"],
            "Fix http parsing (#345)"
        );
    }

    #[test]
    fn metadata_keys_are_not_mistaken_for_commit_ids() {
        // `author` starts with a hex letter but is not all hex.
        let blame = parse_porcelain("author deadbeef\n\tcontent\n");

        assert_eq!(blame.lines.len(), 1);
        assert_eq!(blame.lines[0].commit_id, "");
    }

    #[test]
    fn first_summary_wins_for_a_commit() {
        let input = "\
ccc3333ccc3333ccc3333ccc3333ccc3333ccc33 1 1 1
summary first message
summary second message
\tline
";
        let blame = parse_porcelain(input);
        assert_eq!(
            blame.summaries["ccc3333ccc3333ccc3333ccc3333ccc3333ccc33"],
            "first message"
        );
    }

    #[test]
    fn empty_input_yields_an_empty_blame() {
        let blame = parse_porcelain("");
        assert!(blame.lines.is_empty());
        assert!(blame.summaries.is_empty());
    }
}
