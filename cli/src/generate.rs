use std::fs;
use std::path::Path;

use changelog::{MarkdownFormatter, NotesFormatter, Reconstructor, ReferenceTable, SiteConfig};
use git::blame::BlameFile;
use git::repository::{RealGitRepository, Repository};
use tokio::runtime::Runtime;

use crate::error::{CliError, Result};
use crate::progress::ProgressTracker;
use crate::ui;

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub changelog_file: String,
    pub release: String,
    pub host: Option<String>,
    pub offline: bool,
    pub output: Option<String>,
    pub verbose: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let mut progress = ProgressTracker::new("Release Notes").with_steps(vec![
        "Opening git repository",
        "Collecting line attribution",
        "Reconstructing changelog entries",
        "Fetching documentation cross-references",
        "Rendering release notes",
    ]);

    let mut config = SiteConfig::default();
    if let Some(host) = args.host {
        config.host = host;
    }
    let notes_url = config.release_notes_url(&args.release)?;

    progress.start_step();
    let repo = RealGitRepository::open()
        .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))?;
    if args.verbose {
        println!("Working tree: {}", repo.workdir()?.display());
    }
    progress.complete_step();

    progress.start_step();
    let blame = repo
        .blame_file(Path::new(&args.changelog_file))
        .map_err(|e| CliError::Git(e).with_context("Failed to collect line attribution"))?;
    let BlameFile { lines, summaries } = blame;
    if args.verbose {
        println!(
            "Attributed {} lines across {} commits",
            lines.len(),
            summaries.len()
        );
    }
    progress.complete_step();

    progress.start_step();
    let mut reconstructor = Reconstructor::with_summaries(summaries);
    for line in &lines {
        reconstructor.consume(&line.commit_id, &line.text);
    }
    let entries = reconstructor.finish();
    if args.verbose {
        println!("Reconstructed {} entries", entries.len());
    }
    progress.complete_step();

    let table = if args.offline {
        progress.skip_step("offline");
        ReferenceTable::new()
    } else {
        progress.start_step();
        let rt = Runtime::new()
            .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;
        let table = fetch_reference_table(&rt, &notes_url);
        progress.complete_step();
        table
    };

    progress.start_step();
    let formatter = MarkdownFormatter::new(config);
    let document = formatter.format(&args.release, &notes_url, &entries, &table);
    progress.complete_step();
    progress.complete();

    match args.output {
        Some(path) => {
            fs::write(&path, document)?;
            ui::success_message(&format!("Wrote release notes to {}", path));
        }
        None => print!("{document}"),
    }

    Ok(())
}

/// Builds the cross-reference table from the published release-notes page.
///
/// A failed fetch is not fatal: cross-references degrade to empty link
/// targets, so the notes still render.
fn fetch_reference_table(rt: &Runtime, url: &str) -> ReferenceTable {
    match rt.block_on(xref::fetch_reference_table(url)) {
        Ok(table) => {
            ui::info_message(&format!("Collected {} cross-references", table.len()));
            table
        }
        Err(e) => {
            ui::warning_message(&format!(
                "Cross-references will have empty targets: {}",
                e.user_message()
            ));
            ReferenceTable::new()
        }
    }
}
