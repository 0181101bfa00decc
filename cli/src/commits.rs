use std::path::Path;

use changelog::Reconstructor;
use csv::Writer;
use git::blame::BlameFile;
use git::repository::{RealGitRepository, Repository};

use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(changelog_file: String, output: String, verbose: bool) -> Result<()> {
    let repo = RealGitRepository::open()
        .map_err(|e| CliError::Git(e).with_context("Failed to open git repository"))?;

    let blame = repo
        .blame_file(Path::new(&changelog_file))
        .map_err(|e| CliError::Git(e).with_context("Failed to collect line attribution"))?;
    let BlameFile { lines, summaries } = blame;

    let mut reconstructor = Reconstructor::with_summaries(summaries);
    for line in &lines {
        reconstructor.consume(&line.commit_id, &line.text);
    }
    let entries = reconstructor.finish();

    if verbose {
        println!(
            "Reconstructed {} entries from {}",
            entries.len(),
            changelog_file
        );
    }

    let mut writer = Writer::from_path(&output)?;
    for entry in &entries {
        writer.write_record(&entry.commit_ids)?;
    }
    writer.flush()?;

    ui::success_message(&format!(
        "Wrote commit hashes for {} entries to {}",
        entries.len(),
        output
    ));

    Ok(())
}
