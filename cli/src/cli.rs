use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(
    author,
    version,
    about = "Builds attributable release notes from a version-controlled changelog file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a cross-linked release-notes document from the changelog file
    Generate {
        /// Path to the changelog file tracked in git
        changelog_file: String,

        /// Release version the notes belong to (e.g. v1.33.0)
        #[clap(short, long)]
        release: String,

        /// Documentation site root used for cross-reference links
        #[clap(long)]
        host: Option<String>,

        /// Skip fetching the documentation page; cross-references resolve to empty targets
        #[clap(long, default_value_t = false)]
        offline: bool,

        /// Write the document to a file instead of stdout
        #[clap(short, long)]
        output: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Export the commit hashes behind each changelog entry as CSV
    Commits {
        /// Path to the changelog file tracked in git
        changelog_file: String,

        /// CSV file to write, one record per entry
        #[clap(short, long)]
        output: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}
