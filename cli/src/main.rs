mod cli;
mod commits;
mod error;
mod generate;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            changelog_file,
            release,
            host,
            offline,
            output,
            verbose,
        } => generate::execute(generate::GenerateArgs {
            changelog_file,
            release,
            host,
            offline,
            output,
            verbose,
        }),
        Commands::Commits {
            changelog_file,
            output,
            verbose,
        } => commits::execute(changelog_file, output, verbose),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
