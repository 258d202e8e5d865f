//! DELETE command - Delete a notebook or folder.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use workspace_client::NotebooksApi;

use super::{HumanReadable, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Workspace path to delete
    pub path: String,

    /// Delete a folder together with everything inside it
    #[arg(short, long)]
    pub recursive: bool,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub path: String,
    pub recursive: bool,
}

impl HumanReadable for DeleteOutput {
    fn print_human(&self) {
        println!("{}", "Deleted successfully!".green().bold());
        println!();
        println!("  {} {}", "Path:".cyan(), self.path);
        if self.recursive {
            println!("  {} {}", "Recursive:".cyan(), "yes".yellow());
        }
    }
}

/// Execute the delete command.
pub async fn execute(api: &NotebooksApi<'_>, human: bool, args: DeleteArgs) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete {}{}? [y/N] ",
            "Warning:".yellow().bold(),
            args.path,
            if args.recursive { " and everything in it" } else { "" }
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    api.delete(&args.path, args.recursive).await?;

    let result = DeleteOutput {
        path: args.path,
        recursive: args.recursive,
    };

    output(&result, human)
}
