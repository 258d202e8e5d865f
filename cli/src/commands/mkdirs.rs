//! MKDIRS command - Create a folder, including missing parents.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use workspace_client::NotebooksApi;

use super::{HumanReadable, output};

/// Arguments for the mkdirs command.
#[derive(Args)]
pub struct MkdirsArgs {
    /// Folder path to create
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct MkdirsOutput {
    pub path: String,
}

impl HumanReadable for MkdirsOutput {
    fn print_human(&self) {
        println!("{} {}", "Folder ready:".green().bold(), self.path);
    }
}

/// Execute the mkdirs command.
pub async fn execute(api: &NotebooksApi<'_>, human: bool, args: MkdirsArgs) -> Result<()> {
    api.mkdirs(&args.path).await?;

    output(&MkdirsOutput { path: args.path }, human)
}
