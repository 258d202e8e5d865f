//! READ command - Show metadata for a notebook or folder.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use workspace_client::NotebooksApi;
use workspace_core::WorkspaceObjectStatus;

use super::{HumanReadable, format_timestamp, output, type_label};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Workspace path to inspect
    pub path: String,
}

impl HumanReadable for WorkspaceObjectStatus {
    fn print_human(&self) {
        println!("{}", "Object Details".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        println!("  {} {}", "Path:".cyan(), self.path);
        println!("  {} {}", "Type:".cyan(), type_label(&self.object_type));
        if let Some(language) = &self.language {
            println!("  {} {}", "Language:".cyan(), language);
        }
        if let Some(id) = self.object_id {
            println!("  {} {}", "Object ID:".cyan(), id);
        }
        if let Some(created) = self.created() {
            println!("  {} {}", "Created:".cyan(), format_timestamp(&created));
        }
        if let Some(modified) = self.modified() {
            println!("  {} {}", "Modified:".cyan(), format_timestamp(&modified));
        }
    }
}

/// Execute the read command.
pub async fn execute(api: &NotebooksApi<'_>, human: bool, args: ReadArgs) -> Result<()> {
    let status = api.read(&args.path).await?;

    output(&status, human)
}
