//! LIST command - List a folder, or every notebook beneath it.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use workspace_client::NotebooksApi;
use workspace_core::WorkspaceObjectStatus;

use super::{HumanReadable, output, type_label};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Folder to list
    #[arg(default_value = "/")]
    pub path: String,

    /// Walk subfolders and return only notebooks
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub path: String,
    pub recursive: bool,
    pub objects: Vec<WorkspaceObjectStatus>,
}

impl HumanReadable for ListOutput {
    fn print_human(&self) {
        let title = if self.recursive {
            format!("Notebooks under {}", self.path)
        } else {
            format!("Contents of {}", self.path)
        };
        println!("{}", title.green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.objects.is_empty() {
            println!("  {}", "(empty)".dimmed());
            return;
        }

        for object in &self.objects {
            let language = object
                .language
                .as_ref()
                .map(|l| format!("[{}]", l))
                .unwrap_or_default();

            // Recursive listings span many folders, so show full paths.
            let shown = if self.recursive {
                object.path.as_str()
            } else {
                object.name()
            };

            println!(
                "  {} {} {}",
                type_label(&object.object_type),
                shown.bold(),
                language.dimmed()
            );
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.objects.len());
    }
}

/// Execute the list command.
pub async fn execute(api: &NotebooksApi<'_>, human: bool, args: ListArgs) -> Result<()> {
    let objects = api.list(&args.path, args.recursive).await?;

    let result = ListOutput {
        path: args.path,
        recursive: args.recursive,
        objects,
    };

    output(&result, human)
}
