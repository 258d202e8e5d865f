//! CREATE command - Import a notebook from a local file.

use std::path::Path;

use anyhow::{Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use workspace_client::NotebooksApi;
use workspace_core::{ExportFormat, Language, parent_dir};

use super::{HumanReadable, output, read_source};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Workspace path for the new notebook
    pub path: String,

    /// Local file to import (- for stdin)
    #[arg(short, long)]
    pub source: String,

    /// Notebook language (inferred from the file extension when omitted)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Format of the source file
    #[arg(short, long, default_value_t = ExportFormat::Source)]
    pub format: ExportFormat,

    /// Replace an existing notebook at the same path
    #[arg(long)]
    pub overwrite: bool,

    /// Create the parent folder first if it does not exist
    #[arg(short, long)]
    pub parents: bool,
}

/// Result of an import.
#[derive(Debug, Serialize)]
pub struct CreateOutput {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub format: ExportFormat,
    pub overwrite: bool,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_parent: Option<String>,
}

impl HumanReadable for CreateOutput {
    fn print_human(&self) {
        println!("{}", "Notebook imported successfully!".green().bold());
        println!();
        println!("  {} {}", "Path:".cyan(), self.path);
        if let Some(language) = &self.language {
            println!("  {} {}", "Language:".cyan(), language);
        }
        println!("  {} {}", "Format:".cyan(), self.format);
        println!("  {} {} bytes", "Size:".cyan(), self.bytes);
        if self.overwrite {
            println!("  {} {}", "Overwrite:".cyan(), "yes".yellow());
        }
        if let Some(parent) = &self.created_parent {
            println!("  {} {}", "Created Folder:".cyan(), parent);
        }
    }
}

/// Guess a notebook language from a source file extension.
pub fn language_from_extension(source: &str) -> Option<Language> {
    let ext = Path::new(source).extension()?.to_str()?;
    match ext.to_ascii_lowercase().as_str() {
        "py" => Some(Language::Python),
        "scala" => Some(Language::Scala),
        "sql" => Some(Language::Sql),
        "r" => Some(Language::R),
        _ => None,
    }
}

/// Execute the create command.
pub async fn execute(api: &NotebooksApi<'_>, human: bool, args: CreateArgs) -> Result<()> {
    let language = args
        .language
        .or_else(|| language_from_extension(&args.source));
    if args.format == ExportFormat::Source && language.is_none() {
        bail!("--language is required for SOURCE imports with no recognized file extension");
    }

    let raw = read_source(&args.source)?;
    let encoded = STANDARD.encode(&raw);

    let mut created_parent = None;
    if args.parents {
        if let Some(parent) = parent_dir(&args.path) {
            api.mkdirs(parent).await?;
            created_parent = Some(parent.to_string());
        }
    }

    api.create(&args.path, &encoded, language.clone(), args.format, args.overwrite)
        .await?;

    let result = CreateOutput {
        path: args.path,
        language,
        format: args.format,
        overwrite: args.overwrite,
        bytes: raw.len(),
        created_parent,
    };

    output(&result, human)
}
