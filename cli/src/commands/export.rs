//! EXPORT command - Download notebook content.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use workspace_client::NotebooksApi;
use workspace_core::ExportFormat;

use super::{HumanReadable, output};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Notebook path to export
    pub path: String,

    /// Export format
    #[arg(short, long, default_value_t = ExportFormat::Source)]
    pub format: ExportFormat,

    /// Write the decoded content to this file
    #[arg(short, long, conflicts_with = "raw")]
    pub output: Option<PathBuf>,

    /// Write the decoded content to stdout without any formatting
    #[arg(long)]
    pub raw: bool,
}

/// Result of an export.
///
/// `content` holds the base64 payload unless it was written to a file.
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub path: String,
    pub format: ExportFormat,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip)]
    decoded: Vec<u8>,
}

impl HumanReadable for ExportOutput {
    fn print_human(&self) {
        if let Some(file) = &self.written_to {
            println!("{}", "Notebook exported successfully!".green().bold());
            println!();
            println!("  {} {}", "Path:".cyan(), self.path);
            println!("  {} {}", "Format:".cyan(), self.format);
            println!("  {} {}", "File:".cyan(), file.display());
            println!("  {} {} bytes", "Size:".cyan(), self.bytes);
            return;
        }

        println!("{} {} ({})", "Notebook:".cyan(), self.path, self.format);
        println!("{}", "-".repeat(60));
        println!("{}", String::from_utf8_lossy(&self.decoded));
        println!("{}", "-".repeat(60));
    }
}

/// Execute the export command.
pub async fn execute(api: &NotebooksApi<'_>, human: bool, args: ExportArgs) -> Result<()> {
    let encoded = api.export(&args.path, args.format).await?;
    let decoded = STANDARD
        .decode(encoded.trim())
        .context("exported content is not valid base64")?;

    if args.raw {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&decoded)?;
        stdout.flush()?;
        return Ok(());
    }

    let result = match args.output {
        Some(file) => {
            std::fs::write(&file, &decoded)
                .with_context(|| format!("failed to write {}", file.display()))?;
            ExportOutput {
                path: args.path,
                format: args.format,
                bytes: decoded.len(),
                written_to: Some(file),
                content: None,
                decoded: Vec::new(),
            }
        }
        None => ExportOutput {
            path: args.path,
            format: args.format,
            bytes: decoded.len(),
            written_to: None,
            content: Some(encoded),
            decoded,
        },
    };

    output(&result, human)
}
