//! Command implementations for the workspace CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod mkdirs;
pub mod read;

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use workspace_client::{ApiClient, ClientConfig};
use workspace_core::ObjectType;

/// Load client configuration from the environment, then apply flag overrides.
pub fn build_config(
    host: Option<&str>,
    token: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env_with_host(host)
        .context("no workspace host given (use --host or WORKSPACE_HOST)")?;

    if let Some(token) = token {
        config = config.with_token(token);
    }
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}

/// Build an API client from the environment and flag overrides.
pub fn build_client(
    host: Option<&str>,
    token: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<ApiClient> {
    let config = build_config(host, token, timeout_secs)?;
    tracing::debug!(?config, "building workspace client");

    Ok(ApiClient::new(&config)?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Read a local source: a file path, or `-` for stdin.
pub fn read_source(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(source).with_context(|| format!("failed to read {}", source))
    }
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Short colored label for an object type.
pub fn type_label(object_type: &ObjectType) -> ColoredString {
    match object_type {
        ObjectType::Notebook => "NB ".green(),
        ObjectType::Directory => "DIR".blue().bold(),
        ObjectType::Library => "LIB".magenta(),
        ObjectType::File => "FIL".normal(),
        ObjectType::Repo => "REP".yellow(),
        ObjectType::Unknown(_) => "???".dimmed(),
    }
}
