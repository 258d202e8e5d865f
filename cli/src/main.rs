//! Command-line interface for workspace notebooks and folders.
//!
//! This CLI tool provides one command per workspace API operation:
//! - create: Import a notebook from a local file
//! - read: Show notebook or folder metadata
//! - export: Download notebook content
//! - mkdirs: Create a folder and its parents
//! - list: List a folder, optionally every notebook beneath it
//! - delete: Delete a notebook or folder
//!
//! Configuration via environment (flags take precedence):
//! - WORKSPACE_HOST: Base URL of the workspace
//! - WORKSPACE_TOKEN: Bearer token for authentication
//! - WORKSPACE_TIMEOUT_SECS: Request timeout (default: 60)
//! - RUST_LOG: Log filter (default: warn)

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    create::CreateArgs, delete::DeleteArgs, export::ExportArgs, list::ListArgs,
    mkdirs::MkdirsArgs, read::ReadArgs,
};

/// Workspace notebooks CLI
///
/// Manage notebooks and folders in a remote workspace. Prints JSON by
/// default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "workspace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Workspace URL [default: $WORKSPACE_HOST]
    #[arg(long, global = true)]
    host: Option<String>,

    /// Bearer token for authentication [default: $WORKSPACE_TOKEN]
    #[arg(long, global = true)]
    token: Option<String>,

    /// Request timeout in seconds [default: $WORKSPACE_TIMEOUT_SECS or 60]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a notebook from a local file
    Create(CreateArgs),

    /// Show metadata for a notebook or folder
    Read(ReadArgs),

    /// Export notebook content
    Export(ExportArgs),

    /// Create a folder, including missing parents
    Mkdirs(MkdirsArgs),

    /// List a folder
    List(ListArgs),

    /// Delete a notebook or folder
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let host = cli.host.as_deref();
    let client = match commands::build_client(host, cli.token.as_deref(), cli.timeout) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let api = client.notebooks();

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(&api, cli.human, args).await,
        Commands::Read(args) => commands::read::execute(&api, cli.human, args).await,
        Commands::Export(args) => commands::export::execute(&api, cli.human, args).await,
        Commands::Mkdirs(args) => commands::mkdirs::execute(&api, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&api, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&api, cli.human, args).await,
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber on stderr, leaving stdout for output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
