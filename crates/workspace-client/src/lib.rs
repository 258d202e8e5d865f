//! workspace-client: REST binding for the remote workspace objects API
//!
//! This crate provides:
//! - `ApiClient`, a shared HTTP client that speaks the versioned REST API
//! - `NotebooksApi`, one method per `/workspace/*` endpoint
//! - Configuration from environment variables
//!
//! # Usage
//!
//! ```rust,ignore
//! use workspace_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?)?;
//! let notebooks = client.notebooks();
//!
//! notebooks.mkdirs("/Users/alice/etl").await?;
//! for nb in notebooks.list("/Users/alice", true).await? {
//!     println!("{}", nb.path);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod notebooks;

pub use client::{API_VERSION, ApiClient, REQUEST_ID_HEADER};
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult};
pub use notebooks::NotebooksApi;

// Re-export the wire types
pub use workspace_core;
