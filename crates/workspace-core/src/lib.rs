//! workspace-core: Wire types for the remote workspace objects API
//!
//! This crate provides:
//! - Object descriptors (notebooks, directories) as returned by the API
//! - Request envelopes for import, export, list, mkdirs and delete
//! - Workspace path helpers
//!
//! Nothing here performs I/O; the HTTP binding lives in `workspace-client`.

pub mod path;
pub mod types;

pub use path::parent_dir;
pub use types::{
    ExportFormat, ExportRequest, Language, ListResponse, NotebookContent, NotebookDeleteRequest,
    NotebookImportRequest, ObjectType, ParseEnumError, PathRequest, WorkspaceObjectStatus,
};
