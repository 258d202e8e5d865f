//! Notebook and folder operations under `/workspace/*`.
//!
//! Each method maps to exactly one endpoint, except a recursive [`list`],
//! which issues one `list` call per directory it visits.
//!
//! [`list`]: NotebooksApi::list

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Method;
use tokio::sync::Mutex;
use tracing::Instrument;
use workspace_core::{
    ExportFormat, ExportRequest, Language, ListResponse, NotebookContent, NotebookDeleteRequest,
    NotebookImportRequest, PathRequest, WorkspaceObjectStatus,
};

use crate::client::{API_VERSION, ApiClient};
use crate::error::ClientResult;

/// Serializes `mkdirs` calls across the whole process.
///
/// Concurrent `mkdirs` requests for overlapping paths can leave two folders
/// with the same name side by side on the remote service. Holding this lock
/// for the duration of each call keeps them strictly one at a time.
static MKDIRS_LOCK: Mutex<()> = Mutex::const_new(());

/// Notebook and folder operations on one workspace.
#[derive(Debug, Clone, Copy)]
pub struct NotebooksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NotebooksApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Import `content` (base64-encoded) as a notebook at `path`.
    pub async fn create(
        &self,
        path: &str,
        content: &str,
        language: Option<Language>,
        format: ExportFormat,
        overwrite: bool,
    ) -> ClientResult<()> {
        let request = NotebookImportRequest {
            content: content.to_string(),
            path: path.to_string(),
            language,
            format,
            overwrite,
        };

        self.client
            .perform_query(Method::POST, "/workspace/import", API_VERSION, &request)
            .await?;

        tracing::info!(path, %format, overwrite, "imported notebook");
        Ok(())
    }

    /// Fetch metadata (not content) for the object at `path`.
    pub async fn read(&self, path: &str) -> ClientResult<WorkspaceObjectStatus> {
        self.client
            .query(
                Method::GET,
                "/workspace/get-status",
                API_VERSION,
                &PathRequest::new(path),
            )
            .await
    }

    /// Fetch notebook content as a base64 string in the given format.
    pub async fn export(&self, path: &str, format: ExportFormat) -> ClientResult<String> {
        let request = ExportRequest {
            path: path.to_string(),
            format: Some(format),
        };

        let content: NotebookContent = self
            .client
            .query(Method::GET, "/workspace/export", API_VERSION, &request)
            .await?;

        Ok(content.content)
    }

    /// Create `path` and any missing parent folders.
    ///
    /// Calls are serialized process-wide, so at most one is in flight.
    pub async fn mkdirs(&self, path: &str) -> ClientResult<()> {
        let _guard = MKDIRS_LOCK.lock().await;

        self.client
            .perform_query(
                Method::POST,
                "/workspace/mkdirs",
                API_VERSION,
                &PathRequest::new(path),
            )
            .await?;

        tracing::info!(path, "created workspace folder");
        Ok(())
    }

    /// List objects under `path`.
    ///
    /// Without `recursive`, returns the direct children exactly as the service
    /// reports them. With `recursive`, walks the tree depth-first in listing
    /// order and returns only notebooks; directories are descended into and
    /// every other object type is skipped. The first failed call aborts the
    /// walk.
    pub async fn list(
        &self,
        path: &str,
        recursive: bool,
    ) -> ClientResult<Vec<WorkspaceObjectStatus>> {
        if !recursive {
            return self.list_level(path).await;
        }

        let mut notebooks = Vec::new();
        self.collect_notebooks(path, &mut notebooks)
            .instrument(tracing::debug_span!("list_recursive", path))
            .await?;
        tracing::debug!(path, count = notebooks.len(), "recursive listing complete");
        Ok(notebooks)
    }

    /// Delete the object at `path`; `recursive` is required for non-empty folders.
    pub async fn delete(&self, path: &str, recursive: bool) -> ClientResult<()> {
        let request = NotebookDeleteRequest {
            path: path.to_string(),
            recursive,
        };

        self.client
            .perform_query(Method::POST, "/workspace/delete", API_VERSION, &request)
            .await?;

        tracing::info!(path, recursive, "deleted workspace object");
        Ok(())
    }

    fn collect_notebooks<'b>(
        &'b self,
        path: &'b str,
        out: &'b mut Vec<WorkspaceObjectStatus>,
    ) -> BoxFuture<'b, ClientResult<()>> {
        async move {
            for object in self.list_level(path).await? {
                if object.is_notebook() {
                    out.push(object);
                } else if object.is_directory() {
                    self.collect_notebooks(&object.path, out).await?;
                }
            }
            Ok(())
        }
        .boxed()
    }

    async fn list_level(&self, path: &str) -> ClientResult<Vec<WorkspaceObjectStatus>> {
        tracing::debug!(path, "listing workspace folder");

        let response: ListResponse = self
            .client
            .query(
                Method::GET,
                "/workspace/list",
                API_VERSION,
                &PathRequest::new(path),
            )
            .await?;

        Ok(response.objects)
    }
}
