//! Shared HTTP client for the versioned workspace REST API.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::notebooks::NotebooksApi;

/// API version used by every workspace endpoint.
pub const API_VERSION: &str = "2.0";

/// Header carrying a per-request id, for correlating client and server logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client bound to one workspace host.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    host: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// The bearer token and user agent become default headers, so every
    /// request made through this client carries them.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ClientError::InvalidHeader(format!("token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ClientError::InvalidHeader(format!("user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            host: config.host.clone(),
        })
    }

    /// The normalized workspace URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full URL of an endpoint: `{host}/api/{version}{path}`.
    pub fn endpoint_url(&self, path: &str, version: &str) -> String {
        format!("{}/api/{}{}", self.host, version, path)
    }

    /// Notebook and folder operations.
    pub fn notebooks(&self) -> NotebooksApi<'_> {
        NotebooksApi::new(self)
    }

    /// Issue one API call and return the raw success body.
    ///
    /// `GET` requests carry `body` as the query string; every other method
    /// sends it as JSON.
    pub async fn perform_query<B>(
        &self,
        method: Method,
        path: &str,
        version: &str,
        body: &B,
    ) -> ClientResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path, version);
        let request_id = Uuid::new_v4().to_string();

        let request = self
            .http
            .request(method.clone(), &url)
            .header(REQUEST_ID_HEADER, &request_id);
        let request = if method == Method::GET {
            request.query(body)
        } else {
            request.json(body)
        };

        tracing::debug!(%method, %url, %request_id, "sending workspace API request");

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            tracing::debug!(
                %request_id,
                status = status.as_u16(),
                len = bytes.len(),
                "received response"
            );
            Ok(bytes.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_response(status.as_u16(), &body);
            tracing::debug!(%request_id, status = status.as_u16(), error = %err, "request failed");
            Err(err)
        }
    }

    /// Issue one API call and decode the JSON response.
    pub async fn query<B, T>(
        &self,
        method: Method,
        path: &str,
        version: &str,
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.perform_query(method, path, version, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
