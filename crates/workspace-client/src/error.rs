//! Error types for the workspace client.

use serde::Deserialize;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error code the service reports for a missing object.
pub const RESOURCE_DOES_NOT_EXIST: &str = "RESOURCE_DOES_NOT_EXIST";

/// Errors that can occur while talking to the workspace API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure, timeout, or unreadable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error ({status}){}: {message}", code_suffix(.error_code))]
    Api {
        status: u16,
        error_code: Option<String>,
        message: String,
    },

    /// A success response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured header value could not be encoded.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" {}", c)).unwrap_or_default()
}

impl ClientError {
    /// Remote error code, if the service sent one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Api { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the remote object does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404) || self.error_code() == Some(RESOURCE_DOES_NOT_EXIST)
    }

    /// Build an API error from a failed response body.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            error_code: Option<String>,
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            error: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self::Api {
                status,
                error_code: parsed.error_code,
                message: parsed
                    .message
                    .or(parsed.error)
                    .unwrap_or_else(|| body.to_string()),
            },
            Err(_) => Self::Api {
                status,
                error_code: None,
                message: body.to_string(),
            },
        }
    }
}
