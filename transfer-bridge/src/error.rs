//! Error types for the transfer bridge.
//!
//! Failures fall into two camps: errors reported by the payment network API
//! ([`ApiError`], carrying the offending field, a reason code and the remote
//! HTTP status) and local failures (transport, serialization, malformed
//! responses). Both are translated once, at the service boundary, into a
//! uniform [`ErrorResponse`] payload plus a concrete HTTP status.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, TransferError>;

/// Status substituted when a failure carries no usable classification.
const DEFAULT_HTTP_STATUS: u16 = 400;

/// Failure reported by the payment network API.
///
/// `source` names the offending request field (e.g. `transfer_reference`),
/// `reason_code` is the remote taxonomy (`RESOURCE_ERROR`, `RESOURCE_UNKNOWN`,
/// `INVALID_INPUT_LENGTH`, …) and `http_status` is the status the remote
/// service responded with. A status of `0` means the remote reported none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Request field the failure refers to, when the remote names one.
    pub source: Option<String>,
    /// Remote reason code, when the remote names one.
    pub reason_code: Option<String>,
    /// Human-readable failure description.
    pub message: String,
    /// HTTP status reported by the remote service, `0` when unset.
    pub http_status: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Display/Error by hand: thiserror reserves a field named `source` for the
// error cause, but here it is wire data naming the offending request field.
impl std::error::Error for ApiError {}

/// Errors that can occur while bridging to the payment network.
#[must_use = "errors should be handled or propagated"]
#[derive(Debug, Error)]
pub enum TransferError {
    /// The remote API rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP communication with the remote API failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote API answered with a shape the bridge cannot use.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// Configuration was rejected at load time.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TransferError {
    /// The HTTP status this failure should surface with.
    ///
    /// Remote-reported statuses pass through unchanged; local failures, and
    /// remote failures that reported no status, resolve to 400 so every
    /// error response carries a concrete status.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Api(api) if api.http_status != 0 => api.http_status,
            _ => DEFAULT_HTTP_STATUS,
        }
    }

    /// Translates this failure into the uniform error payload.
    ///
    /// Only remote-reported failures carry `source`/`reason_code`; local
    /// failures surface their description alone.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::Api(api) => ErrorResponse {
                source: api.source.clone(),
                reason_code: api.reason_code.clone(),
                message: api.message.clone(),
            },
            other => {
                ErrorResponse { source: None, reason_code: None, message: other.to_string() }
            }
        }
    }
}

/// Error payload on the wire: `{source, reason_code, message}`.
///
/// The remote API reports failures in this same shape, so the type also
/// decodes remote error bodies. Absent fields are omitted from output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Offending request field, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Remote reason code, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    /// Failure description.
    pub message: String,
}
