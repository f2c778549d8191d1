//! Remote collaborator boundary: the merchant-transfer API client.
//!
//! [`TransferApi`] is the seam the rest of the crate talks through — the
//! service layer never sees HTTP. [`HttpTransferClient`] is the production
//! implementation over reqwest; tests substitute an in-memory fake.
//!
//! Request signing beyond the consumer-key credential is owned by the
//! remote gateway and is not reproduced here.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ApiConfig,
    error::{ApiError, ErrorResponse, Result},
    flatten::FlatParams,
};

/// Maximum idle connections kept per host.
const POOL_MAX_IDLE_PER_HOST: usize = 100;
/// Total per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which create endpoint a transfer goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOperation {
    /// Funding transaction plus payment transaction in one call.
    FundingAndPayment,
    /// Payment transaction only.
    Payment,
}

impl TransferOperation {
    /// Endpoint path relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::FundingAndPayment => "/transfers/funding-and-payment",
            Self::Payment => "/transfers/payment",
        }
    }
}

/// Remote merchant-transfer operations.
///
/// Implementors own authentication and transport. All methods are
/// blocking-by-await network calls; no retries happen behind this trait.
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// Creates a transfer from flattened request parameters.
    ///
    /// Not idempotent: re-submitting a transfer reference fails remotely
    /// with a duplicate-resource error.
    async fn create(&self, operation: TransferOperation, params: &FlatParams) -> Result<Value>;

    /// Reads the transfer with the given id.
    async fn read_by_id(&self, partner_id: &str, transfer_id: &str) -> Result<Value>;

    /// Reads the transfer with the given caller-supplied reference.
    async fn read_by_reference(&self, partner_id: &str, reference: &str) -> Result<Value>;
}

/// reqwest-backed [`TransferApi`] implementation.
pub struct HttpTransferClient {
    client: Client,
    base_url: String,
    consumer_key: String,
    log_bodies: bool,
}

impl fmt::Debug for HttpTransferClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransferClient")
            .field("base_url", &self.base_url)
            .field("consumer_key", &"<redacted>")
            .field("log_bodies", &self.log_bodies)
            .finish_non_exhaustive()
    }
}

impl HttpTransferClient {
    /// Builds a client for the configured environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.resolved_base_url().trim_end_matches('/').to_owned(),
            consumer_key: config.consumer_key.clone(),
            log_bodies: config.debug,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            let value: Value = response.json().await?;
            if self.log_bodies {
                debug!(body = %value, "remote response");
            }
            return Ok(value);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(decode_api_error(status.as_u16(), &body).into())
    }
}

#[async_trait]
impl TransferApi for HttpTransferClient {
    async fn create(&self, operation: TransferOperation, params: &FlatParams) -> Result<Value> {
        if self.log_bodies {
            debug!(operation = ?operation, params = ?params, "remote create");
        }
        let response = self
            .client
            .post(self.endpoint(operation.path()))
            .bearer_auth(&self.consumer_key)
            .json(&flat_body(params))
            .send()
            .await?;
        self.decode(response).await
    }

    async fn read_by_id(&self, partner_id: &str, transfer_id: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.endpoint("/transfers/by-id"))
            .bearer_auth(&self.consumer_key)
            .query(&[("partnerId", partner_id), ("transferId", transfer_id)])
            .send()
            .await?;
        self.decode(response).await
    }

    async fn read_by_reference(&self, partner_id: &str, reference: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.endpoint("/transfers/by-reference"))
            .bearer_auth(&self.consumer_key)
            .query(&[("partnerId", partner_id), ("ref", reference)])
            .send()
            .await?;
        self.decode(response).await
    }
}

/// Assembles the flat request body: one JSON object whose keys are the
/// flattened paths, in their original order.
fn flat_body(params: &FlatParams) -> Value {
    let mut fields = serde_json::Map::with_capacity(params.len());
    for (path, value) in params {
        fields.insert(path.clone(), Value::String(value.clone()));
    }
    Value::Object(fields)
}

/// Decodes a non-success response body into an [`ApiError`].
///
/// The remote reports failures as `{source, reason_code, message}`; bodies
/// that do not match keep their raw text as the message so nothing is
/// swallowed.
fn decode_api_error(http_status: u16, body: &[u8]) -> ApiError {
    if let Ok(response) = serde_json::from_slice::<ErrorResponse>(body) {
        return ApiError {
            source: response.source,
            reason_code: response.reason_code,
            message: response.message,
            http_status,
        };
    }

    let text = String::from_utf8_lossy(body);
    let message = if text.trim().is_empty() {
        format!("remote call failed with status {http_status}")
    } else {
        text.into_owned()
    };
    ApiError { source: None, reason_code: None, message, http_status }
}
