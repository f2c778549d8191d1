//! Bridge configuration.
//!
//! TOML-deserializable settings for the remote API client, the HTTP server
//! and the list-aggregation fixture. Loaded once at startup and validated
//! before any client is built.
//!
//! ```toml
//! [api]
//! environment = "sandbox"
//! consumer_key = "uLXKmWfJ…"
//! debug = true
//!
//! [server]
//! listen = "0.0.0.0:8080"
//!
//! [aggregation]
//! partner_id = "ptnr_BEeCrYJHh2BXTXPy_PEtp-8DBOo"
//! primary_ref = "4002731033061103775624344507490434951000"
//! additional_refs = ["4002731033061103775624344507490434951001"]
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::{Result, TransferError};

/// Root configuration for the bridge and server.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Remote API client settings.
    pub api: ApiConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Reference set served by the aggregated-list endpoint.
    #[serde(default)]
    pub aggregation: Option<AggregationConfig>,
}

impl BridgeConfig {
    /// Reads and parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Config`] if the file cannot be read or does
    /// not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TransferError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&raw)
            .map_err(|e| TransferError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Config`] if the consumer key is empty, a
    /// base-URL override is not HTTPS, or the aggregation section names no
    /// additional references.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        if let Some(ref aggregation) = self.aggregation {
            aggregation.validate()?;
        }
        Ok(())
    }
}

/// Remote API client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Which remote environment to talk to.
    #[serde(default)]
    pub environment: Environment,

    /// Consumer key identifying this integration to the remote API.
    pub consumer_key: String,

    /// Log remote request parameters and response bodies at debug level.
    #[serde(default)]
    pub debug: bool,

    /// Base URL override; when set it replaces the environment's URL.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ApiConfig {
    fn validate(&self) -> Result<()> {
        if self.consumer_key.trim().is_empty() {
            return Err(TransferError::Config("api.consumer_key must not be empty".to_owned()));
        }

        if let Some(ref base_url) = self.base_url {
            let url = Url::parse(base_url).map_err(|e| {
                TransferError::Config(format!("invalid api.base_url '{base_url}': {e}"))
            })?;
            if url.scheme() != "https" {
                return Err(TransferError::Config(format!(
                    "api.base_url must use HTTPS, got: {}",
                    url.scheme()
                )));
            }
        }

        Ok(())
    }

    /// The base URL the client should use: the override when present,
    /// otherwise the environment's URL.
    #[must_use]
    pub fn resolved_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_else(|| self.environment.base_url())
    }
}

/// Remote API environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Test environment with synthetic partner accounts.
    Sandbox,
    /// Live environment.
    #[default]
    Production,
}

impl Environment {
    /// Base URL of the merchant-transfer API in this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox.api.transfer.network/send/v1",
            Self::Production => "https://api.transfer.network/send/v1",
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_owned()
}

/// Reference set for the aggregated payment-list endpoint.
///
/// The endpoint takes no request parameters; which references it merges is
/// an operator decision, so the set lives here rather than in code.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregationConfig {
    /// Partner account all lookups run under.
    pub partner_id: String,
    /// Reference whose result seeds the combined payload.
    pub primary_ref: String,
    /// References merged into the primary result, in order.
    pub additional_refs: Vec<String>,
}

impl AggregationConfig {
    fn validate(&self) -> Result<()> {
        if self.partner_id.trim().is_empty() {
            return Err(TransferError::Config(
                "aggregation.partner_id must not be empty".to_owned(),
            ));
        }
        if self.primary_ref.trim().is_empty() {
            return Err(TransferError::Config(
                "aggregation.primary_ref must not be empty".to_owned(),
            ));
        }
        if self.additional_refs.is_empty() {
            return Err(TransferError::Config(
                "aggregation.additional_refs must name at least one reference".to_owned(),
            ));
        }
        Ok(())
    }
}
