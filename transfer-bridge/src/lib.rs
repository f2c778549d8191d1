//! Transfer Bridge: REST façade plumbing for merchant-transfer payments.
//!
//! This library forwards merchant-transfer requests to a payment network's
//! remote API. The network accepts parameters as a flat `(path, value)`
//! list, so the bridge's job is narrow: flatten nested request JSON into
//! that format, forward the call, and translate remote failures into one
//! uniform error payload.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   REST caller    │
//! └────────┬─────────┘
//!          │ JSON over HTTP (transfer-server)
//! ┌────────▼─────────────────────────────────────┐
//! │        Transfer Bridge (this crate)          │
//! │  ┌───────────────┐     ┌──────────────────┐  │
//! │  │ TransferService│────│  PathFlattener   │  │
//! │  │ (orchestrate,  │     │ (nested JSON →  │  │
//! │  │  aggregate)    │     │  flat params)   │  │
//! │  └───────┬───────┘     └──────────────────┘  │
//! └──────────┼───────────────────────────────────┘
//!            │ TransferApi (trait seam)
//! ┌──────────▼───────┐
//! │  Payment network │  remote create / read operations
//! └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use transfer_bridge::{
//!     config::{ApiConfig, Environment},
//!     HttpTransferClient, TransferService,
//! };
//!
//! # async fn example() -> transfer_bridge::Result<()> {
//! let config = ApiConfig {
//!     environment: Environment::Sandbox,
//!     consumer_key: "uLXKmWfJ…".to_owned(),
//!     debug: false,
//!     base_url: None,
//! };
//!
//! let client = Arc::new(HttpTransferClient::new(&config)?);
//! let service = TransferService::new(client);
//!
//! let transfer = service.get_by_ref("ptnr_123", "4002731033061103775624").await?;
//! println!("{transfer}");
//! # Ok(())
//! # }
//! ```
//!
//! # Module organization
//!
//! - [`flatten`]: nested JSON → ordered flat parameter list
//! - [`model`]: merchant-transfer request shapes
//! - [`client`]: the remote collaborator seam and its reqwest implementation
//! - [`service`]: orchestration (serialize → flatten → invoke → translate)
//! - [`aggregate`]: merge algebra for the aggregated list lookup
//! - [`error`]: failure taxonomy and the uniform error payload
//! - [`config`]: TOML configuration for client, server and aggregation

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod flatten;
pub mod model;
pub mod service;

pub use client::{HttpTransferClient, TransferApi, TransferOperation};
pub use config::BridgeConfig;
pub use error::{ApiError, ErrorResponse, Result, TransferError};
pub use service::TransferService;
