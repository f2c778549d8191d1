//! REST façade for merchant-transfer operations.
//!
//! Thin HTTP layer over [`transfer_bridge::TransferService`]: routing,
//! request extraction and error rendering live here; everything else is the
//! bridge's job.

#![warn(missing_docs)]

pub mod observability;
pub mod routes;

pub use routes::{AppState, build_router};
