//! Transfer orchestration: serialize, flatten, invoke, translate.
//!
//! [`TransferService`] is a pass-through-and-transform layer. It owns no
//! state beyond the client handle and performs no retries; every failure
//! from the collaborator or local serialization propagates once, already
//! translated into [`TransferError`](crate::error::TransferError).

use std::{fmt, sync::Arc};

use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::{
    aggregate,
    client::{TransferApi, TransferOperation},
    error::Result,
    flatten::flatten,
    model::{FundingAndPaymentRequest, PaymentRequest},
};

/// Orchestrates merchant-transfer operations over a [`TransferApi`].
///
/// Cloning is cheap (one `Arc`), and the service is safe to share across
/// concurrent requests: all state lives on the remote side.
#[derive(Clone)]
pub struct TransferService {
    client: Arc<dyn TransferApi>,
}

impl fmt::Debug for TransferService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferService").finish_non_exhaustive()
    }
}

impl TransferService {
    /// Wraps a remote client.
    #[must_use]
    pub fn new(client: Arc<dyn TransferApi>) -> Self {
        Self { client }
    }

    /// Creates a transfer that secures funds from the sender and pushes
    /// them to the merchant in one transaction pair.
    ///
    /// The request serializes to its canonical JSON form (snake_case, nulls
    /// omitted) and flattens into the remote parameter format before the
    /// call. Not idempotent: reusing a transfer reference surfaces the
    /// remote duplicate-resource error.
    ///
    /// # Errors
    ///
    /// Remote rejections surface as [`TransferError::Api`]; transport and
    /// serialization failures as their local variants.
    ///
    /// [`TransferError::Api`]: crate::error::TransferError::Api
    #[instrument(skip_all)]
    pub async fn create_funding_and_payment(
        &self,
        request: &FundingAndPaymentRequest,
    ) -> Result<Value> {
        let canonical = serde_json::to_value(request)?;
        self.create(TransferOperation::FundingAndPayment, &canonical).await
    }

    /// Creates a payment-only transfer. Same flow and failure semantics as
    /// [`Self::create_funding_and_payment`].
    #[instrument(skip_all)]
    pub async fn create_payment(&self, request: &PaymentRequest) -> Result<Value> {
        let canonical = serde_json::to_value(request)?;
        self.create(TransferOperation::Payment, &canonical).await
    }

    async fn create(&self, operation: TransferOperation, canonical: &Value) -> Result<Value> {
        let params = flatten(canonical);
        inspect(self.client.create(operation, &params).await, "create")
    }

    /// Retrieves the transfer with the given id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, partner_id: &str, transfer_id: &str) -> Result<Value> {
        inspect(self.client.read_by_id(partner_id, transfer_id).await, "read by id")
    }

    /// Retrieves the transfer with the given caller-supplied reference.
    #[instrument(skip(self))]
    pub async fn get_by_ref(&self, partner_id: &str, reference: &str) -> Result<Value> {
        inspect(self.client.read_by_reference(partner_id, reference).await, "read by reference")
    }

    /// Fetches the primary reference, then each additional reference in
    /// order, merging every single-item result into the primary payload.
    ///
    /// Lookups run sequentially; output order matches `additional_refs`.
    /// The first failure aborts the whole aggregation — no partial payload
    /// is ever returned.
    ///
    /// # Errors
    ///
    /// Any lookup failure propagates as-is; payloads that lack the list
    /// shape surface as
    /// [`TransferError::InvalidResponse`](crate::error::TransferError::InvalidResponse).
    #[instrument(skip(self, additional_refs), fields(additional = additional_refs.len()))]
    pub async fn get_payment_list(
        &self,
        partner_id: &str,
        primary_ref: &str,
        additional_refs: &[String],
    ) -> Result<Value> {
        let mut combined = self.get_by_ref(partner_id, primary_ref).await?;

        for reference in additional_refs {
            let response = self.get_by_ref(partner_id, reference).await?;
            let transfer = aggregate::single_transfer(&response)?;
            aggregate::append_transfer(&mut combined, transfer)?;
        }

        Ok(combined)
    }
}

fn inspect(result: Result<Value>, action: &str) -> Result<Value> {
    match &result {
        Ok(value) => debug!(result = %value, "remote {action} succeeded"),
        Err(err) => error!(error = %err, "remote {action} failed"),
    }
    result
}
