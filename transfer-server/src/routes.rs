//! HTTP routing and handlers.
//!
//! Each handler extracts request data, delegates to the
//! [`TransferService`] and renders the result. Failures become the uniform
//! `{source, reason_code, message}` payload with the status the error
//! translation resolved.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::Value;
use transfer_bridge::{
    TransferError, TransferService,
    config::AggregationConfig,
    model::{FundingAndPaymentRequest, PaymentRequest},
};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bridge service all operations delegate to.
    pub service: TransferService,
    /// Reference set behind the aggregated-list endpoint, when configured.
    pub aggregation: Option<AggregationConfig>,
}

/// Builds the application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/merchantTransferFundingAndPayment", post(funding_and_payment))
        .route("/merchantTransferPayment", post(payment))
        .route("/byId", get(by_id))
        .route("/byRef", get(by_ref))
        .route("/getMerchantTransferPaymentList", get(payment_list))
        .with_state(state)
}

/// Bridge failure rendered as an HTTP response.
struct ErrorReply(TransferError);

impl From<TransferError> for ErrorReply {
    fn from(err: TransferError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self.0.to_response())).into_response()
    }
}

async fn funding_and_payment(
    State(state): State<AppState>,
    Json(request): Json<FundingAndPaymentRequest>,
) -> Result<Json<Value>, ErrorReply> {
    Ok(Json(state.service.create_funding_and_payment(&request).await?))
}

async fn payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<Value>, ErrorReply> {
    Ok(Json(state.service.create_payment(&request).await?))
}

#[derive(Debug, Deserialize)]
struct ByIdParams {
    #[serde(rename = "partnerId")]
    partner_id: String,
    #[serde(rename = "transferId")]
    transfer_id: String,
}

async fn by_id(
    State(state): State<AppState>,
    Query(params): Query<ByIdParams>,
) -> Result<Json<Value>, ErrorReply> {
    Ok(Json(state.service.get_by_id(&params.partner_id, &params.transfer_id).await?))
}

#[derive(Debug, Deserialize)]
struct ByRefParams {
    #[serde(rename = "partnerId")]
    partner_id: String,
    #[serde(rename = "ref")]
    reference: String,
}

async fn by_ref(
    State(state): State<AppState>,
    Query(params): Query<ByRefParams>,
) -> Result<Json<Value>, ErrorReply> {
    Ok(Json(state.service.get_by_ref(&params.partner_id, &params.reference).await?))
}

async fn payment_list(State(state): State<AppState>) -> Result<Json<Value>, ErrorReply> {
    let fixture = state.aggregation.as_ref().ok_or_else(|| {
        TransferError::Config("aggregation references are not configured".to_owned())
    })?;

    let combined = state
        .service
        .get_payment_list(&fixture.partner_id, &fixture.primary_ref, &fixture.additional_refs)
        .await?;
    Ok(Json(combined))
}
