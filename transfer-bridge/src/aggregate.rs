//! Merge algebra for the aggregated payment-list lookup.
//!
//! A by-reference lookup answers with a single-item list payload:
//!
//! ```json
//! {
//!   "merchant_transfers": {
//!     "item_count": 1,
//!     "data": { "merchant_transfer": [ { … } ] }
//!   }
//! }
//! ```
//!
//! Aggregation folds additional lookup results into the first one: each
//! merge lifts the single record out of a lookup payload, bumps the running
//! `item_count` and appends the record to the combined `data` array. The
//! helpers here are pure so the algebra tests without a remote in sight;
//! the sequential fetch loop lives on
//! [`TransferService`](crate::service::TransferService).

use serde_json::Value;

use crate::error::{Result, TransferError};

/// JSON pointer to the first (and only) record of a by-reference lookup.
const SINGLE_TRANSFER_POINTER: &str = "/merchant_transfers/data/merchant_transfer/0";

/// Extracts the single transfer record from a by-reference lookup result.
///
/// # Errors
///
/// Returns [`TransferError::InvalidResponse`] if the payload carries no
/// record at `merchant_transfers.data.merchant_transfer[0]`.
pub fn single_transfer(response: &Value) -> Result<Value> {
    response.pointer(SINGLE_TRANSFER_POINTER).cloned().ok_or_else(|| {
        TransferError::InvalidResponse(
            "lookup result has no merchant_transfers.data.merchant_transfer entry".to_owned(),
        )
    })
}

/// Appends one transfer record to a combined list payload, incrementing its
/// `item_count`.
///
/// # Errors
///
/// Returns [`TransferError::InvalidResponse`] if the combined payload lacks
/// the `merchant_transfers` object, a numeric `item_count`, or the
/// `data.merchant_transfer` array.
pub fn append_transfer(combined: &mut Value, transfer: Value) -> Result<()> {
    let list = combined
        .pointer_mut("/merchant_transfers")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| missing("merchant_transfers object"))?;

    let item_count = list
        .get("item_count")
        .and_then(Value::as_u64)
        .ok_or_else(|| missing("numeric item_count"))?;
    list.insert("item_count".to_owned(), Value::from(item_count + 1));

    list.get_mut("data")
        .and_then(|data| data.get_mut("merchant_transfer"))
        .and_then(Value::as_array_mut)
        .ok_or_else(|| missing("data.merchant_transfer array"))?
        .push(transfer);

    Ok(())
}

fn missing(expected: &str) -> TransferError {
    TransferError::InvalidResponse(format!("combined payload is missing its {expected}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn list_payload(reference: &str) -> Value {
        json!({
            "merchant_transfers": {
                "partner_id": "ptnr_1",
                "item_count": 1,
                "data": {
                    "merchant_transfer": [{"transfer_reference": reference}]
                }
            }
        })
    }

    #[test]
    fn single_transfer_lifts_the_first_record() {
        let record = single_transfer(&list_payload("ref-7")).unwrap();
        assert_eq!(record, json!({"transfer_reference": "ref-7"}));
    }

    #[test]
    fn single_transfer_rejects_shapeless_payloads() {
        let err = single_transfer(&json!({"merchant_transfers": {}})).unwrap_err();
        assert!(err.to_string().contains("merchant_transfer"));
    }

    #[test]
    fn append_bumps_count_and_keeps_order() {
        let mut combined = list_payload("ref-0");
        append_transfer(&mut combined, json!({"transfer_reference": "ref-1"})).unwrap();
        append_transfer(&mut combined, json!({"transfer_reference": "ref-2"})).unwrap();

        assert_eq!(combined.pointer("/merchant_transfers/item_count"), Some(&json!(3)));
        let references: Vec<_> = combined
            .pointer("/merchant_transfers/data/merchant_transfer")
            .and_then(Value::as_array)
            .unwrap()
            .iter()
            .map(|record| record["transfer_reference"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(references, vec!["ref-0", "ref-1", "ref-2"]);
    }

    #[test]
    fn append_preserves_sibling_fields() {
        let mut combined = list_payload("ref-0");
        append_transfer(&mut combined, json!({"transfer_reference": "ref-1"})).unwrap();
        assert_eq!(
            combined.pointer("/merchant_transfers/partner_id"),
            Some(&json!("ptnr_1"))
        );
    }

    #[test]
    fn append_rejects_missing_item_count() {
        let mut combined = json!({
            "merchant_transfers": {
                "data": {"merchant_transfer": []}
            }
        });
        let err = append_transfer(&mut combined, json!({})).unwrap_err();
        assert!(err.to_string().contains("item_count"));
    }

    #[test]
    fn append_rejects_missing_data_array() {
        let mut combined = json!({"merchant_transfers": {"item_count": 1}});
        let err = append_transfer(&mut combined, json!({})).unwrap_err();
        assert!(err.to_string().contains("merchant_transfer array"));
    }
}
