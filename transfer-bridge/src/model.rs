//! Request shapes for the merchant-transfer operations.
//!
//! Wire naming is snake_case with one legacy exception: the top-level
//! partner id travels as `partnerId`. Absent fields are omitted from
//! output, which keeps them out of the flattened parameter list as well.
//! Sender/recipient variants share a [`Person`] base embedded by value;
//! structural reuse, not a type hierarchy.

#![allow(missing_docs, reason = "field names mirror the wire format one-to-one")]

use serde::{Deserialize, Serialize};

/// Request body for the funding-and-payment create operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundingAndPaymentRequest {
    /// Partner account of the API caller.
    #[serde(rename = "partnerId", skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    /// The transfer to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_transfer: Option<MerchantTransfer>,
}

/// Funding-and-payment transfer: secures funds from the sender account and
/// pushes them to the merchant account in one transaction pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantTransfer {
    /// Caller-supplied unique reference; uniqueness is enforced remotely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_origination_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_local_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_amount: Option<TransferAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_account_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<TransferSender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_account_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<TransferRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation_data: Option<ReconciliationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_assigned_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_transit_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
}

/// Request body for the payment-only create operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Partner account of the API caller.
    #[serde(rename = "partnerId", skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    /// The transfer to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_payment_transfer: Option<MerchantPaymentTransfer>,
}

/// Payment-only transfer: pushes funds to the merchant account, funding is
/// settled out of band.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantPaymentTransfer {
    /// Caller-supplied unique reference; uniqueness is enforced remotely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_account_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<PaymentSender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_account_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<PaymentRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_origination_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation_data: Option<ReconciliationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_local_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_transaction_reference: Option<FundingTransactionReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_assigned_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_transit_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_cryptogram: Option<TokenCryptogram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_value: Option<String>,
}

/// Monetary amount as the remote API expects it: opaque strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Shared identity fields of senders and recipients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_value: Option<String>,
}

/// Sender of a funding-and-payment transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferSender {
    #[serde(flatten)]
    pub person: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_cryptogram: Option<TokenCryptogram>,
}

/// Recipient of a funding-and-payment transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferRecipient {
    #[serde(flatten)]
    pub person: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_cryptogram: Option<TokenCryptogram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
}

/// Sender of a payment-only transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentSender {
    #[serde(flatten)]
    pub person: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

/// Recipient of a payment-only transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRecipient {
    #[serde(flatten)]
    pub person: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
}

/// Postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_subdivision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Free-form reconciliation fields carried through to settlement reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconciliationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field: Option<Vec<CustomField>>,
}

/// One reconciliation name/value pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Card acceptor identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Participant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_acceptor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_acceptor_name: Option<String>,
}

/// Reference to the out-of-band funding transaction of a payment-only
/// transfer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundingTransactionReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Network token cryptogram accompanying tokenized account URIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenCryptogram {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cryptogram_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_sequence_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn partner_id_keeps_its_legacy_wire_name() {
        let request = FundingAndPaymentRequest {
            partner_id: Some("ptnr_123".to_owned()),
            merchant_transfer: None,
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"partnerId": "ptnr_123"}));
    }

    #[test]
    fn person_base_flattens_into_the_variant() {
        let sender = PaymentSender {
            person: Person {
                first_name: Some("John".to_owned()),
                last_name: Some("Jones".to_owned()),
                ..Person::default()
            },
            date_of_birth: Some("1984-03-12".to_owned()),
        };
        assert_eq!(
            serde_json::to_value(&sender).unwrap(),
            json!({"first_name": "John", "last_name": "Jones", "date_of_birth": "1984-03-12"})
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let transfer = MerchantTransfer {
            transfer_reference: Some("ref-1".to_owned()),
            ..MerchantTransfer::default()
        };
        assert_eq!(
            serde_json::to_value(&transfer).unwrap(),
            json!({"transfer_reference": "ref-1"})
        );
    }

    #[test]
    fn token_cryptogram_type_uses_the_bare_wire_name() {
        let cryptogram = TokenCryptogram {
            cryptogram_type: Some("DSRP".to_owned()),
            value: Some("AAECAw==".to_owned()),
            pan_sequence_number: None,
        };
        assert_eq!(
            serde_json::to_value(&cryptogram).unwrap(),
            json!({"type": "DSRP", "value": "AAECAw=="})
        );
    }

    #[test]
    fn full_payment_request_round_trips() {
        let body = json!({
            "partnerId": "ptnr_123",
            "merchant_payment_transfer": {
                "transfer_reference": "40027310330611037756",
                "payment_type": "P2M",
                "amount": "100.00",
                "currency": "USD",
                "sender": {
                    "first_name": "John",
                    "address": {"city": "Arlington", "country": "USA"},
                    "date_of_birth": "1984-03-12"
                },
                "recipient": {
                    "last_name": "Smith",
                    "merchant_category_code": "3000"
                },
                "reconciliation_data": {
                    "custom_field": [{"name": "ABC", "value": "123"}]
                }
            }
        });

        let request: PaymentRequest = serde_json::from_value(body.clone()).unwrap();
        let transfer = request.merchant_payment_transfer.as_ref().unwrap();
        assert_eq!(transfer.amount.as_deref(), Some("100.00"));
        assert_eq!(
            transfer.sender.as_ref().unwrap().person.first_name.as_deref(),
            Some("John")
        );
        assert_eq!(
            transfer.recipient.as_ref().unwrap().merchant_category_code.as_deref(),
            Some("3000")
        );

        // Re-serializing reproduces the wire shape exactly.
        assert_eq!(serde_json::to_value(&request).unwrap(), body);
    }
}
