//! Creates a sandbox funding-and-payment transfer and prints the result.
//!
//! ```sh
//! CONSUMER_KEY=uLXKmWfJ… cargo run --example create_transfer
//! ```

use std::sync::Arc;

use transfer_bridge::{
    HttpTransferClient, TransferService,
    config::{ApiConfig, Environment},
    model::{
        FundingAndPaymentRequest, MerchantTransfer, Person, TransferAmount, TransferRecipient,
        TransferSender,
    },
};

#[tokio::main]
async fn main() -> transfer_bridge::Result<()> {
    let config = ApiConfig {
        environment: Environment::Sandbox,
        consumer_key: std::env::var("CONSUMER_KEY").unwrap_or_else(|_| "demo-key".to_owned()),
        debug: true,
        base_url: None,
    };

    let client = Arc::new(HttpTransferClient::new(&config)?);
    let service = TransferService::new(client);

    let request = FundingAndPaymentRequest {
        partner_id: Some("ptnr_BEeCrYJHh2BXTXPy_PEtp-8DBOo".to_owned()),
        merchant_transfer: Some(MerchantTransfer {
            transfer_reference: Some("4002731033061103775624344507490434951999".to_owned()),
            payment_type: Some("P2M".to_owned()),
            payment_origination_country: Some("USA".to_owned()),
            transfer_amount: Some(TransferAmount {
                value: Some("100.00".to_owned()),
                currency: Some("USD".to_owned()),
            }),
            sender_account_uri: Some("pan:5013040000000018;exp=2027-08;cvc=123".to_owned()),
            sender: Some(TransferSender {
                person: Person {
                    first_name: Some("John".to_owned()),
                    last_name: Some("Jones".to_owned()),
                    ..Person::default()
                },
                token_cryptogram: None,
            }),
            recipient_account_uri: Some("pan:5013040000000028".to_owned()),
            recipient: Some(TransferRecipient {
                person: Person { last_name: Some("Smith".to_owned()), ..Person::default() },
                token_cryptogram: None,
                merchant_category_code: Some("3000".to_owned()),
            }),
            ..MerchantTransfer::default()
        }),
    };

    match service.create_funding_and_payment(&request).await {
        Ok(result) => println!("{result}"),
        Err(err) => {
            let payload = err.to_response();
            eprintln!("transfer failed ({}): {}", err.http_status(), payload.message);
        }
    }

    Ok(())
}
