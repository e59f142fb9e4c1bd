/*
[INPUT]:  Mock server address
[OUTPUT]: Pre-wired clients and Paystack JSON fixtures
[POS]:    Test infrastructure - shared by the integration suites
[UPDATE]: When fixtures or client wiring change
*/

//! Common test utilities for paystack-adapter tests

use paystack_adapter::{PaystackClient, PaystackConfig, PaystackSettings};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_SECRET_KEY: &str = "sk_test_4b1f0c9a7e2d3c5b6a8f";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> PaystackClient {
    let config = PaystackConfig::new(PaystackSettings {
        secret_key: TEST_SECRET_KEY.to_string(),
        base_url: server.uri(),
        enable_logging: true,
        ..PaystackSettings::default()
    })
    .expect("valid test config");
    PaystackClient::new(config).expect("client init")
}

/// Success envelope around `data`
#[allow(dead_code)]
pub fn envelope(message: &str, data: Value) -> Value {
    json!({
        "status": true,
        "message": message,
        "data": data,
    })
}

/// A successful card transaction as returned by verify/fetch
#[allow(dead_code)]
pub fn transaction_json(id: u64, reference: &str) -> Value {
    json!({
        "id": id,
        "domain": "test",
        "status": "success",
        "reference": reference,
        "receipt_number": null,
        "amount": 20000,
        "message": null,
        "gateway_response": "Successful",
        "paid_at": "2024-03-04T10:15:30.000Z",
        "created_at": "2024-03-04T10:14:02.000Z",
        "channel": "card",
        "currency": "NGN",
        "ip_address": "102.89.1.10",
        "metadata": {"cart_id": 398},
        "fees": 400,
        "customer": {
            "id": 181873746,
            "first_name": "Ada",
            "last_name": "Obi",
            "email": "customer@email.com",
            "customer_code": "CUS_1rkzaqsv4rrhqo6",
            "phone": null
        },
        "authorization": {
            "authorization_code": "AUTH_pmx3mgawyd",
            "bin": "408408",
            "last4": "4081",
            "exp_month": "12",
            "exp_year": "2030",
            "channel": "card",
            "card_type": "visa ",
            "bank": "TEST BANK",
            "country_code": "NG",
            "brand": "visa",
            "reusable": true,
            "signature": "SIG_yEXu7dLBeqG0kU7g95Ke",
            "account_name": null
        },
        "plan": null
    })
}
