/*
[INPUT]:  The `data` payloads of bank and transaction responses
[OUTPUT]: Typed Rust structs for banks, accounts and transactions
[POS]:    Data layer - resource records
[UPDATE]: When Paystack adds fields worth surfacing
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TransactionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub code: String,
    #[serde(default)]
    pub longcode: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub pay_with_bank: bool,
    #[serde(default)]
    pub pay_with_bank_transfer: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "type", default)]
    pub bank_type: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAccount {
    pub account_number: String,
    pub account_name: String,
    pub bank_id: u64,
}

/// Checkout handle returned by transaction initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedTransaction {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

/// Amounts are in the currency subunit (kobo, pesewas, cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    #[serde(default)]
    pub domain: String,
    pub status: TransactionStatus,
    pub reference: String,
    #[serde(default)]
    pub receipt_number: Option<String>,
    pub amount: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub gateway_response: Option<String>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    // Paystack sends an object, an empty string or 0 here
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub fees: Option<i64>,
    #[serde(default)]
    pub customer: Option<TransactionCustomer>,
    #[serde(default)]
    pub authorization: Option<TransactionAuthorization>,
    #[serde(default)]
    pub plan: Option<TransactionPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCustomer {
    pub id: u64,
    #[serde(default)]
    pub customer_code: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Reusable card/bank authorization attached to a transaction
///
/// Abandoned transactions come back with `{}`, so every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAuthorization {
    pub authorization_code: Option<String>,
    pub bin: Option<String>,
    pub last4: Option<String>,
    pub exp_month: Option<String>,
    pub exp_year: Option<String>,
    pub channel: Option<String>,
    pub card_type: Option<String>,
    pub bank: Option<String>,
    pub country_code: Option<String>,
    pub brand: Option<String>,
    pub reusable: bool,
    pub signature: Option<String>,
    pub account_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionPlan {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub plan_code: Option<String>,
    pub description: Option<String>,
    pub amount: Option<i64>,
    pub interval: Option<String>,
    pub currency: Option<String>,
}
