/*
[INPUT]:  Caller-supplied filters, identifiers and checkout details
[OUTPUT]: Request records for the Banks and Transactions resources
[POS]:    Data layer - request parameters
[UPDATE]: When an endpoint gains a parameter
*/

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::enums::{Channel, TransactionStatus};

pub const DEFAULT_PER_PAGE: u32 = 50;
pub const MAX_PER_PAGE: u32 = 100;
pub const DEFAULT_CURRENCY: &str = "NGN";

/// Filters for `GET /bank`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBanksRequest {
    /// e.g. "nigeria", "ghana", "south africa"
    pub country: Option<String>,
    pub use_cursor: bool,
    /// 1..=100
    pub per_page: u32,
}

impl Default for ListBanksRequest {
    fn default() -> Self {
        Self {
            country: None,
            use_cursor: false,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveAccountRequest {
    pub account_number: String,
    pub bank_code: String,
}

impl ResolveAccountRequest {
    pub fn new(account_number: impl Into<String>, bank_code: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            bank_code: bank_code.into(),
        }
    }
}

/// Body of `POST /transaction/initialize`
///
/// `amount` is in the currency subunit. Unset optional fields are left out of
/// the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InitializeTransactionRequest {
    pub amount: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<u32>,
}

impl InitializeTransactionRequest {
    pub fn new(email: impl Into<String>, amount: i64) -> Self {
        Self {
            amount,
            email: email.into(),
            reference: None,
            currency: DEFAULT_CURRENCY.to_string(),
            callback_url: None,
            channels: None,
            metadata: None,
            split_code: None,
            customer: None,
            plan: None,
            invoice_limit: None,
        }
    }
}

/// Filters for `GET /transaction`; defaults are not sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTransactionsRequest {
    pub per_page: u32,
    pub page: u32,
    /// Customer id
    pub customer: Option<String>,
    pub status: Option<TransactionStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub amount: Option<i64>,
}

impl Default for ListTransactionsRequest {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: 1,
            customer: None,
            status: None,
            from: None,
            to: None,
            amount: None,
        }
    }
}
