/*
[INPUT]:  Validated configuration or pre-built resource clients
[OUTPUT]: Single entry point exposing every resource group
[POS]:    Facade - composes Banks and Transactions clients
[UPDATE]: When adding a new resource group
*/

use crate::config::PaystackConfig;
use crate::http::{
    BanksApi, BanksClient, PaystackHttpClient, Result, TransactionsApi, TransactionsClient,
};

/// Entry point for the Paystack API
///
/// The resource clients are type parameters so callers can plug in their
/// own [`BanksApi`] / [`TransactionsApi`] implementations (e.g. fakes in
/// tests) while keeping the same facade.
#[derive(Debug, Clone)]
pub struct PaystackClient<B = BanksClient, T = TransactionsClient> {
    banks: B,
    transactions: T,
}

impl PaystackClient {
    /// Build the facade and its shared transport from `config`
    pub fn new(config: PaystackConfig) -> Result<Self> {
        let http = PaystackHttpClient::new(config)?;
        Ok(Self::from_parts(
            BanksClient::new(http.clone()),
            TransactionsClient::new(http),
        ))
    }

    /// Production client with default settings
    pub fn from_secret_key(secret_key: impl Into<String>) -> Result<Self> {
        Self::new(PaystackConfig::from_secret_key(secret_key)?)
    }
}

impl<B, T> PaystackClient<B, T>
where
    B: BanksApi,
    T: TransactionsApi,
{
    pub fn from_parts(banks: B, transactions: T) -> Self {
        Self {
            banks,
            transactions,
        }
    }

    pub fn banks(&self) -> &B {
        &self.banks
    }

    pub fn transactions(&self) -> &T {
        &self.transactions
    }
}
