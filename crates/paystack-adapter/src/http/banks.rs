/*
[INPUT]:  Bank listing filters and account resolution requests
[OUTPUT]: Bank lists and resolved account details
[POS]:    HTTP layer - Banks resource endpoints
[UPDATE]: When adding new bank endpoints or changing query parameters
*/

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::http::query::QueryString;
use crate::http::{PaystackError, PaystackHttpClient, Result};
use crate::types::{
    Bank, DEFAULT_PER_PAGE, ListBanksRequest, MAX_PER_PAGE, PaystackResponse,
    ResolveAccountRequest, ResolvedAccount,
};

/// Bank lookup operations
#[async_trait]
pub trait BanksApi: Send + Sync {
    /// List banks supported by Paystack
    ///
    /// GET /bank?country={country}&use_cursor={bool}&perPage={n}
    async fn list_banks(
        &self,
        request: &ListBanksRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Vec<Bank>>>;

    /// Resolve an account number to the account holder's name
    ///
    /// GET /bank/resolve?account_number={n}&bank_code={c}
    async fn resolve_account(
        &self,
        request: &ResolveAccountRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<ResolvedAccount>>;
}

#[derive(Debug, Clone)]
pub struct BanksClient {
    http: PaystackHttpClient,
}

impl BanksClient {
    pub fn new(http: PaystackHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl BanksApi for BanksClient {
    async fn list_banks(
        &self,
        request: &ListBanksRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Vec<Bank>>> {
        let endpoint = list_banks_endpoint(request)?;
        self.http.get(&endpoint, cancel).await
    }

    async fn resolve_account(
        &self,
        request: &ResolveAccountRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<ResolvedAccount>> {
        let endpoint = resolve_account_endpoint(request)?;
        self.http.get(&endpoint, cancel).await
    }
}

pub(crate) fn list_banks_endpoint(request: &ListBanksRequest) -> Result<String> {
    if !(1..=MAX_PER_PAGE).contains(&request.per_page) {
        return Err(PaystackError::invalid_argument(
            "per_page",
            "perPage must be between 1 and 100",
        ));
    }

    let mut query = QueryString::new();
    if let Some(country) = request.country.as_deref().filter(|c| !c.trim().is_empty()) {
        query.push("country", country);
    }
    if request.use_cursor {
        query.push("use_cursor", true);
    }
    if request.per_page != DEFAULT_PER_PAGE {
        query.push("perPage", request.per_page);
    }

    Ok(query.to_endpoint("/bank"))
}

pub(crate) fn resolve_account_endpoint(request: &ResolveAccountRequest) -> Result<String> {
    if request.account_number.trim().is_empty() {
        return Err(PaystackError::invalid_argument(
            "account_number",
            "Account number is required",
        ));
    }
    if request.bank_code.trim().is_empty() {
        return Err(PaystackError::invalid_argument(
            "bank_code",
            "Bank code is required",
        ));
    }

    let mut query = QueryString::new();
    query.push("account_number", &request.account_number);
    query.push("bank_code", &request.bank_code);
    Ok(query.to_endpoint("/bank/resolve"))
}
