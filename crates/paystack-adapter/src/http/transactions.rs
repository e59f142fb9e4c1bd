/*
[INPUT]:  Transaction initialization bodies, references, ids and list filters
[OUTPUT]: Checkout handles, transaction records and paginated lists
[POS]:    HTTP layer - Transactions resource endpoints
[UPDATE]: When adding new transaction endpoints or changing query parameters
*/

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::http::query::{QueryString, encode_path_segment};
use crate::http::{PaystackError, PaystackHttpClient, Result};
use crate::types::{
    DEFAULT_PER_PAGE, InitializeTransactionRequest, InitializedTransaction,
    ListTransactionsRequest, MAX_PER_PAGE, PaystackResponse, Transaction,
};

const INITIALIZE_ENDPOINT: &str = "/transaction/initialize";
const DATE_FILTER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Transaction lifecycle operations
#[async_trait]
pub trait TransactionsApi: Send + Sync {
    /// Start a checkout for a customer
    ///
    /// POST /transaction/initialize
    async fn initialize(
        &self,
        request: &InitializeTransactionRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<InitializedTransaction>>;

    /// Confirm the outcome of a transaction by its reference
    ///
    /// GET /transaction/verify/{reference}
    async fn verify(
        &self,
        reference: &str,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Transaction>>;

    /// GET /transaction?perPage=&page=&customer=&status=&from=&to=&amount=
    async fn list(
        &self,
        request: &ListTransactionsRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Vec<Transaction>>>;

    /// GET /transaction/{id}
    async fn fetch(
        &self,
        transaction_id: u64,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Transaction>>;
}

#[derive(Debug, Clone)]
pub struct TransactionsClient {
    http: PaystackHttpClient,
}

impl TransactionsClient {
    pub fn new(http: PaystackHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TransactionsApi for TransactionsClient {
    async fn initialize(
        &self,
        request: &InitializeTransactionRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<InitializedTransaction>> {
        validate_initialize(request)?;
        self.http.post(INITIALIZE_ENDPOINT, Some(request), cancel).await
    }

    async fn verify(
        &self,
        reference: &str,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Transaction>> {
        let endpoint = verify_endpoint(reference)?;
        self.http.get(&endpoint, cancel).await
    }

    async fn list(
        &self,
        request: &ListTransactionsRequest,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Vec<Transaction>>> {
        let endpoint = list_transactions_endpoint(request)?;
        self.http.get(&endpoint, cancel).await
    }

    async fn fetch(
        &self,
        transaction_id: u64,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<Transaction>> {
        let endpoint = fetch_endpoint(transaction_id)?;
        self.http.get(&endpoint, cancel).await
    }
}

pub(crate) fn validate_initialize(request: &InitializeTransactionRequest) -> Result<()> {
    if request.email.trim().is_empty() {
        return Err(PaystackError::invalid_argument("email", "Email is required"));
    }
    if request.amount <= 0 {
        return Err(PaystackError::invalid_argument(
            "amount",
            "Amount must be greater than zero",
        ));
    }
    Ok(())
}

pub(crate) fn verify_endpoint(reference: &str) -> Result<String> {
    if reference.trim().is_empty() {
        return Err(PaystackError::invalid_argument(
            "reference",
            "Reference is required",
        ));
    }
    Ok(format!("/transaction/verify/{}", encode_path_segment(reference)))
}

pub(crate) fn fetch_endpoint(transaction_id: u64) -> Result<String> {
    if transaction_id == 0 {
        return Err(PaystackError::invalid_argument(
            "transaction_id",
            "Transaction ID must be greater than zero",
        ));
    }
    Ok(format!("/transaction/{transaction_id}"))
}

pub(crate) fn list_transactions_endpoint(request: &ListTransactionsRequest) -> Result<String> {
    if !(1..=MAX_PER_PAGE).contains(&request.per_page) {
        return Err(PaystackError::invalid_argument(
            "per_page",
            "PerPage must be between 1 and 100",
        ));
    }
    if request.page < 1 {
        return Err(PaystackError::invalid_argument(
            "page",
            "Page must be greater than zero",
        ));
    }

    let mut query = QueryString::new();
    if request.per_page != DEFAULT_PER_PAGE {
        query.push("perPage", request.per_page);
    }
    if request.page != 1 {
        query.push("page", request.page);
    }
    if let Some(customer) = request.customer.as_deref().filter(|c| !c.trim().is_empty()) {
        query.push("customer", customer);
    }
    if let Some(status) = request.status {
        query.push("status", status.as_str());
    }
    if let Some(from) = request.from {
        query.push("from", from.format(DATE_FILTER_FORMAT));
    }
    if let Some(to) = request.to {
        query.push("to", to.format(DATE_FILTER_FORMAT));
    }
    if let Some(amount) = request.amount {
        query.push("amount", amount);
    }

    Ok(query.to_endpoint("/transaction"))
}
