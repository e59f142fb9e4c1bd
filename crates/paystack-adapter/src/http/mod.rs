/*
[INPUT]:  Validated configuration and resource requests
[OUTPUT]: Typed response envelopes and typed errors
[POS]:    HTTP layer - transport, sanitizer and resource clients
[UPDATE]: When adding new resources or changing client behavior
*/

pub mod banks;
pub mod client;
pub mod error;
pub(crate) mod query;
pub mod sanitize;
pub mod transactions;

pub use error::{ErrorKind, PaystackError, Result};

pub use banks::{BanksApi, BanksClient};
pub use client::PaystackHttpClient;
pub use transactions::{TransactionsApi, TransactionsClient};
