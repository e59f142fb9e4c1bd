/*
[INPUT]:  Config, resource clients, wire types
[OUTPUT]: Public Paystack adapter crate surface
[POS]:    Crate root - exports for SDK consumers
[UPDATE]: When a public item is added or renamed
*/

//! Typed client for the Paystack REST API.
//!
//! ```no_run
//! use paystack_adapter::{BanksApi, CancellationToken, PaystackClient, ResolveAccountRequest};
//!
//! # async fn run() -> paystack_adapter::Result<()> {
//! let client = PaystackClient::from_secret_key("sk_test_xxx")?;
//! let account = client
//!     .banks()
//!     .resolve_account(
//!         &ResolveAccountRequest::new("0022728151", "063"),
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//! println!("{:?}", account.data);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod types;

pub use client::PaystackClient;

pub use config::{LogLevel, PaystackConfig, PaystackSettings};

pub use http::{
    BanksApi,
    BanksClient,
    ErrorKind,
    PaystackError,
    PaystackHttpClient,
    Result,
    TransactionsApi,
    TransactionsClient,
};

// Re-export all types
pub use types::*;

pub use tokio_util::sync::CancellationToken;
