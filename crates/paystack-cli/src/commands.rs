/*
[INPUT]:  Parsed subcommands and a ready PaystackClient
[OUTPUT]: Response envelopes rendered as pretty JSON
[POS]:    CLI layer - command dispatch
[UPDATE]: When adding resource commands or flags
*/

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use paystack_adapter::{
    BanksApi, Channel, DEFAULT_CURRENCY, DEFAULT_PER_PAGE, InitializeTransactionRequest,
    ListBanksRequest, ListTransactionsRequest, PaystackClient, ResolveAccountRequest,
    TransactionStatus, TransactionsApi,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bank directory and account resolution
    Banks {
        #[command(subcommand)]
        action: BanksCommand,
    },
    /// Transaction checkout, verification and history
    Transactions {
        #[command(subcommand)]
        action: TransactionsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum BanksCommand {
    List {
        #[arg(long)]
        country: Option<String>,
        #[arg(long = "use-cursor")]
        use_cursor: bool,
        #[arg(long = "per-page", default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
    },
    /// Look up the account name behind an account number
    Resolve {
        #[arg(long = "account-number")]
        account_number: String,
        #[arg(long = "bank-code")]
        bank_code: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TransactionsCommand {
    Initialize(InitializeArgs),
    Verify {
        reference: String,
    },
    List(ListTransactionsArgs),
    Fetch {
        id: u64,
    },
}

#[derive(Args, Debug)]
pub struct InitializeArgs {
    #[arg(long)]
    email: String,
    /// Amount in the currency subunit (kobo for NGN)
    #[arg(long, allow_negative_numbers = true)]
    amount: i64,
    #[arg(long)]
    reference: Option<String>,
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,
    #[arg(long = "callback-url")]
    callback_url: Option<String>,
    #[arg(long = "channel", value_parser = parse_channel)]
    channels: Vec<Channel>,
}

#[derive(Args, Debug)]
pub struct ListTransactionsArgs {
    #[arg(long = "per-page", default_value_t = DEFAULT_PER_PAGE)]
    per_page: u32,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    customer: Option<String>,
    #[arg(long, value_parser = parse_status)]
    status: Option<TransactionStatus>,
    /// RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long, value_parser = parse_datetime)]
    from: Option<DateTime<Utc>>,
    #[arg(long, value_parser = parse_datetime)]
    to: Option<DateTime<Utc>>,
    #[arg(long)]
    amount: Option<i64>,
}

impl Command {
    pub async fn run(self, client: &PaystackClient, cancel: &CancellationToken) -> Result<String> {
        debug!(command = ?self, "running command");
        match self {
            Command::Banks { action } => action.run(client.banks(), cancel).await,
            Command::Transactions { action } => action.run(client.transactions(), cancel).await,
        }
    }
}

impl BanksCommand {
    async fn run(self, banks: &impl BanksApi, cancel: &CancellationToken) -> Result<String> {
        match self {
            BanksCommand::List {
                country,
                use_cursor,
                per_page,
            } => {
                let request = ListBanksRequest {
                    country,
                    use_cursor,
                    per_page,
                };
                let response = banks.list_banks(&request, cancel).await.context("list banks")?;
                render(&response)
            }
            BanksCommand::Resolve {
                account_number,
                bank_code,
            } => {
                let request = ResolveAccountRequest::new(account_number, bank_code);
                let response = banks
                    .resolve_account(&request, cancel)
                    .await
                    .context("resolve account")?;
                render(&response)
            }
        }
    }
}

impl TransactionsCommand {
    async fn run(
        self,
        transactions: &impl TransactionsApi,
        cancel: &CancellationToken,
    ) -> Result<String> {
        match self {
            TransactionsCommand::Initialize(args) => {
                let mut request = InitializeTransactionRequest::new(args.email, args.amount);
                request.reference = args.reference;
                request.currency = args.currency;
                request.callback_url = args.callback_url;
                if !args.channels.is_empty() {
                    request.channels = Some(args.channels);
                }
                let response = transactions
                    .initialize(&request, cancel)
                    .await
                    .context("initialize transaction")?;
                render(&response)
            }
            TransactionsCommand::Verify { reference } => {
                let response = transactions
                    .verify(&reference, cancel)
                    .await
                    .with_context(|| format!("verify transaction {reference}"))?;
                render(&response)
            }
            TransactionsCommand::List(args) => {
                let request = ListTransactionsRequest {
                    per_page: args.per_page,
                    page: args.page,
                    customer: args.customer,
                    status: args.status,
                    from: args.from,
                    to: args.to,
                    amount: args.amount,
                };
                let response = transactions
                    .list(&request, cancel)
                    .await
                    .context("list transactions")?;
                render(&response)
            }
            TransactionsCommand::Fetch { id } => {
                let response = transactions
                    .fetch(id, cancel)
                    .await
                    .with_context(|| format!("fetch transaction {id}"))?;
                render(&response)
            }
        }
    }
}

fn render(response: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(response).context("render response")
}

fn parse_wire_name<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_ascii_lowercase()))
        .map_err(|err| err.to_string())
}

fn parse_channel(value: &str) -> Result<Channel, String> {
    parse_wire_name(value)
}

fn parse_status(value: &str) -> Result<TransactionStatus, String> {
    match parse_wire_name(value)? {
        TransactionStatus::Unknown => Err(format!("unknown transaction status `{value}`")),
        status => Ok(status),
    }
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        .map_err(|_| format!("expected RFC 3339 timestamp or YYYY-MM-DD, got `{value}`"))
}
