/*
[INPUT]:  Wire names for transaction states and payment channels
[OUTPUT]: TransactionStatus and Channel enums
[POS]:    Data layer - closed vocabularies of the API
[UPDATE]: When Paystack adds a status or channel
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Success,
    Failed,
    Abandoned,
    Reversed,
    Ongoing,
    Pending,
    Processing,
    Queued,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Abandoned => "abandoned",
            TransactionStatus::Reversed => "reversed",
            TransactionStatus::Ongoing => "ongoing",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Queued => "queued",
            TransactionStatus::Unknown => "unknown",
        }
    }
}

/// Payment channels a checkout may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Card,
    Bank,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    Eft,
    ApplePay,
}
