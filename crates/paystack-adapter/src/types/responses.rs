/*
[INPUT]:  Raw JSON bodies returned by every Paystack endpoint
[OUTPUT]: Generic response envelope and pagination metadata
[POS]:    Data layer - the status/message/data/meta wrapper
[UPDATE]: When the envelope shape or pagination fields change
*/

use serde::{Deserialize, Deserializer, Serialize};

use crate::http::{PaystackError, Result};

/// Envelope wrapping every Paystack response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaystackResponse<T> {
    #[serde(rename = "status", default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaystackMeta>,
}

impl<T> PaystackResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Take the payload, failing when the envelope carries none
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or_else(|| PaystackError::Decode {
            message: format!("response has no data: {}", self.message),
            body: None,
        })
    }
}

/// Paystack sends `"message": null` on some responses
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pagination metadata returned by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaystackMeta {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(rename = "perPage", default)]
    pub per_page: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(rename = "pageCount", default)]
    pub page_count: u64,
}

impl PaystackMeta {
    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count
    }
}
