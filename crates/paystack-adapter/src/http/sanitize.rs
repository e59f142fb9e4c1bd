/*
[INPUT]:  Outgoing payloads and raw response bodies
[OUTPUT]: Redacted copies safe to write to a log sink
[POS]:    HTTP layer - log sanitization used by the transport client
[UPDATE]: When the sensitive field list or masking policy changes
*/

//! Log redaction for request payloads and response bodies.
//!
//! Everything here is a pure function over [`serde_json::Value`]. The value
//! sent on the wire or returned to the caller is never touched: callers get a
//! fresh, redacted projection they can hand to `tracing`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Field names whose values are masked (compared lower-cased).
pub const SENSITIVE_FIELDS: &[&str] = &[
    "secret_key",
    "secretkey",
    "authorization_code",
    "authorizationcode",
    "access_code",
    "accesscode",
    "pin",
    "cvv",
    "card_number",
    "cardnumber",
    "account_number",
    "accountnumber",
    "bvn",
    "password",
    "token",
];

/// Placeholder logged when a payload cannot be projected to JSON.
pub const SANITIZE_FAILED_PLACEHOLDER: &str = "[Could not sanitize payload]";

const ELLIPSIS: &str = "...";
const MAX_LOGGED_STRING_CHARS: usize = 500;
const TRUNCATED_STRING_CHARS: usize = 50;
const MAX_RAW_BODY_CHARS: usize = 1000;
const MAX_MASK_STARS: usize = 10;

pub fn is_sensitive_field(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_FIELDS.contains(&key.as_str())
}

/// Mask a sensitive value, keeping a short prefix and suffix for correlation.
///
/// | length | output                                  |
/// |--------|-----------------------------------------|
/// | 1..=4  | all stars                               |
/// | 5..=8  | 2 chars + `len - 4` stars + 2 chars     |
/// | > 8    | 4 chars + `min(len - 8, 10)` stars + 4  |
///
/// Blank input is returned as-is.
pub fn mask_sensitive_value(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    match len {
        0..=4 => "*".repeat(len),
        5..=8 => {
            let mut masked: String = chars[..2].iter().collect();
            masked.push_str(&"*".repeat(len - 4));
            masked.extend(&chars[len - 2..]);
            masked
        }
        _ => {
            let mut masked: String = chars[..4].iter().collect();
            masked.push_str(&"*".repeat((len - 8).min(MAX_MASK_STARS)));
            masked.extend(&chars[len - 4..]);
            masked
        }
    }
}

/// Shorten strings that are too long to be useful in a log line.
pub fn sanitize_string(value: &str) -> String {
    if value.chars().count() > MAX_LOGGED_STRING_CHARS {
        truncate_chars(value, TRUNCATED_STRING_CHARS)
    } else {
        value.to_string()
    }
}

/// Structure-preserving redaction of a JSON tree.
pub fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sanitize_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        Value::String(s) => Value::String(sanitize_string(s)),
        Value::Number(_) | Value::Bool(_) | Value::Null => value.clone(),
    }
}

fn sanitize_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let sanitized = if is_sensitive_field(key) {
                // Non-string sensitive values have nothing readable to keep.
                let source = value.as_str().unwrap_or_default();
                Value::String(mask_sensitive_value(source))
            } else {
                sanitize_value(value)
            };
            (key.clone(), sanitized)
        })
        .collect()
}

/// Redacted JSON projection of an outgoing payload.
pub fn sanitize_payload<P>(payload: &P) -> Value
where
    P: Serialize + ?Sized,
{
    match serde_json::to_value(payload) {
        Ok(value) => sanitize_value(&value),
        Err(_) => Value::String(SANITIZE_FAILED_PLACEHOLDER.to_string()),
    }
}

/// Redacted rendering of a raw response body.
///
/// JSON bodies are sanitized and re-serialized; anything else is truncated.
pub fn sanitize_response_body(body: &str) -> String {
    if body.trim().is_empty() {
        return body.to_string();
    }

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string(&sanitize_value(&value)).ok())
        .unwrap_or_else(|| {
            if body.chars().count() > MAX_RAW_BODY_CHARS {
                truncate_chars(body, MAX_RAW_BODY_CHARS)
            } else {
                body.to_string()
            }
        })
}

fn truncate_chars(value: &str, keep: usize) -> String {
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
