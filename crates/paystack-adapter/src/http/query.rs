/*
[INPUT]:  Endpoint paths and query parameters
[OUTPUT]: Percent-encoded endpoint strings
[POS]:    HTTP layer - endpoint construction helpers for resource clients
[UPDATE]: When endpoint encoding rules change
*/

use std::fmt::Display;

use url::form_urlencoded::byte_serialize;

/// Ordered query parameters appended to an endpoint path
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    params: Vec<String>,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str, value: impl Display) {
        let value = encode_component(&value.to_string());
        self.params.push(format!("{key}={value}"));
    }

    /// `path` alone when no parameters were pushed
    pub(crate) fn to_endpoint(&self, path: &str) -> String {
        if self.params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.params.join("&"))
        }
    }
}

/// Percent-encode a value for use as a single path segment
pub(crate) fn encode_path_segment(segment: &str) -> String {
    encode_component(segment)
}

/// Form encoding with spaces as `%20` instead of `+`
fn encode_component(value: &str) -> String {
    // byte_serialize emits '+' only for spaces; a literal '+' becomes %2B
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
