/*
[INPUT]:  Validated configuration (base URL, secret key, timeout, logging)
[OUTPUT]: Typed response envelopes or typed errors for every API call
[POS]:    HTTP layer - core transport client shared by all resource clients
[UPDATE]: When changing headers, response interpretation or request logging
*/

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::{LogLevel, PaystackConfig};
use crate::http::sanitize::{sanitize_payload, sanitize_response_body};
use crate::http::{PaystackError, Result};
use crate::types::PaystackResponse;

/// Product identifier sent as the User-Agent
pub const USER_AGENT: &str = "Ebee.Paystack/1.0.0";

/// Transport client for the Paystack REST API
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// per-call state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct PaystackHttpClient {
    http_client: Client,
    config: PaystackConfig,
}

impl PaystackHttpClient {
    pub fn new(config: PaystackConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.secret_key()))
            .map_err(|_| {
                PaystackError::Config("SecretKey contains characters not allowed in a header".into())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &PaystackConfig {
        &self.config
    }

    /// GET `endpoint`
    pub async fn get<T>(
        &self,
        endpoint: &str,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send::<T, ()>(Method::GET, endpoint, None, cancel).await
    }

    /// POST `endpoint` with an optional JSON body
    pub async fn post<T, P>(
        &self,
        endpoint: &str,
        payload: Option<&P>,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<T>>
    where
        T: DeserializeOwned + Send,
        P: Serialize + ?Sized + Sync,
    {
        self.send(Method::POST, endpoint, payload, cancel).await
    }

    /// PUT `endpoint` with an optional JSON body
    pub async fn put<T, P>(
        &self,
        endpoint: &str,
        payload: Option<&P>,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<T>>
    where
        T: DeserializeOwned + Send,
        P: Serialize + ?Sized + Sync,
    {
        self.send(Method::PUT, endpoint, payload, cancel).await
    }

    /// DELETE `endpoint`
    pub async fn delete<T>(
        &self,
        endpoint: &str,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send::<T, ()>(Method::DELETE, endpoint, None, cancel).await
    }

    /// Join `endpoint` onto the base URL, keeping any path prefix
    fn url(&self, endpoint: &str) -> Result<Url> {
        let base = self.config.base_url().as_str().trim_end_matches('/');
        let url = if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        };
        Ok(Url::parse(&url)?)
    }

    async fn send<T, P>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&P>,
        cancel: &CancellationToken,
    ) -> Result<PaystackResponse<T>>
    where
        T: DeserializeOwned + Send,
        P: Serialize + ?Sized + Sync,
    {
        let url = self.url(endpoint)?;
        let body = payload.map(serde_json::to_vec).transpose()?;

        self.log_request(&method, endpoint, payload);

        let mut builder = self.http_client.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let started = Instant::now();
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PaystackError::Cancelled),
            result = builder.send() => result.map_err(|err| self.transport_error(err))?,
        };

        let status = response.status();
        let content = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PaystackError::Cancelled),
            result = response.text() => result.map_err(|err| self.transport_error(err))?,
        };

        self.log_response(&method, endpoint, status, started.elapsed(), &content);

        process_response(status, content)
    }

    fn transport_error(&self, err: reqwest::Error) -> PaystackError {
        if err.is_timeout() {
            PaystackError::Timeout {
                duration: self.config.timeout().as_secs(),
            }
        } else {
            PaystackError::Http(err)
        }
    }

    fn log_request<P>(&self, method: &Method, endpoint: &str, payload: Option<&P>)
    where
        P: Serialize + ?Sized,
    {
        if !self.config.should_log(LogLevel::Information) {
            return;
        }

        let payload = payload
            .map(|payload| sanitize_payload(payload).to_string())
            .unwrap_or_default();
        info!(method = %method, endpoint, payload = %payload, "Paystack API request");
    }

    fn log_response(
        &self,
        method: &Method,
        endpoint: &str,
        status: StatusCode,
        elapsed: Duration,
        content: &str,
    ) {
        let severity = if status.is_success() {
            LogLevel::Information
        } else {
            LogLevel::Warning
        };
        if !self.config.should_log(severity) {
            return;
        }

        let body = sanitize_response_body(content);
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let status = status.as_u16();
        if severity == LogLevel::Information {
            info!(method = %method, endpoint, status, elapsed_ms, body = %body, "Paystack API response");
        } else {
            warn!(method = %method, endpoint, status, elapsed_ms, body = %body, "Paystack API response");
        }
    }
}

/// Turn a raw HTTP response into an envelope or a typed error
pub(crate) fn process_response<T>(status: StatusCode, content: String) -> Result<PaystackResponse<T>>
where
    T: DeserializeOwned,
{
    if !status.is_success() {
        let message =
            match serde_json::from_str::<Option<PaystackResponse<serde_json::Value>>>(&content) {
                Ok(Some(envelope)) if !envelope.message.is_empty() => envelope.message,
                Ok(_) => "Request failed".to_string(),
                Err(_) => format!("Request failed with status {}", status.as_u16()),
            };
        return Err(PaystackError::api_error(status, message, Some(content)));
    }

    match serde_json::from_str::<Option<PaystackResponse<T>>>(&content) {
        Ok(Some(envelope)) => Ok(envelope),
        Ok(None) => Err(PaystackError::Decode {
            message: "response envelope was null".to_string(),
            body: Some(content),
        }),
        Err(err) => Err(PaystackError::Decode {
            message: err.to_string(),
            body: Some(content),
        }),
    }
}
