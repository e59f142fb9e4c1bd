/*
[INPUT]:  Secret key, base URL, timeout and logging settings
[OUTPUT]: Validated, immutable client configuration
[POS]:    Configuration layer - shared by the transport and resource clients
[UPDATE]: When adding configuration options or validation rules
*/

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::sanitize::mask_sensitive_value;
use crate::http::{PaystackError, Result};

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Minimum severity the SDK emits request/response logs at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    None,
    Error,
    Warning,
    #[default]
    Information,
    Debug,
    Trace,
}

impl LogLevel {
    /// Whether an event of `severity` passes this threshold
    pub fn allows(self, severity: LogLevel) -> bool {
        self != LogLevel::None && severity != LogLevel::None && severity <= self
    }

    pub fn as_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::None => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warning => Some(tracing::Level::WARN),
            LogLevel::Information => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Information => "information",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = PaystackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(LogLevel::None),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "information" | "info" => Ok(LogLevel::Information),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(PaystackError::Config(format!("unknown log level `{other}`"))),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = PaystackError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Raw configuration input, before validation
///
/// Deserializable so it can be bound from files or the environment.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaystackSettings {
    pub secret_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub enable_logging: bool,
    pub log_level: LogLevel,
}

impl Default for PaystackSettings {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            enable_logging: false,
            log_level: LogLevel::default(),
        }
    }
}

impl fmt::Debug for PaystackSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackSettings")
            .field("secret_key", &mask_sensitive_value(&self.secret_key))
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("enable_logging", &self.enable_logging)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Validated client configuration
///
/// Built once through [`PaystackConfig::new`]; read-only afterwards.
#[derive(Clone)]
pub struct PaystackConfig {
    secret_key: String,
    base_url: Url,
    timeout: Duration,
    enable_logging: bool,
    log_level: LogLevel,
}

impl PaystackConfig {
    /// Validate settings, reporting every problem at once
    pub fn new(settings: PaystackSettings) -> Result<Self> {
        let mut failures = Vec::new();

        if settings.secret_key.trim().is_empty() {
            failures.push("SecretKey is required".to_string());
        }

        let base_url = if settings.base_url.trim().is_empty() {
            failures.push("BaseUrl is required".to_string());
            None
        } else {
            match Url::parse(settings.base_url.trim()) {
                Ok(url) if url.has_host() => Some(url),
                _ => {
                    failures.push("BaseUrl must be a valid URI".to_string());
                    None
                }
            }
        };

        if settings.timeout_seconds == 0 {
            failures.push("TimeoutInSeconds must be greater than zero".to_string());
        }

        match base_url {
            Some(base_url) if failures.is_empty() => Ok(Self {
                secret_key: settings.secret_key,
                base_url,
                timeout: Duration::from_secs(settings.timeout_seconds),
                enable_logging: settings.enable_logging,
                log_level: settings.log_level,
            }),
            _ => Err(PaystackError::Config(failures.join("; "))),
        }
    }

    /// Production configuration with default timeout and logging off
    pub fn from_secret_key(secret_key: impl Into<String>) -> Result<Self> {
        Self::new(PaystackSettings {
            secret_key: secret_key.into(),
            ..PaystackSettings::default()
        })
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn enable_logging(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Whether the SDK should emit a log event of `severity`
    pub fn should_log(&self, severity: LogLevel) -> bool {
        self.enable_logging && self.log_level.allows(severity)
    }
}

impl TryFrom<PaystackSettings> for PaystackConfig {
    type Error = PaystackError;

    fn try_from(settings: PaystackSettings) -> Result<Self> {
        Self::new(settings)
    }
}

impl fmt::Debug for PaystackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackConfig")
            .field("secret_key", &mask_sensitive_value(&self.secret_key))
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("enable_logging", &self.enable_logging)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(secret_key: &str) -> PaystackSettings {
        PaystackSettings {
            secret_key: secret_key.to_string(),
            ..PaystackSettings::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = PaystackConfig::from_secret_key("sk_test_123").expect("valid config");
        assert_eq!(config.base_url().as_str(), "https://api.paystack.co/");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.enable_logging());
        assert_eq!(config.log_level(), LogLevel::Information);
    }

    #[test]
    fn test_blank_secret_key_rejected() {
        let err = PaystackConfig::new(settings("   ")).unwrap_err();
        assert!(matches!(err, PaystackError::Config(ref msg) if msg == "SecretKey is required"));
    }

    #[test]
    fn test_all_failures_reported() {
        let err = PaystackConfig::new(PaystackSettings {
            secret_key: String::new(),
            base_url: "not a url".to_string(),
            timeout_seconds: 0,
            ..PaystackSettings::default()
        })
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("SecretKey is required"));
        assert!(message.contains("BaseUrl must be a valid URI"));
        assert!(message.contains("TimeoutInSeconds must be greater than zero"));
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let err = PaystackConfig::new(PaystackSettings {
            base_url: "/bank".to_string(),
            ..settings("sk_test_123")
        })
        .unwrap_err();
        assert!(err.to_string().contains("BaseUrl must be a valid URI"));

        let err = PaystackConfig::new(PaystackSettings {
            base_url: String::new(),
            ..settings("sk_test_123")
        })
        .unwrap_err();
        assert!(err.to_string().contains("BaseUrl is required"));
    }

    #[test]
    fn test_debug_masks_secret_key() {
        let config = PaystackConfig::from_secret_key("sk_live_abcdef1234567890").unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("sk_l**********7890"));
        assert!(!debug.contains("abcdef1234567890"));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Information);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_threshold() {
        assert!(LogLevel::Information.allows(LogLevel::Information));
        assert!(LogLevel::Information.allows(LogLevel::Warning));
        assert!(!LogLevel::Warning.allows(LogLevel::Information));
        assert!(LogLevel::Error.allows(LogLevel::Error));
        assert!(!LogLevel::None.allows(LogLevel::Error));
        assert!(LogLevel::Trace.allows(LogLevel::Debug));
    }

    #[test]
    fn test_should_log_requires_enable_flag() {
        let config = PaystackConfig::new(PaystackSettings {
            log_level: LogLevel::Trace,
            ..settings("sk_test_123")
        })
        .unwrap();
        assert!(!config.should_log(LogLevel::Error));

        let config = PaystackConfig::new(PaystackSettings {
            enable_logging: true,
            log_level: LogLevel::Warning,
            ..settings("sk_test_123")
        })
        .unwrap();
        assert!(config.should_log(LogLevel::Warning));
        assert!(!config.should_log(LogLevel::Information));
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: PaystackSettings =
            serde_json::from_str(r#"{"secret_key":"sk_test_1","log_level":"debug"}"#).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_seconds, 30);
        assert_eq!(settings.log_level, LogLevel::Debug);
    }
}
