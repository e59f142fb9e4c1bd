/*
[INPUT]:  Optional YAML settings file and PAYSTACK_* environment variables
[OUTPUT]: Unvalidated PaystackSettings
[POS]:    Configuration layer - settings sources
[UPDATE]: When adding settings sources or keys
*/

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

use paystack_adapter::PaystackSettings;

const ENV_PREFIX: &str = "PAYSTACK";

/// Load settings from `path` (if any), then the process environment
pub fn load_settings(path: Option<&Path>) -> Result<PaystackSettings> {
    build_settings(path, Environment::with_prefix(ENV_PREFIX))
}

fn build_settings(path: Option<&Path>, environment: Environment) -> Result<PaystackSettings> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
    }

    builder
        .add_source(environment.try_parsing(true))
        .build()
        .with_context(|| match path {
            Some(path) => format!("read settings from {}", path.display()),
            None => "read settings from environment".to_string(),
        })?
        .try_deserialize::<PaystackSettings>()
        .context("parse settings")
}
