/*
[INPUT]:  CLI arguments, YAML settings file, PAYSTACK_* environment, OS shutdown signals
[OUTPUT]: Paystack API responses as pretty JSON on stdout
[POS]:    Binary entry point - paystack-cli
[UPDATE]: When changing global flags, settings loading, or signal handling
*/

mod commands;
mod settings;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paystack_adapter::{PaystackClient, PaystackConfig};

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "paystack-cli", version, about = "Command line client for the Paystack API")]
struct Cli {
    /// YAML settings file; PAYSTACK_* environment variables override it
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Validate settings and exit without calling the API
    #[arg(long = "check")]
    check: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let settings = settings::load_settings(args.config_path.as_deref())?;
    let config = PaystackConfig::new(settings).context("validate settings")?;
    info!(
        base_url = %config.base_url(),
        timeout_secs = config.timeout().as_secs(),
        "settings loaded"
    );

    if args.check {
        info!("check requested; settings validated");
        return Ok(());
    }

    let Some(command) = args.command else {
        bail!("no command given; see --help");
    };

    let client = PaystackClient::new(config).context("build paystack client")?;
    let cancel = CancellationToken::new();
    setup_signal_handlers(cancel.clone());

    let output = command.run(&client, &cancel).await?;
    println!("{output}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handlers(cancel: CancellationToken) {
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT; cancelling request");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM; cancelling request");
                    cancel.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
