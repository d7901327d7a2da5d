// src/main.rs

//! homeward CLI
//!
//! Long-running homework-review status notifier. `run` starts the poll
//! loop; `once` executes a single cycle for smoke-testing credentials;
//! `validate` checks settings and secrets without touching the network.

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use homeward::{
    config::{Secrets, Settings},
    error::Result,
    poll::{CycleOutcome, PollLoop},
    services::{Notifier, ReviewClient, TelegramTransport},
};

/// homeward - Homework Review Status Notifier
#[derive(Parser, Debug)]
#[command(
    name = "homeward",
    version,
    about = "Watches a homework-review API and reports verdicts to Telegram"
)]
struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll for status changes until interrupted
    Run,

    /// Execute a single poll cycle and exit
    Once,

    /// Validate settings and credentials
    Validate,
}

/// Exit code for missing mandatory credentials.
const EXIT_MISCONFIGURED: i32 = 2;

/// Initialize logging from settings, with the verbosity flag on top.
fn init_logging(settings: &Settings, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load secrets or terminate before the loop starts.
fn load_secrets_or_exit() -> Secrets {
    match Secrets::from_env() {
        Ok(secrets) => secrets,
        Err(error) => {
            log::error!("{error}. The program is forcibly stopped.");
            process::exit(EXIT_MISCONFIGURED);
        }
    }
}

/// Wire up the poll loop from settings and secrets.
fn build_loop(settings: &Settings, secrets: &Secrets) -> Result<PollLoop> {
    let review = ReviewClient::new(&settings.review, &secrets.practicum_token)?;
    let transport = TelegramTransport::new(
        &settings.telegram,
        &secrets.telegram_token,
        &secrets.telegram_chat_id,
    )?;
    let notifier = Notifier::new(Box::new(transport));

    Ok(PollLoop::new(
        review,
        notifier,
        Duration::from_secs(settings.poll.interval_secs),
    ))
}

/// Main entry point.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load_or_default(&cli.config);
    init_logging(&settings, cli.verbose);
    settings.validate()?;

    match cli.command {
        Command::Run => {
            let secrets = load_secrets_or_exit();
            let mut poll = build_loop(&settings, &secrets)?;
            poll.run().await?;
        }

        Command::Once => {
            let secrets = load_secrets_or_exit();
            let mut poll = build_loop(&settings, &secrets)?;

            let outcome = poll.cycle().await;
            match &outcome {
                Ok(CycleOutcome::Notified(message)) => {
                    log::info!("Cycle produced a notification: {message}");
                }
                Ok(CycleOutcome::NoUpdate) => {
                    log::info!("Cycle produced no updates");
                }
                Err(error) => log::warn!("Cycle ended with an error: {error}"),
            }
            poll.settle(outcome).await;
        }

        Command::Validate => {
            log::info!("Validating settings from {}", cli.config);
            log::info!("✓ Settings OK (endpoint: {})", settings.review.endpoint);

            let secrets = Secrets::from_env()?;
            log::info!("✓ Credentials present (chat {})", secrets.telegram_chat_id);
            log::info!("All validations passed!");
        }
    }

    Ok(())
}
