mod commands;
mod config;
mod format;
mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;
use crate::prompt::PromptError;

#[derive(Parser)]
#[command(name = "harv", about = "Create and manage Harvest time entries from the terminal")]
struct Opts {
    /// Initial notes text
    #[arg(short, long)]
    note: Option<String>,

    /// External ticket number to prefix the notes
    #[arg(short, long)]
    ticket: Option<String>,

    /// Path of the local defaults file
    #[arg(short, long, default_value = ".harv.toml")]
    config: PathBuf,

    /// Ignore the local defaults file entirely
    #[arg(short, long)]
    ignore_config: bool,

    /// Select one of today's entries and restart it
    #[arg(short = 'e', long)]
    restart: bool,

    /// Stop the currently running timer
    #[arg(short = 'q', long)]
    stop: bool,

    /// Show the current running timer status
    #[arg(short, long)]
    status: bool,

    /// Plain status-bar output format
    #[arg(short, long, requires = "status")]
    bar: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let opts = Opts::parse();
    init_logging()?;

    if let Err(err) = run(opts).await {
        // Backing out of a prompt aborts the whole run, but it is the user's
        // own doing, so exit cleanly instead of reporting a failure.
        if matches!(err.downcast_ref::<PromptError>(), Some(PromptError::Cancelled)) {
            tracing::debug!("prompt cancelled, ending run");
            return Ok(());
        }
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

async fn run(opts: Opts) -> Result<()> {
    let mut global = GlobalConfig::load().context("Failed to load global config")?;
    global.apply_env();
    if !global.is_complete() {
        commands::run_setup(&mut global)?;
    }

    let credentials =
        harvest::Credentials::new(global.account_id.clone(), global.access_token.clone())?;
    let client = harvest::HarvestClient::new(credentials);

    if opts.stop {
        return commands::stop(&client, global.user_id).await;
    }
    if opts.restart {
        return commands::restart(&client, global.user_id).await;
    }
    if opts.status {
        return commands::status(&client, global.user_id, opts.bar).await;
    }

    let defaults_path = (!opts.ignore_config).then_some(opts.config.as_path());
    commands::start(&client, opts.note.as_deref(), opts.ticket.as_deref(), defaults_path).await
}

/// Log to a file under the config directory so interactive stdout stays
/// clean for the prompts.
fn init_logging() -> Result<()> {
    let path = GlobalConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
