// textops - add texts to a backend store and read them back by ID
//
// Architecture:
// - Client (reqwest or in-memory demo): talks to the text storage backend
// - Panel: draft text, submitted IDs, dispatch/settle of backend calls
// - TUI (ratatui): input, ID list, logs and toast notifications
// - CLI (clap): one-shot add/get and config management
// - Event system: backend results come back over an mpsc channel and are
//   applied on the UI loop

mod cli;
mod client;
mod config;
mod logging;
mod notify;
mod panel;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, OneShot};
use client::{DemoBackend, HttpBackendClient, SharedClient};
use config::Config;
use logging::{LogBuffer, LogSink};
use panel::TextOperations;
use std::sync::Arc;

/// Precedence: flags > env > file > defaults
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Handled before loading so a broken config file can still be located and reset
    if let Some(Commands::Config { show, path, reset }) = &cli.command {
        return cli::handle_config(*show, *path, *reset, || load_config(&cli));
    }

    let config = load_config(&cli)?;

    // In TUI mode logs are captured to the buffer so they don't garble the display
    let log_buffer = LogBuffer::new();
    let sink = if cli.command.is_none() {
        LogSink::Tui
    } else {
        LogSink::Stderr
    };
    // Keep the guard alive so file logs flush on exit
    let file_guard = logging::init(&config.logging, sink, &log_buffer);

    let client: SharedClient = if config.demo_mode {
        tracing::info!("Demo mode: using in-memory backend");
        Arc::new(DemoBackend::with_latency(config.demo_latency))
    } else {
        Arc::new(HttpBackendClient::new(
            &config.backend_url,
            config.request_timeout,
        )?)
    };

    let (panel, settled_rx) = TextOperations::new(client);

    let op = match cli.command {
        None => return tui::run_tui(panel, settled_rx, &config, log_buffer).await,
        Some(Commands::Add { text }) => OneShot::Add(text),
        Some(Commands::Get { id }) => OneShot::Get(id),
        Some(Commands::Config { .. }) => return Ok(()),
    };

    let succeeded = cli::handle_one_shot(panel, settled_rx, op).await?;
    if !succeeded {
        // process::exit skips destructors
        drop(file_guard);
        std::process::exit(1);
    }
    Ok(())
}
