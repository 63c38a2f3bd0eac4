// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI starts. Subcommands:
// - add <TEXT>: submit text once and print the result
// - get <ID>: fetch text once and print it
// - config --show | --path | --reset: configuration management

use crate::config::{Config, VERSION};
use crate::notify::{ConsoleNotifier, Notifier};
use crate::panel::{Outcome, Settled, TextOperations, EMPTY_DRAFT_WARNING};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Add texts to a backend store and read them back by ID
#[derive(Parser, Debug)]
#[command(name = "textops")]
#[command(version = VERSION)]
#[command(about = "Add texts to a backend store and read them back by ID", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides config file and TEXTOPS_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Use the in-memory demo backend
    #[arg(long, global = true)]
    pub demo: bool,

    /// Color theme: dark, light, terminal
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a piece of text
    Add {
        /// Text to store
        text: String,
    },

    /// Retrieve text by ID
    Get {
        /// Identifier returned by `add`
        id: String,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
        if self.demo {
            config.demo_mode = true;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// One-shot operation requested on the command line
pub enum OneShot {
    Add(String),
    Get(String),
}

/// Dispatch a single operation and wait for it to settle
///
/// An empty `add` never reaches the backend.
pub async fn run_once(
    mut panel: TextOperations,
    mut settled_rx: mpsc::UnboundedReceiver<Settled>,
    op: OneShot,
    notifier: &mut impl Notifier,
) -> Result<Outcome> {
    match op {
        OneShot::Add(text) => {
            panel.set_draft(text);
            if !panel.add_text(notifier) {
                return Ok(Outcome::Failed {
                    message: EMPTY_DRAFT_WARNING.to_string(),
                });
            }
        }
        OneShot::Get(id) => panel.fetch_text(&id, notifier),
    }

    let settled = settled_rx
        .recv()
        .await
        .ok_or_else(|| anyhow!("Backend call ended without a result"))?;

    Ok(panel.settle(settled, notifier))
}

/// Run `add` / `get` against stdout and stderr
///
/// A successful `add` also prints the bare identifier on its own line so
/// scripts can capture it. Returns whether the operation succeeded.
pub async fn handle_one_shot(
    panel: TextOperations,
    settled_rx: mpsc::UnboundedReceiver<Settled>,
    op: OneShot,
) -> Result<bool> {
    let mut notifier = ConsoleNotifier::stdio();
    let outcome = run_once(panel, settled_rx, op, &mut notifier).await?;
    if let Outcome::Added { id } = &outcome {
        println!("{}", id);
    }
    Ok(!matches!(outcome, Outcome::Failed { .. }) && !notifier.failed())
}

/// Handle `config` flags
///
/// `--path` and `--reset` never read the config file, so they keep working
/// when it is broken; `load` only runs for `--show`.
pub fn handle_config(
    show: bool,
    path: bool,
    reset: bool,
    load: impl FnOnce() -> Result<Config>,
) -> Result<()> {
    let mut stdout = std::io::stdout();
    if path {
        writeln!(stdout, "{}", config_path()?.display())?;
        Ok(())
    } else if show {
        handle_config_show(&load()?, &mut stdout)
    } else if reset {
        handle_config_reset(&config_path()?, &mut stdout)
    } else {
        // No flag provided, show help
        writeln!(stdout, "Usage: textops config [--show|--path|--reset]")?;
        writeln!(stdout)?;
        writeln!(stdout, "Options:")?;
        writeln!(stdout, "  --show    Display effective configuration")?;
        writeln!(stdout, "  --path    Show config file path")?;
        writeln!(stdout, "  --reset   Reset config file to defaults")?;
        Ok(())
    }
}

fn config_path() -> Result<PathBuf> {
    Config::config_path().ok_or_else(|| anyhow!("Could not determine config path"))
}

fn handle_config_show(config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "# Effective configuration (flags > env > file > defaults)")?;
    writeln!(out)?;
    write!(out, "{}", config.to_toml())?;

    if let Some(path) = Config::config_path() {
        writeln!(out)?;
        if path.exists() {
            writeln!(out, "# Source: {}", path.display())?;
        } else {
            writeln!(out, "# Source: defaults (no config file)")?;
        }
    }
    Ok(())
}

fn handle_config_reset(path: &Path, out: &mut impl Write) -> Result<()> {
    Config::write_defaults(path)?;
    writeln!(out, "Config reset to defaults: {}", path.display())?;
    Ok(())
}
