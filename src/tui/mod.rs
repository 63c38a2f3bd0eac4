// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Receiving settled backend calls and applying them to the panel

pub mod app;
pub mod components;
pub mod layout;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::panel::{Settled, TextOperations};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(
    panel: TextOperations,
    mut settled_rx: mpsc::UnboundedReceiver<Settled>,
    config: &Config,
    log_buffer: LogBuffer,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(panel, config, log_buffer);
    tracing::info!(
        "Backend: {}, theme: {}",
        app.panel.backend_description(),
        app.theme.name
    );

    let result = run_event_loop(&mut terminal, &mut app, &mut settled_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    if app.panel.in_flight() > 0 {
        tracing::debug!(
            "Exiting with {} call(s) still in flight",
            app.panel.in_flight()
        );
    }

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Settled backend calls
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    settled_rx: &mut mpsc::UnboundedReceiver<Settled>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        app.handle_key(key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(settled) = settled_rx.recv() => {
                app.settle(settled);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
