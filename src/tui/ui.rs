// Screen layout - called on every frame
//
// ┌ title ─────────────────────────────┐
// │ instructions                       │
// ┌ text input ────────────────────────┐
// ┌ available text IDs ────────────────┐
// ┌ system logs ───────────────────────┐
// ─ status ─────────────────────────────
//                         toasts on top ┘

use super::app::App;
use super::components::{status_bar, TitleBar};
use super::layout::logs_height;
use super::traits::Component;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

const INSTRUCTIONS: [(&str, &str, &str); 3] = [
    ("Enter text and press ", "Enter", " to add it to the backend store"),
    (
        "Once your text has been added, its ID is appended to ",
        "Available text IDs",
        "",
    ),
    (
        "Press ",
        "Tab",
        " to move to the list, pick an ID and press Enter to get its text",
    ),
];

pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Title
            Constraint::Length(INSTRUCTIONS.len() as u16), // Instructions
            Constraint::Length(3),                         // Input
            Constraint::Min(5),                            // IDs
            Constraint::Length(logs_height(f.area().height)), // Logs
            Constraint::Length(2),                         // Status
        ])
        .split(f.area());

    let ctx = app.render_context();

    TitleBar.render(f, chunks[0], &ctx);
    render_instructions(f, chunks[1], app);
    app.draft_input.render(f, chunks[2], &ctx);
    app.ids_panel.render(f, chunks[3], &ctx);
    if chunks[4].height > 0 {
        app.logs_panel.render(f, chunks[4], &ctx);
    }

    let backend = app.panel.backend_description();
    let uptime = app.uptime();
    let info = status_bar::StatusInfo {
        backend: &backend,
        submitted: app.panel.submitted_ids().len(),
        in_flight: app.panel.in_flight(),
        uptime: &uptime,
        hint: app.focus_hint(),
    };
    status_bar::render(f, chunks[5], &info, app.theme.status_bar);

    // Toasts go over everything
    app.toasts.render(f, f.area(), &app.theme);
}

fn render_instructions(f: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(app.theme.muted);
    let bold = Style::default()
        .fg(app.theme.foreground)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = INSTRUCTIONS
        .iter()
        .map(|(before, key, after)| {
            Line::from(vec![
                Span::styled(" • ", muted),
                Span::styled(*before, muted),
                Span::styled(*key, bold),
                Span::styled(*after, muted),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DemoBackend;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::panel::TextOperations;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn rendered(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn empty_app_shows_placeholder_and_empty_list() {
        let (panel, _rx) = TextOperations::new(Arc::new(DemoBackend::new()));
        let app = App::new(panel, &Config::default(), LogBuffer::new());

        let screen = rendered(&app, 120, 30);

        assert!(screen.contains("Text operations"));
        assert!(screen.contains("Enter text"));
        assert!(screen.contains("Nothing submitted yet"));
        assert!(screen.contains("System Logs"));
    }

    #[tokio::test]
    async fn submitted_ids_render_with_get_text_trigger() {
        let (panel, mut rx) = TextOperations::new(Arc::new(DemoBackend::new()));
        let mut app = App::new(panel, &Config::default(), LogBuffer::new());
        app.panel.set_draft("hello");
        app.run(crate::tui::traits::Action::AddText);
        app.settle(rx.recv().await.unwrap());

        let screen = rendered(&app, 120, 30);
        let id = app.panel.submitted_ids()[0].clone();

        assert!(screen.contains(&id));
        assert!(screen.contains("[Get text]"));
    }

    #[tokio::test]
    async fn tiny_terminal_does_not_panic() {
        let (panel, _rx) = TextOperations::new(Arc::new(DemoBackend::new()));
        let app = App::new(panel, &Config::default(), LogBuffer::new());

        rendered(&app, 20, 6);
    }
}
