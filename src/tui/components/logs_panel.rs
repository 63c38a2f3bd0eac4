//! Logs panel component
//!
//! Shows the tail of the system log buffer, color-coded by level. Always
//! follows the newest entries; it never takes focus.

use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Shared with the tracing layer that fills it
    buffer: LogBuffer,
}

impl LogsPanel {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

/// `[HH:MM:SS] LEVEL target: message`
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let visible = area.height.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .buffer
            .recent(visible)
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" System Logs ")
                .title_style(Style::default().fg(theme.panel_logs)),
        );

        f.render_widget(list, area);
    }
}
