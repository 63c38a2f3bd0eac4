// Status bar component
//
// Renders at the bottom: backend, submitted count, in-flight calls, uptime,
// and the focused component's key hints.

use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Values shown in the status bar
pub struct StatusInfo<'a> {
    pub backend: &'a str,
    pub submitted: usize,
    pub in_flight: usize,
    pub uptime: &'a str,
    pub hint: Option<&'static str>,
}

/// Adapts to terminal width:
/// - Wide: Full format with labels and key hints
/// - Narrow: Compact icon-based format
pub fn status_text(info: &StatusInfo, width: u16) -> String {
    let bp = Breakpoint::from_width(width);

    if !bp.at_least(Breakpoint::Wide) {
        return format!(
            " {} │ 📄 {} │ ⏳ {}",
            info.uptime, info.submitted, info.in_flight
        );
    }

    let mut text = format!(
        " {} │ 🔗 {} │ 📄 {} submitted │ ⏳ {} in flight",
        info.uptime, info.backend, info.submitted, info.in_flight
    );
    if let Some(hint) = info.hint {
        text.push_str(" │ ");
        text.push_str(hint);
    }
    text
}

pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo, color: ratatui::style::Color) {
    let status = Paragraph::new(status_text(info, area.width))
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
