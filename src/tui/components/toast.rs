//! Toast notification stack
//!
//! Non-blocking overlays rendered in the bottom-right corner on top of all
//! other content. Loading toasts stay until dismissed by handle; the rest
//! expire after a configurable duration. This is the terminal implementation
//! of [`Notifier`].

use crate::notify::{Notifier, ToastId, ToastKind};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Most toasts drawn at once (newest win)
const MAX_VISIBLE: usize = 5;

/// Longest a single toast may wrap to
const MAX_TEXT_LINES: u16 = 4;

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.kind != ToastKind::Loading && self.created_at.elapsed() >= ttl
    }
}

/// Ordered collection of live toasts (oldest first)
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl ToastStack {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    fn push(&mut self, kind: ToastKind, message: &str) -> ToastId {
        self.next_id += 1;
        let id = ToastId::from_raw(self.next_id);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            created_at: Instant::now(),
        });
        id
    }

    /// Drop toasts whose time is up
    pub fn clear_expired(&mut self) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| !toast.is_expired(ttl));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render the newest toasts stacked upward from the bottom-right corner
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let max_width = (area.width / 2).clamp(20, 64).min(area.width.saturating_sub(4));
        if max_width < 8 {
            return;
        }

        let mut bottom = area.bottom().saturating_sub(1);
        for toast in self.toasts.iter().rev().take(MAX_VISIBLE) {
            let text = format!("{} {}", toast.kind.icon(), toast.message);

            // 2 for borders, 2 for padding; widths stay usize until clamped
            let text_width = text.width();
            let width = (text_width + 4).min(max_width as usize) as u16;
            let inner = usize::from(width.saturating_sub(4).max(1));
            let lines = text_width.div_ceil(inner).clamp(1, MAX_TEXT_LINES as usize) as u16;
            let height = lines + 2;

            if bottom < area.y + height {
                break;
            }
            let x = area.right().saturating_sub(width + 2);
            let y = bottom - height;
            let toast_area = Rect::new(x, y, width, height);

            let color = match toast.kind {
                ToastKind::Loading => theme.loading,
                ToastKind::Success => theme.success,
                ToastKind::Warning => theme.warning,
                ToastKind::Error => theme.error,
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.background));

            let line = Line::from(vec![
                Span::styled(
                    toast.kind.icon(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(toast.message.as_str(), Style::default().fg(theme.foreground)),
            ]);
            let paragraph = Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .block(block.padding(ratatui::widgets::Padding::horizontal(1)));

            // Clear the area first so toast appears on top
            f.render_widget(Clear, toast_area);
            f.render_widget(paragraph, toast_area);

            bottom = y;
        }
    }
}

impl Notifier for ToastStack {
    fn loading(&mut self, message: &str) -> ToastId {
        self.push(ToastKind::Loading, message)
    }

    fn success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.push(ToastKind::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
