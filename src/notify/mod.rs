//! Notification service contract
//!
//! The panel reports progress and outcomes through a [`Notifier`]. In the
//! terminal UI that is the toast overlay; for one-shot CLI commands it is
//! [`ConsoleNotifier`]. Loading notifications return a [`ToastId`] that the
//! caller hands back to [`Notifier::dismiss`] once the call settles.

mod console;

pub use console::ConsoleNotifier;

use std::fmt;

/// Opaque handle correlating a loading notification with its dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of notification, drives styling and lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Stays up until dismissed
    Loading,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Loading => "⏳",
            ToastKind::Success => "✓",
            ToastKind::Warning => "⚠",
            ToastKind::Error => "✗",
        }
    }
}

/// Sink for user-facing notifications
pub trait Notifier {
    /// Show a loading indicator; it stays until `dismiss` is called
    fn loading(&mut self, message: &str) -> ToastId;

    fn success(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Remove a loading indicator. Unknown or already dismissed ids are ignored.
    fn dismiss(&mut self, id: ToastId);
}
