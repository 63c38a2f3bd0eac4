//! Interactive trait for components that handle keyboard input
//!
//! Components that can receive and process keyboard events implement
//! this trait. The App routes input to the focused component.

use super::Component;
use crate::panel::TextOperations;
use crossterm::event::KeyEvent;

/// Panel operation a component asks the App to run
///
/// Components cannot reach the notifier, so instead of dispatching
/// backend calls themselves they hand the request back up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the current draft
    AddText,
    /// Retrieve text for this identifier
    FetchText(String),
}

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event, wants an
/// action run, or if it should bubble up for global handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was consumed and the component requests a panel action
    Action(Action),
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: Esc, Ctrl-C, Tab)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
///    │
///    │ returns Handled::Yes / Action / No
///    ▼
/// App (runs the action, or falls back)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// `panel` is available so editing components can update the draft in
    /// place. Backend calls are requested through `Handled::Action`.
    fn handle_key(&mut self, key: KeyEvent, panel: &mut TextOperations) -> Handled;

    /// Hint text for status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
