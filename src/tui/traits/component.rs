//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::panel::TextOperations;
use crate::theme::Theme;
use ratatui::{layout::Rect, style::Color, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking and theme lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Draft text input
    Input,
    /// Submitted identifiers with their "Get text" triggers
    Ids,
    /// System logs panel (non-focusable)
    Logs,
    /// Title bar (non-focusable)
    TitleBar,
}

impl ComponentId {
    /// Whether this component can receive focus
    pub fn is_focusable(&self) -> bool {
        matches!(self, ComponentId::Input | ComponentId::Ids)
    }

    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Input => Self::Ids,
            Self::Ids => Self::Input,
            other => other, // Non-focusable stays put
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    ///
    /// With two focusable panels this is the same cycle as `next_focus`.
    pub fn prev_focus(self) -> Self {
        self.next_focus()
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners, blinking cursors)
    pub animation_frame: usize,

    /// Panel state: draft, submitted ids, in-flight count
    pub panel: &'a TextOperations,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    pub fn new(
        theme: &'a Theme,
        focus: ComponentId,
        animation_frame: usize,
        panel: &'a TextOperations,
    ) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
            panel,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Border color for a component: its identity color when focused
    pub fn border_color(&self, id: ComponentId, identity: Color) -> Color {
        if self.is_focused(id) {
            identity
        } else {
            self.theme.border
        }
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Components that take keyboard input also implement `Interactive`.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, focus, panel state)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_between_input_and_ids() {
        assert_eq!(ComponentId::Input.next_focus(), ComponentId::Ids);
        assert_eq!(ComponentId::Ids.next_focus(), ComponentId::Input);
        assert_eq!(ComponentId::Ids.prev_focus(), ComponentId::Input);
    }

    #[test]
    fn non_focusable_components_keep_focus_where_it_is() {
        assert!(!ComponentId::Logs.is_focusable());
        assert_eq!(ComponentId::Logs.next_focus(), ComponentId::Logs);
    }
}
