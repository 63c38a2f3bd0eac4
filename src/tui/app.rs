// TUI application state
//
// App owns the panel, the toast stack and the per-component UI state. It
// routes keys to the focused component, runs the actions components ask
// for, and applies settled backend calls. All of this happens on the UI
// loop, so panel state is only ever touched from one place.

use super::components::{DraftInput, IdsPanel, LogsPanel, ToastStack};
use super::traits::{Action, ComponentId, Handled, Interactive, RenderContext};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::panel::{Settled, TextOperations};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// Draft, submitted ids and backend handle
    pub panel: TextOperations,

    /// Notification overlay
    pub toasts: ToastStack,

    /// Current color theme
    pub theme: Theme,

    /// Which panel receives keys
    pub focus: ComponentId,

    pub draft_input: DraftInput,
    pub ids_panel: IdsPanel,
    pub logs_panel: LogsPanel,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(panel: TextOperations, config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            panel,
            toasts: ToastStack::new(config.toast_duration),
            theme: Theme::by_name(&config.theme),
            focus: ComponentId::Input,
            draft_input: DraftInput::new(),
            ids_panel: IdsPanel::new(),
            logs_panel: LogsPanel::new(log_buffer),
            animation_frame: 0,
            start_time: Instant::now(),
            should_quit: false,
        }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.theme, self.focus, self.animation_frame, &self.panel)
    }

    pub fn set_focus(&mut self, id: ComponentId) {
        if id.is_focusable() {
            self.focus = id;
        }
    }

    /// Advance animation frame for spinners and drop expired toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.toasts.clear_expired();
    }

    /// Key hints for the focused component
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            ComponentId::Input => self.draft_input.focus_hint(),
            ComponentId::Ids => self.ids_panel.focus_hint(),
            _ => None,
        }
    }

    /// Handle keyboard input
    /// Layered dispatch: Global → Focused component → Fallback
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Layer 1: global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next_focus());
                return;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev_focus());
                return;
            }
            _ => {}
        }

        // Layer 2: focused component
        let handled = match self.focus {
            ComponentId::Input => self.draft_input.handle_key(key, &mut self.panel),
            ComponentId::Ids => self.ids_panel.handle_key(key, &mut self.panel),
            _ => Handled::No,
        };

        match handled {
            Handled::Action(action) => self.run(action),
            Handled::Yes => {}
            // Layer 3: fallbacks that would otherwise eat typed characters
            Handled::No => {
                if self.focus == ComponentId::Ids
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                {
                    self.should_quit = true;
                }
            }
        }
    }

    /// Dispatch a panel operation; the outcome arrives later via `settle`
    pub fn run(&mut self, action: Action) {
        match action {
            Action::AddText => {
                self.panel.add_text(&mut self.toasts);
            }
            Action::FetchText(id) => self.panel.fetch_text(&id, &mut self.toasts),
        }
    }

    /// Apply a finished backend call
    pub fn settle(&mut self, settled: Settled) {
        self.panel.settle(settled, &mut self.toasts);
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}
