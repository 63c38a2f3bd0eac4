// Theme support for the TUI
//
// Built-in palettes selected by name from config: "dark" and "light", plus
// "terminal" which sticks to the terminal's ANSI colors. Unknown names fall
// back to dark.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Notification colors
    pub loading: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI element colors
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub muted: Color,

    // Panel identity colors (used when focused)
    pub panel_input: Color,
    pub panel_ids: Color,
    pub panel_logs: Color,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,

    // Selection colors
    pub selection: Color,
    pub selection_fg: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Names accepted by `by_name`
    pub const NAMES: [&'static str; 3] = ["dark", "light", "terminal"];

    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "terminal" => Self::terminal(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(
                    "Unknown theme '{}', using dark (available: {})",
                    other,
                    Self::NAMES.join(", ")
                );
                Self::dark()
            }
        }
    }

    /// One Half Dark
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            loading: Color::Rgb(97, 175, 239),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),
            status_bar: Color::Rgb(220, 223, 228),
            title: Color::Rgb(86, 182, 194),
            border: Color::Rgb(92, 99, 112),
            highlight: Color::Rgb(229, 192, 123),
            muted: Color::Rgb(127, 132, 142),
            panel_input: Color::Rgb(97, 175, 239),
            panel_ids: Color::Rgb(198, 120, 221),
            panel_logs: Color::Rgb(152, 195, 121),
            background: Color::Rgb(40, 44, 52),
            foreground: Color::Rgb(220, 223, 228),
            selection: Color::Rgb(71, 78, 93),
            selection_fg: Color::Rgb(220, 223, 228),
            border_type: BorderType::Rounded,
        }
    }

    /// One Half Light
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            loading: Color::Rgb(1, 132, 188),
            success: Color::Rgb(80, 161, 79),
            warning: Color::Rgb(193, 132, 1),
            error: Color::Rgb(228, 86, 73),
            status_bar: Color::Rgb(56, 58, 66),
            title: Color::Rgb(9, 151, 179),
            border: Color::Rgb(160, 161, 167),
            highlight: Color::Rgb(193, 132, 1),
            muted: Color::Rgb(160, 161, 167),
            panel_input: Color::Rgb(1, 132, 188),
            panel_ids: Color::Rgb(166, 38, 164),
            panel_logs: Color::Rgb(80, 161, 79),
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            selection: Color::Rgb(229, 229, 230),
            selection_fg: Color::Rgb(56, 58, 66),
            border_type: BorderType::Rounded,
        }
    }

    /// Terminal ANSI palette, no background override
    pub fn terminal() -> Self {
        Self {
            name: "terminal".to_string(),
            loading: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            status_bar: Color::Gray,
            title: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            panel_input: Color::Blue,
            panel_ids: Color::Magenta,
            panel_logs: Color::Green,
            background: Color::Reset,
            foreground: Color::Reset,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
