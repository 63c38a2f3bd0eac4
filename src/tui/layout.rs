/// Responsive sizing for the TUI.
///
/// Width thresholds and the height split live here so render code has no magic numbers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Rows given to the logs panel for a terminal of `height` rows.
///
/// The IDs list gets priority: logs shrink first and vanish entirely on
/// short terminals.
pub fn logs_height(height: u16) -> u16 {
    match height {
        0..=21 => 0,
        22..=29 => 5,
        _ => 8,
    }
}
