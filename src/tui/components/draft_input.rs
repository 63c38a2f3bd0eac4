//! Draft text input
//!
//! Single-line editor bound to the panel's draft. The component only owns
//! the cursor; the text itself lives in `TextOperations` so a successful
//! submission can clear it. Enter requests `Action::AddText`.

use crate::panel::TextOperations;
use crate::tui::traits::{Action, Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Enter text";

#[derive(Debug, Default)]
pub struct DraftInput {
    /// Cursor position in chars (not bytes)
    cursor: usize,
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor clamped to the current draft; the draft can shrink underneath us
    fn cursor_in(&self, draft: &str) -> usize {
        self.cursor.min(draft.chars().count())
    }

    fn byte_index(draft: &str, char_idx: usize) -> usize {
        draft
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(draft.len())
    }

    fn insert(&mut self, draft: &mut String, c: char) {
        let cursor = self.cursor_in(draft);
        draft.insert(Self::byte_index(draft, cursor), c);
        self.cursor = cursor + 1;
    }

    fn backspace(&mut self, draft: &mut String) {
        let cursor = self.cursor_in(draft);
        if cursor == 0 {
            return;
        }
        draft.remove(Self::byte_index(draft, cursor - 1));
        self.cursor = cursor - 1;
    }

    fn delete(&mut self, draft: &mut String) {
        let cursor = self.cursor_in(draft);
        if cursor < draft.chars().count() {
            draft.remove(Self::byte_index(draft, cursor));
        }
        self.cursor = cursor;
    }
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Drop leading chars until at least `columns` display columns are gone
///
/// Returns the rest of the text and how many columns were actually skipped
/// (more than asked when a wide char straddles the boundary).
fn skip_columns(text: &str, columns: usize) -> (&str, usize) {
    let mut skipped = 0;
    for (idx, c) in text.char_indices() {
        if skipped >= columns {
            return (&text[idx..], skipped);
        }
        skipped += char_width(c);
    }
    ("", skipped)
}

impl Component for DraftInput {
    fn id(&self) -> ComponentId {
        ComponentId::Input
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let draft = ctx.panel.draft();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(ctx.border_color(self.id(), theme.panel_input)))
            .title(" Text ")
            .title_top(Line::from(" [Enter] Add ").right_aligned());
        let inner = block.inner(area);

        // Keep the cursor inside the visible window. Column math stays in
        // usize: a pasted draft can be wider than u16::MAX.
        let cursor = self.cursor_in(draft);
        let cursor_col = draft.chars().take(cursor).map(char_width).sum::<usize>();
        let view_width = usize::from(inner.width.saturating_sub(1));
        let (visible, scrolled) = skip_columns(draft, cursor_col.saturating_sub(view_width));

        let paragraph = if draft.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(visible).style(Style::default().fg(theme.foreground))
        };

        f.render_widget(paragraph.block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            let offset = cursor_col.saturating_sub(scrolled).min(view_width) as u16;
            f.set_cursor_position(Position::new(inner.x + offset, inner.y));
        }
    }
}

impl Interactive for DraftInput {
    fn handle_key(&mut self, key: KeyEvent, panel: &mut TextOperations) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let draft = panel.draft_mut();

        match key.code {
            KeyCode::Enter => return Handled::Action(Action::AddText),
            KeyCode::Char('u') if ctrl => {
                draft.clear();
                self.cursor = 0;
            }
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = draft.chars().count(),
            KeyCode::Char(_) if ctrl => return Handled::No,
            KeyCode::Char(c) => self.insert(draft, c),
            KeyCode::Backspace => self.backspace(draft),
            KeyCode::Delete => self.delete(draft),
            KeyCode::Left => self.cursor = self.cursor_in(draft).saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor_in(draft) + 1).min(draft.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = draft.chars().count(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type text  Enter:add  Ctrl-U:clear  Tab:ids")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DemoBackend;
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn panel() -> TextOperations {
        TextOperations::new(Arc::new(DemoBackend::new())).0
    }

    fn press(input: &mut DraftInput, panel: &mut TextOperations, code: KeyCode) -> Handled {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE), panel)
    }

    fn type_str(input: &mut DraftInput, panel: &mut TextOperations, s: &str) {
        for c in s.chars() {
            press(input, panel, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_edits_the_panel_draft() {
        let mut panel = panel();
        let mut input = DraftInput::new();

        type_str(&mut input, &mut panel, "héllo");
        press(&mut input, &mut panel, KeyCode::Backspace);

        assert_eq!(panel.draft(), "héll");
    }

    #[test]
    fn cursor_movement_inserts_in_the_middle() {
        let mut panel = panel();
        let mut input = DraftInput::new();

        type_str(&mut input, &mut panel, "ac");
        press(&mut input, &mut panel, KeyCode::Left);
        press(&mut input, &mut panel, KeyCode::Char('b'));
        press(&mut input, &mut panel, KeyCode::Home);
        press(&mut input, &mut panel, KeyCode::Delete);

        assert_eq!(panel.draft(), "bc");
    }

    #[test]
    fn enter_requests_add() {
        let mut panel = panel();
        let mut input = DraftInput::new();

        assert_eq!(
            press(&mut input, &mut panel, KeyCode::Enter),
            Handled::Action(Action::AddText)
        );
    }

    fn render_focused(panel: &TextOperations, input: &DraftInput) -> (String, Position) {
        let theme = Theme::dark();
        let ctx = RenderContext::new(&theme, ComponentId::Input, 0, panel);
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal.draw(|f| input.render(f, f.area(), &ctx)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let screen = buffer.content().iter().map(|c| c.symbol()).collect();
        (screen, terminal.get_cursor_position().unwrap())
    }

    #[test]
    fn cursor_stays_inside_box_for_long_draft() {
        let mut panel = panel();
        let mut input = DraftInput::new();
        panel.set_draft(format!("start{}end", "x".repeat(70_000)));
        press(&mut input, &mut panel, KeyCode::End);

        let (screen, cursor) = render_focused(&panel, &input);

        // Box is 40 wide: inner columns 1..=38
        assert!(cursor.x >= 1 && cursor.x <= 38, "cursor at {:?}", cursor);
        assert_eq!(cursor.y, 1);
        assert!(screen.contains("xend"));
        assert!(!screen.contains("start"));
    }

    #[test]
    fn short_draft_is_not_scrolled() {
        let mut panel = panel();
        let mut input = DraftInput::new();
        type_str(&mut input, &mut panel, "hello");

        let (screen, cursor) = render_focused(&panel, &input);

        assert!(screen.contains("hello"));
        assert_eq!(cursor, Position::new(6, 1));
    }

    #[test]
    fn skip_columns_accounts_for_wide_chars() {
        assert_eq!(skip_columns("abc", 0), ("abc", 0));
        assert_eq!(skip_columns("abc", 2), ("c", 2));
        // 'あ' is two columns wide
        assert_eq!(skip_columns("あい", 1), ("い", 2));
        assert_eq!(skip_columns("ab", 5), ("", 2));
    }

    #[test]
    fn cleared_draft_does_not_strand_the_cursor() {
        let mut panel = panel();
        let mut input = DraftInput::new();

        type_str(&mut input, &mut panel, "submitted");
        // What a successful add does to the draft
        panel.set_draft("");
        type_str(&mut input, &mut panel, "x");

        assert_eq!(panel.draft(), "x");
    }

    #[test]
    fn ctrl_u_clears_and_other_ctrl_keys_bubble_up() {
        let mut panel = panel();
        let mut input = DraftInput::new();
        type_str(&mut input, &mut panel, "abc");

        let cleared = input.handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut panel,
        );
        let bubbled = input.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut panel,
        );

        assert_eq!(cleared, Handled::Yes);
        assert_eq!(bubbled, Handled::No);
        assert_eq!(panel.draft(), "");
    }
}
