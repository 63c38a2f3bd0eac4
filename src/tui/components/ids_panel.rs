//! Submitted identifiers panel
//!
//! Lists every identifier returned by a successful submission, in order,
//! each with a "Get text" trigger. Enter (or `g`) on a row requests
//! `Action::FetchText` for that identifier.

use crate::panel::TextOperations;
use crate::tui::traits::{Action, Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const GET_TEXT_LABEL: &str = "[Get text]";

#[derive(Debug, Default)]
pub struct IdsPanel {
    /// Selected row (None = nothing picked yet, Enter uses the newest id)
    pub selected: Option<usize>,
}

impl IdsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn select_previous(&mut self, count: usize) {
        self.selected = match self.selected {
            Some(idx) => Some(idx.saturating_sub(1)),
            None => count.checked_sub(1),
        };
    }

    fn select_next(&mut self, count: usize) {
        self.selected = match self.selected {
            Some(idx) if idx + 1 < count => Some(idx + 1),
            Some(idx) => Some(idx),
            None => count.checked_sub(1),
        };
    }

    /// Row Enter would act on
    fn target(&self, count: usize) -> Option<usize> {
        self.selected
            .filter(|idx| *idx < count)
            .or_else(|| count.checked_sub(1))
    }

    /// First row to draw so the selection stays visible
    fn window_start(&self, count: usize, height: usize) -> usize {
        if height == 0 || count <= height {
            return 0;
        }
        match self.target(count) {
            Some(idx) if idx >= height => idx + 1 - height,
            _ => 0,
        }
    }
}

impl Component for IdsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Ids
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let ids = ctx.panel.submitted_ids();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(ctx.border_color(self.id(), theme.panel_ids)))
            .title(format!(" Available text IDs ({}) ", ids.len()));

        if ids.is_empty() {
            let empty = Paragraph::new("Nothing submitted yet")
                .style(Style::default().fg(theme.muted))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let height = block.inner(area).height as usize;
        let start = self.window_start(ids.len(), height);
        let highlighted = if focused { self.target(ids.len()) } else { None };

        let items: Vec<ListItem> = ids
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(idx, id)| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>3}. ", idx + 1),
                        Style::default().fg(theme.muted),
                    ),
                    Span::styled(id.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(GET_TEXT_LABEL, Style::default().fg(theme.highlight)),
                ]);

                let style = if highlighted == Some(idx) {
                    Style::default().fg(theme.selection_fg).bg(theme.selection)
                } else {
                    Style::default().fg(theme.foreground)
                };
                ListItem::new(line).style(style)
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }
}

impl Interactive for IdsPanel {
    fn handle_key(&mut self, key: KeyEvent, panel: &mut TextOperations) -> Handled {
        let count = panel.submitted_ids().len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(count),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(count),
            KeyCode::Home => self.selected = (count > 0).then_some(0),
            KeyCode::End => self.selected = count.checked_sub(1),
            KeyCode::Enter | KeyCode::Char('g') => {
                return match self.target(count) {
                    Some(idx) => {
                        self.selected = Some(idx);
                        Handled::Action(Action::FetchText(panel.submitted_ids()[idx].clone()))
                    }
                    None => Handled::Yes,
                };
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Enter/g:get text  Tab:input  q:quit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{BackendClient, ClientError, OperationResult, TextRecord};
    use crate::notify::{Notifier, ToastId};
    use async_trait::async_trait;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;

    struct FixedIds;

    #[async_trait]
    impl BackendClient for FixedIds {
        async fn post_text(&self, text: &str) -> Result<OperationResult, ClientError> {
            Ok(OperationResult::ok(
                "ok",
                TextRecord {
                    id: text.to_string(),
                    text: text.to_string(),
                },
            ))
        }
        async fn get_text(&self, _id: &str) -> Result<OperationResult, ClientError> {
            Ok(OperationResult::failed("unused"))
        }
        fn describe(&self) -> String {
            "fixed".into()
        }
    }

    struct Quiet;
    impl Notifier for Quiet {
        fn loading(&mut self, _: &str) -> ToastId {
            ToastId::from_raw(0)
        }
        fn success(&mut self, _: &str) {}
        fn warning(&mut self, _: &str) {}
        fn error(&mut self, _: &str) {}
        fn dismiss(&mut self, _: ToastId) {}
    }

    /// Panel whose submitted list holds `ids` (the backend echoes text as id)
    async fn panel_with(ids: &[&str]) -> TextOperations {
        let (mut panel, mut rx) = TextOperations::new(Arc::new(FixedIds));
        for id in ids {
            panel.set_draft(*id);
            panel.add_text(&mut Quiet);
            let settled = rx.recv().await.unwrap();
            panel.settle(settled, &mut Quiet);
        }
        panel
    }

    fn press(ids: &mut IdsPanel, panel: &mut TextOperations, code: KeyCode) -> Handled {
        ids.handle_key(KeyEvent::new(code, KeyModifiers::NONE), panel)
    }

    #[tokio::test]
    async fn enter_without_selection_fetches_newest() {
        let mut panel = panel_with(&["a", "b", "c"]).await;
        let mut ids = IdsPanel::new();

        assert_eq!(
            press(&mut ids, &mut panel, KeyCode::Enter),
            Handled::Action(Action::FetchText("c".into()))
        );
    }

    #[tokio::test]
    async fn navigation_picks_the_row_to_fetch() {
        let mut panel = panel_with(&["a", "b", "c"]).await;
        let mut ids = IdsPanel::new();

        press(&mut ids, &mut panel, KeyCode::Home);
        press(&mut ids, &mut panel, KeyCode::Down);

        assert_eq!(
            press(&mut ids, &mut panel, KeyCode::Char('g')),
            Handled::Action(Action::FetchText("b".into()))
        );
    }

    #[tokio::test]
    async fn selection_stays_in_bounds() {
        let mut panel = panel_with(&["a", "b"]).await;
        let mut ids = IdsPanel::new();

        for _ in 0..5 {
            press(&mut ids, &mut panel, KeyCode::Down);
        }
        assert_eq!(ids.selected, Some(1));
        for _ in 0..5 {
            press(&mut ids, &mut panel, KeyCode::Up);
        }
        assert_eq!(ids.selected, Some(0));
    }

    #[tokio::test]
    async fn enter_on_empty_list_does_nothing() {
        let mut panel = panel_with(&[]).await;
        let mut ids = IdsPanel::new();

        assert_eq!(press(&mut ids, &mut panel, KeyCode::Enter), Handled::Yes);
    }

    #[test]
    fn window_follows_selection() {
        let ids = IdsPanel { selected: Some(9) };
        assert_eq!(ids.window_start(10, 4), 6);
        assert_eq!(ids.window_start(3, 4), 0);
    }
}
