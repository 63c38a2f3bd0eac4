// Title bar component
//
// Renders the app title with a spinner while backend calls are in flight.

use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TitleBar;

impl Component for TitleBar {
    fn id(&self) -> ComponentId {
        ComponentId::TitleBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let pending = ctx.panel.in_flight();
        let title_text = if pending > 0 {
            format!(
                " 📝 Text operations  {} {} pending",
                ctx.spinner_char(),
                pending
            )
        } else {
            " 📝 Text operations".to_string()
        };

        let title = Paragraph::new(title_text)
            .style(
                Style::default()
                    .fg(ctx.theme.title)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(ctx.theme.border_type)
                    .border_style(Style::default().fg(ctx.theme.title))
                    .title_top(Line::from(" Esc:quit ").right_aligned()),
            );

        f.render_widget(title, area);
    }
}
