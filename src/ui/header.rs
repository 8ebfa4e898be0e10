use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Brand on the left, nav links with the active one highlighted, and
    /// the hamburger showing whether the mobile menu is open.
    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(BRAND_ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                app.site_name().to_string(),
                Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │ ", separator_style),
        ];
        for (index, link) in app.nav().links().iter().enumerate() {
            let style = if app.nav().is_active(index) {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} ", link.label), style));
        }
        let hamburger = if app.menu_open() { "  ✕" } else { "  ☰" };
        spans.push(Span::styled(hamburger, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
