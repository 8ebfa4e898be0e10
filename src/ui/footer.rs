use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str =
    " ↑↓: Scroll │ ←→: Pages │ [ ]: Prev/Next │ 1-9: Page │ Tab: Nav │ M: Menu │ C: Contact │ Q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left; auto-advance status and version on the right.
    pub fn widget(&self, area: Rect, app: &App) -> Paragraph<'static> {
        let status = if app.carousel().auto_advance_active() {
            "▶ auto "
        } else {
            ""
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let version_width = version.chars().count() + status.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, Style::default().fg(STATUS_OK)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
