use crate::carousel::{CarouselSnapshot, Direction, PageMarks};
use crate::site::{FormField, RevealStyle};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, menu_rect};
use crate::ui::page::{units_to_rows, ContentBlock, PageSection, SectionKind};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_ACCENT, HEADER_SEPARATOR, HEADER_TEXT, HERO_PATTERN, MUTED_TEXT,
    POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Widest the catalogue "book" gets.
const BOOK_WIDTH: u16 = 60;

const CONTACT_DIALOG_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    let document = Paragraph::new(document_lines(app, body.width)).scroll((app.scroll_rows(), 0));
    frame.render_widget(document, body);
    frame.render_widget(Footer::new().widget(footer, app), footer);

    if app.menu_open() {
        render_menu(frame, app, area);
    }
    if app.focus() == Focus::ContactForm {
        render_contact_form(frame, app, area);
    }
    if let Some(message) = app.notice() {
        render_notice(frame, message, area);
    }
}

/// The whole page, one line per row, with reveal styles applied.
pub fn document_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let layout = app.layout();
    let mut lines = Vec::with_capacity(usize::from(layout.total_rows()));

    for (index, section) in layout.sections().iter().enumerate() {
        let mut section_lines = match section.kind {
            SectionKind::Hero => hero_lines(app, section, width),
            SectionKind::Catalogue => catalogue_lines(app, width),
            SectionKind::Services | SectionKind::Contact => heading_lines(section),
        };
        section_lines.resize(usize::from(section.rows), Line::default());

        for (block_index, block) in layout.blocks().iter().enumerate() {
            if block.section != index {
                continue;
            }
            let start = usize::from(block.first_row - section.first_row);
            let end = (start + usize::from(block.rows)).min(section_lines.len());
            for (slot, line) in section_lines[start..end].iter_mut().zip(card_lines(block)) {
                *slot = line;
            }
            apply_reveal(&mut section_lines[start..end], app.block_style(block_index));
        }

        apply_reveal(&mut section_lines, app.section_style(index));
        lines.extend(section_lines);
    }
    lines
}

/// Hidden blocks are blank, fading blocks are dimmed, and both slide down
/// by their remaining offset.
fn apply_reveal(lines: &mut [Line<'static>], style: RevealStyle) {
    if style.opacity <= 0.0 {
        lines.iter_mut().for_each(|line| *line = Line::default());
        return;
    }
    if style.opacity < 1.0 {
        for line in lines.iter_mut() {
            *line = std::mem::take(line).patch_style(Style::default().add_modifier(Modifier::DIM));
        }
    }
    let shift = usize::from(units_to_rows(style.offset_y)).min(lines.len());
    if shift > 0 {
        lines.rotate_right(shift);
        lines[..shift]
            .iter_mut()
            .for_each(|line| *line = Line::default());
    }
}

fn hero_lines(app: &App, section: &PageSection, width: u16) -> Vec<Line<'static>> {
    let offset = usize::from(app.hero_offset_rows());
    let title_style = Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(HEADER_TEXT);

    (0..usize::from(section.rows))
        .map(|row| match row {
            4 => centered(app.site_name(), width, title_style),
            6 => centered(app.tagline(), width, text_style),
            _ => Line::styled(hero_pattern(row + offset, width), Style::default().fg(HERO_PATTERN)),
        })
        .collect()
}

/// Diagonal hatching; `row` already includes the parallax shift.
fn hero_pattern(row: usize, width: u16) -> String {
    let phase = row % 6;
    (0..usize::from(width))
        .map(|col| if (col + phase) % 6 == 0 { '╱' } else { ' ' })
        .collect()
}

fn heading_lines(section: &PageSection) -> Vec<Line<'static>> {
    let title_style = Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);
    vec![
        Line::default(),
        Line::from(vec![Span::raw("  "), Span::styled(section.title, title_style)]),
        Line::styled(
            format!("  {}", "─".repeat(section.title.chars().count())),
            Style::default().fg(HEADER_SEPARATOR),
        ),
    ]
}

fn card_lines(block: &ContentBlock) -> Vec<Line<'static>> {
    let bar = Span::styled("  ▍ ", Style::default().fg(BRAND_ACCENT));
    vec![
        Line::from(vec![
            bar.clone(),
            Span::styled(
                block.title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![bar, Span::styled(block.body, Style::default().fg(MUTED_TEXT))]),
    ]
}

fn catalogue_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let snapshot = app.carousel_snapshot();
    let section = app
        .layout()
        .sections()
        .iter()
        .find(|section| section.kind == SectionKind::Catalogue);
    let mut lines = section.map(heading_lines).unwrap_or_default();

    let inner = usize::from(BOOK_WIDTH.min(width.saturating_sub(6)));
    let border = Style::default().fg(HEADER_SEPARATOR);
    lines.push(Line::default());
    lines.push(Line::styled(format!("  ┌{}┐", "─".repeat(inner)), border));
    for line in book_lines(app, &snapshot, inner) {
        let mut spans = vec![Span::styled("  │", border)];
        spans.extend(line.spans);
        spans.push(Span::styled("│", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(format!("  └{}┘", "─".repeat(inner)), border));
    lines.push(Line::default());
    lines.push(indicator_line(&snapshot));
    lines.push(Line::styled(
        format!("  {}", snapshot.counter),
        Style::default().fg(MUTED_TEXT),
    ));
    lines.push(Line::default());
    lines.push(button_line(&snapshot));
    lines
}

/// Page body inside the book frame, styled by the page's turn marks.
fn book_lines(app: &App, snapshot: &CarouselSnapshot, inner: usize) -> Vec<Line<'static>> {
    let shown = snapshot
        .pages
        .iter()
        .enumerate()
        .find(|(_, marks)| marks.active || marks.turning_in);
    let Some((index, marks)) = shown else {
        return vec![Line::raw(" ".repeat(inner)); 3];
    };
    let Some(page) = app.pages().get(index) else {
        return vec![Line::raw(" ".repeat(inner)); 3];
    };

    let style = page_style(*marks);
    let arrow = match (marks.turning_out || marks.turning_in, snapshot.direction) {
        (true, Some(Direction::Next)) => " →",
        (true, Some(Direction::Prev)) => " ←",
        _ => "",
    };
    vec![
        Line::styled(
            fit(&format!(" {}{}", page.title, arrow), inner),
            style.add_modifier(Modifier::BOLD),
        ),
        Line::styled(fit(&format!(" {}", page.body), inner), style),
        Line::raw(" ".repeat(inner)),
    ]
}

fn page_style(marks: PageMarks) -> Style {
    let base = Style::default().fg(HEADER_TEXT);
    if marks.turning_out {
        base.add_modifier(Modifier::DIM)
    } else if marks.turning_in {
        base.add_modifier(Modifier::ITALIC | Modifier::DIM)
    } else {
        base
    }
}

fn indicator_line(snapshot: &CarouselSnapshot) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, active) in snapshot.indicators.iter().enumerate() {
        let (dot, style) = if *active {
            ("●", Style::default().fg(BRAND_ACCENT))
        } else {
            ("○", Style::default().fg(MUTED_TEXT))
        };
        spans.push(Span::styled(dot, style));
        spans.push(Span::styled(
            format!("{} ", index + 1),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

fn button_line(snapshot: &CarouselSnapshot) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    };
    Line::from(vec![
        Span::raw("  "),
        button(" ◀ Prev ", snapshot.prev_enabled),
        Span::raw("   "),
        button(" Next ▶ ", snapshot.next_enabled),
    ])
}

fn render_menu(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let links = app.nav().links();
    let height = u16::try_from(links.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = menu_rect(24, height, area);

    let lines: Vec<Line<'static>> = links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let style = if app.nav().is_active(index) {
                Style::default().fg(BRAND_ACCENT).bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Line::styled(format!(" {}  {}", index + 1, link.label), style)
        })
        .collect();

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        rect,
    );
}

fn render_contact_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.form_state();
    let label_width = FormField::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::default()];
    for field in FormField::ALL {
        let focused = state.focused() == Some(field);
        let marker = if field.is_required() { "*" } else { " " };
        let cursor = if focused { "▏" } else { "" };
        let value_style = if focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>width$}{} ", field.label(), marker, width = label_width),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(format!("{}{}", state.fields().get(field), cursor), value_style),
        ]));
    }
    lines.push(Line::default());

    let button_style = if state.submit_enabled() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", state.submit_label()), button_style),
    ]));
    lines.push(Line::styled(
        "  Tab: next field │ Enter: send │ Esc: close",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    ));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = centered_rect_by_size(CONTACT_DIALOG_WIDTH, height, area);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Contact Us ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        rect,
    );
}

fn render_notice(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let rect = centered_rect_by_size(width, 6, area);
    let is_error = message.starts_with("Please");
    let message_style = Style::default().fg(if is_error { STATUS_ERROR } else { STATUS_OK });

    let lines = vec![
        Line::default(),
        Line::styled(message.to_string(), message_style),
        Line::default(),
        Line::styled(
            "[Enter] OK",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        rect,
    );
}

fn centered(text: &str, width: u16, style: Style) -> Line<'static> {
    let pad = usize::from(width).saturating_sub(text.chars().count()) / 2;
    Line::styled(format!("{}{}", " ".repeat(pad), text), style)
}

/// Truncate or pad to exactly `width` chars.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}
