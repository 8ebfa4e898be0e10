use crate::carousel::CarouselKey;
use crate::site::FormIntent;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press. An open notice swallows everything but its own
/// dismissal; then the contact form, the menu and finally the page.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    match app.focus() {
        Focus::ContactForm => handle_form_key(app, key),
        Focus::Menu => handle_menu_key(app, key),
        Focus::Page => handle_page_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_input(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.form_input(FormIntent::FocusPrev),
        KeyCode::Backspace => app.form_input(FormIntent::Backspace),
        KeyCode::Char(ch) => app.form_input(FormIntent::Input(ch)),
        _ => {}
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_menu(),
        KeyCode::Char(ch) => {
            if let Some(index) = digit_index(ch) {
                app.click_nav(index);
            }
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Up => app.scroll_step(false),
        KeyCode::Down => app.scroll_step(true),
        KeyCode::PageUp => app.scroll_page(false),
        KeyCode::PageDown => app.scroll_page(true),
        KeyCode::Home => app.scroll_to(0.0),
        KeyCode::End => app.scroll_to_end(),
        KeyCode::Left => app.carousel_key(CarouselKey::ArrowLeft),
        KeyCode::Right => app.carousel_key(CarouselKey::ArrowRight),
        KeyCode::Tab => app.click_next_nav(),
        KeyCode::Char('[') => app.click_prev_page(),
        KeyCode::Char(']') => app.click_next_page(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_menu(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.open_form(),
        KeyCode::Char(ch) => {
            if let Some(index) = digit_index(ch) {
                app.click_indicator(index);
            }
        }
        _ => {}
    }
}

/// '1'..'9' to a zero-based index.
fn digit_index(ch: char) -> Option<usize> {
    match ch.to_digit(10) {
        Some(digit @ 1..=9) => Some(digit as usize - 1),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
