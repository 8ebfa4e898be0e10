//! Drives the whole page through key presses and clock ticks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use showcase::config::Config;
use showcase::ui::app::{App, Focus};
use showcase::ui::input::handle_key;
use std::time::Duration;

fn app() -> App {
    let mut app = App::new(Config::default()).expect("app");
    app.on_resize(20);
    app
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn scrolling_into_catalogue_starts_auto_advance() {
    let mut app = app();
    assert!(!app.carousel().auto_advance_active());

    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::PageDown);
    assert!(app.carousel().auto_advance_active());
    assert!(app.nav().is_active(2));

    app.on_tick(Duration::from_millis(8_800));
    assert_eq!(app.carousel().current_page(), 1);

    press(&mut app, KeyCode::Home);
    assert!(!app.carousel().auto_advance_active());
    assert!(app.nav().is_active(0));
}

#[test]
fn tab_walks_nav_links() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert!(app.nav().is_active(1));
    press(&mut app, KeyCode::Tab);
    assert!(app.nav().is_active(2));
}

#[test]
fn bracket_buttons_turn_pages_and_respect_ends() {
    let mut app = app();
    press(&mut app, KeyCode::Char('['));
    assert!(!app.carousel().is_animating());

    press(&mut app, KeyCode::Char(']'));
    assert!(app.carousel().is_animating());
    app.on_tick(Duration::from_millis(800));
    assert_eq!(app.carousel_snapshot().counter, "Page 2 of 4");
}

#[test]
fn contact_form_round_trip() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.focus(), Focus::ContactForm);

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "555 0100");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Kitchen");
    press(&mut app, KeyCode::Enter);

    assert!(app.form_state().is_sending());
    assert!(app.notice().is_none());

    app.on_tick(Duration::from_millis(2_000));
    assert!(app
        .notice()
        .is_some_and(|notice| notice.starts_with("Thank you")));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Page);
    assert_eq!(app.form_state().fields().name, "");
}

#[test]
fn quit_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
