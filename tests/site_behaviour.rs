use showcase::config::{FormConfig, NavConfig, RevealConfig};
use showcase::schedule::TimerQueue;
use showcase::site::{
    hero_offset, ContactForm, FormError, FormField, FormIntent, FormTimer, MobileMenu, NavLink,
    NavLinks, RevealAnimator, RevealOptions, Section, SubmitOutcome, THANK_YOU,
};
use showcase::viewport::{Region, Viewport};
use std::time::Duration;

fn sections() -> Vec<Section> {
    vec![
        Section::new("home", Region::new(0.0, 800.0)),
        Section::new("about", Region::new(800.0, 600.0)),
        Section::new("contact", Region::new(1_400.0, 600.0)),
    ]
}

fn nav() -> NavLinks {
    NavLinks::new(
        vec![
            NavLink::new("Home", "#home"),
            NavLink::new("About", "#about"),
            NavLink::new("Contact", "#contact"),
        ],
        &NavConfig::default(),
    )
}

fn form() -> ContactForm<TimerQueue<FormTimer>> {
    ContactForm::new(&FormConfig::default(), TimerQueue::new())
}

fn type_into(form: &mut ContactForm<TimerQueue<FormTimer>>, field: FormField, text: &str) {
    form.focus(field);
    for ch in text.chars() {
        form.dispatch(FormIntent::Input(ch));
    }
}

#[test]
fn scroll_spy_switches_section_early() {
    let mut nav = nav();
    let sections = sections();

    nav.on_scroll(&sections, 0.0);
    assert!(nav.is_active(0));

    // 100 units before "about" starts, it already counts as current.
    nav.on_scroll(&sections, 699.0);
    assert!(nav.is_active(0));
    nav.on_scroll(&sections, 700.0);
    assert!(nav.is_active(1));

    nav.on_scroll(&sections, 1_300.0);
    assert!(nav.is_active(2));
}

#[test]
fn nav_click_targets_section_minus_header() {
    let mut nav = nav();
    let sections = sections();

    assert_eq!(nav.click(1, &sections), Some(730.0));
    assert!(nav.is_active(1));
    assert_eq!(nav.click(0, &sections), Some(0.0));
    assert_eq!(nav.click(9, &sections), None);
}

#[test]
fn nav_link_to_unknown_section_scrolls_nowhere() {
    let mut nav = NavLinks::new(
        vec![NavLink::new("Blog", "/blog")],
        &NavConfig::default(),
    );
    assert_eq!(nav.click(0, &sections()), None);
}

#[test]
fn menu_toggles_and_closes() {
    let mut menu = MobileMenu::new();
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(hero_offset(0.0), 0.0);
    assert_eq!(hero_offset(400.0), 200.0);
}

#[test]
fn blank_required_field_is_rejected() {
    let mut form = form();
    type_into(&mut form, FormField::Name, "   ");
    type_into(&mut form, FormField::Email, "ada@example.com");
    type_into(&mut form, FormField::Phone, "555 0100");
    type_into(&mut form, FormField::Service, "Kitchen");

    assert_eq!(
        form.submit(),
        SubmitOutcome::Rejected(FormError::MissingFields)
    );
}

#[test]
fn malformed_email_is_rejected_after_required_check() {
    let mut form = form();
    type_into(&mut form, FormField::Name, "Ada");
    type_into(&mut form, FormField::Email, "ada@example");
    type_into(&mut form, FormField::Phone, "555 0100");
    type_into(&mut form, FormField::Service, "Kitchen");

    let outcome = form.submit();
    assert_eq!(outcome, SubmitOutcome::Rejected(FormError::InvalidEmail));
    assert_eq!(
        FormError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
    assert_eq!(form.state().fields().email, "ada@example");
}

#[test]
fn message_is_optional() {
    let mut form = form();
    type_into(&mut form, FormField::Name, "Ada");
    type_into(&mut form, FormField::Email, "ada@example.com");
    type_into(&mut form, FormField::Phone, "555 0100");
    type_into(&mut form, FormField::Service, "Kitchen");

    assert_eq!(form.submit(), SubmitOutcome::Accepted);
    assert!(form.state().is_sending());
    assert!(!form.state().submit_enabled());
    assert_eq!(form.advance(Duration::from_millis(2_000)), Some(THANK_YOU));
    assert_eq!(form.state().fields().name, "");
}

#[test]
fn sending_form_ignores_typing() {
    let mut form = form();
    type_into(&mut form, FormField::Name, "Ada");
    type_into(&mut form, FormField::Email, "ada@example.com");
    type_into(&mut form, FormField::Phone, "555");
    type_into(&mut form, FormField::Service, "Deck");
    form.submit();

    form.dispatch(FormIntent::Input('x'));
    form.dispatch(FormIntent::Backspace);
    assert_eq!(form.state().fields().service, "Deck");
}

#[test]
fn reveal_blocks_fire_once_in_scroll_order() {
    let config = RevealConfig::default();
    let mut animator = RevealAnimator::new();
    let top = animator.register(Region::new(100.0, 200.0), RevealOptions::content(&config));
    let bottom = animator.register(Region::new(1_200.0, 200.0), RevealOptions::content(&config));

    let first = animator.observe(&Viewport::new(0.0, 600.0), Duration::ZERO);
    assert_eq!(first, vec![top]);

    let second = animator.observe(&Viewport::new(800.0, 600.0), Duration::from_secs(1));
    assert_eq!(second, vec![bottom]);

    let style = animator.style(bottom, Duration::from_millis(1_300));
    assert!((style.opacity - 0.5).abs() < 1e-4);
    assert!((style.offset_y - 15.0).abs() < 1e-3);
}
