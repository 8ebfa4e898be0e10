use std::time::Duration;

use tracing::{debug, info};

use crate::carousel::{
    Carousel, CarouselError, CarouselKey, CarouselSnapshot, CarouselTimer, CarouselTiming,
};
use crate::config::{CataloguePage, Config};
use crate::schedule::TimerQueue;
use crate::site::{
    hero_offset, BlockId, ContactForm, FormIntent, FormState, FormTimer, MobileMenu, NavLink,
    NavLinks, RevealAnimator, RevealOptions, RevealStyle, Section, SubmitOutcome,
};
use crate::ui::page::{rows_to_units, PageLayout};
use crate::viewport::{Viewport, LINE_HEIGHT};

/// Rows moved by one arrow-key scroll step.
const SCROLL_STEP_ROWS: u16 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Menu,
    ContactForm,
}

/// Everything on screen, owned in one place and driven by the runtime loop.
pub struct App {
    should_quit: bool,
    focus: Focus,
    now: Duration,
    config: Config,
    layout: PageLayout,
    sections: Vec<Section>,
    scroll: f32,
    viewport_rows: u16,
    menu: MobileMenu,
    nav: NavLinks,
    carousel: Carousel<TimerQueue<CarouselTimer>>,
    form: ContactForm<TimerQueue<FormTimer>>,
    reveal: RevealAnimator,
    section_blocks: Vec<BlockId>,
    content_blocks: Vec<BlockId>,
    /// Blocking notification; input is swallowed until it is dismissed.
    notice: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Result<Self, CarouselError> {
        let layout = PageLayout::build();
        let sections = layout.nav_sections();

        let links = layout
            .sections()
            .iter()
            .map(|section| NavLink::new(section.title, format!("#{}", section.id)))
            .collect();
        let nav = NavLinks::new(links, &config.nav);

        let carousel = Carousel::new(
            config.carousel.pages.len(),
            CarouselTiming::from(&config.carousel),
            TimerQueue::new(),
        )?;
        let form = ContactForm::new(&config.form, TimerQueue::new());

        let mut reveal = RevealAnimator::new();
        let section_blocks = (0..layout.sections().len())
            .filter_map(|index| layout.section_region(index))
            .map(|region| reveal.register(region, RevealOptions::section(&config.reveal)))
            .collect();
        let content_blocks = (0..layout.blocks().len())
            .filter_map(|index| layout.block_region(index))
            .map(|region| reveal.register(region, RevealOptions::content(&config.reveal)))
            .collect();

        info!(
            pages = carousel.total_pages(),
            sections = sections.len(),
            "app: page ready"
        );

        Ok(Self {
            should_quit: false,
            focus: Focus::Page,
            now: Duration::ZERO,
            config,
            layout,
            sections,
            scroll: 0.0,
            viewport_rows: 0,
            menu: MobileMenu::new(),
            nav,
            carousel,
            form,
            reveal,
            section_blocks,
            content_blocks,
            notice: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn site_name(&self) -> &str {
        &self.config.site.name
    }

    pub fn tagline(&self) -> &str {
        &self.config.site.tagline
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn pages(&self) -> &[CataloguePage] {
        &self.config.carousel.pages
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn scroll_rows(&self) -> u16 {
        (self.scroll / LINE_HEIGHT).floor() as u16
    }

    pub fn hero_offset_rows(&self) -> u16 {
        (hero_offset(self.scroll) / LINE_HEIGHT).floor() as u16
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll, rows_to_units(self.viewport_rows))
    }

    pub fn nav(&self) -> &NavLinks {
        &self.nav
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn carousel(&self) -> &Carousel<TimerQueue<CarouselTimer>> {
        &self.carousel
    }

    pub fn carousel_snapshot(&self) -> CarouselSnapshot {
        self.carousel.snapshot()
    }

    pub fn form_state(&self) -> &FormState {
        self.form.state()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn section_style(&self, index: usize) -> RevealStyle {
        self.style_of(self.section_blocks.get(index).copied())
    }

    pub fn block_style(&self, index: usize) -> RevealStyle {
        self.style_of(self.content_blocks.get(index).copied())
    }

    fn style_of(&self, id: Option<BlockId>) -> RevealStyle {
        match id {
            Some(id) => self.reveal.style(id, self.now),
            None => RevealStyle {
                opacity: 1.0,
                offset_y: 0.0,
            },
        }
    }

    /// Advance every controller's clock to `now` (time since start).
    pub fn on_tick(&mut self, now: Duration) {
        self.now = self.now.max(now);
        self.carousel.advance(self.now);
        if let Some(message) = self.form.advance(self.now) {
            self.show_notice(message);
        }
    }

    /// Body area changed size.
    pub fn on_resize(&mut self, body_rows: u16) {
        self.viewport_rows = body_rows;
        self.scroll_to(self.scroll);
    }

    pub fn scroll_by_rows(&mut self, rows: i32) {
        let delta = rows as f32 * LINE_HEIGHT;
        self.scroll_to(self.scroll + delta);
    }

    pub fn scroll_step(&mut self, down: bool) {
        let rows = i32::from(SCROLL_STEP_ROWS);
        self.scroll_by_rows(if down { rows } else { -rows });
    }

    pub fn scroll_page(&mut self, down: bool) {
        let rows = i32::from(self.viewport_rows.saturating_sub(1).max(1));
        self.scroll_by_rows(if down { rows } else { -rows });
    }

    pub fn scroll_to(&mut self, target: f32) {
        let max = (self.layout.height() - rows_to_units(self.viewport_rows)).max(0.0);
        self.scroll = target.clamp(0.0, max);
        self.refresh_viewport();
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_to(f32::MAX);
    }

    /// Re-run everything keyed off the scroll position.
    fn refresh_viewport(&mut self) {
        let viewport = self.viewport();
        self.nav.on_scroll(&self.sections, self.scroll);
        if let Some(region) = self.layout.catalogue_region() {
            self.carousel
                .set_on_screen(viewport.is_partially_visible(&region));
            self.carousel
                .set_visibility(viewport.intersection_ratio(&region, 0.0));
        }
        self.reveal.observe(&viewport, self.now);
    }

    pub fn toggle_menu(&mut self) {
        let open = self.menu.toggle();
        self.focus = if open { Focus::Menu } else { Focus::Page };
    }

    /// Click a nav link: closes the menu, highlights the link and jumps to
    /// its section.
    pub fn click_nav(&mut self, index: usize) {
        self.menu.close();
        if self.focus == Focus::Menu {
            self.focus = Focus::Page;
        }
        if let Some(target) = self.nav.scroll_target(index, &self.sections) {
            debug!(index, target, "nav: link clicked");
            self.scroll_to(target);
        }
        self.nav.click(index, &self.sections);
    }

    /// Click the link after the active one, wrapping.
    pub fn click_next_nav(&mut self) {
        let count = self.nav.links().len();
        if count == 0 {
            return;
        }
        let next = self.nav.active().map_or(0, |active| (active + 1) % count);
        self.click_nav(next);
    }

    pub fn carousel_key(&mut self, key: CarouselKey) {
        self.carousel.on_key(key);
    }

    pub fn click_prev_page(&mut self) {
        self.carousel.click_prev();
    }

    pub fn click_next_page(&mut self) {
        self.carousel.click_next();
    }

    pub fn click_indicator(&mut self, index: usize) {
        self.carousel.click_indicator(index);
    }

    pub fn open_form(&mut self) {
        self.menu.close();
        self.focus = Focus::ContactForm;
    }

    pub fn close_form(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn form_input(&mut self, intent: FormIntent) {
        self.form.dispatch(intent);
    }

    pub fn submit_form(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Rejected(err) => self.show_notice(&err.to_string()),
            SubmitOutcome::Accepted | SubmitOutcome::Busy => {}
        }
    }

    fn show_notice(&mut self, message: &str) {
        debug!(message, "app: notice shown");
        self.notice = Some(message.to_string());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
