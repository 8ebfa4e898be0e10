//! Page-level behaviour around the carousel: mobile menu, scroll spy,
//! contact form, reveal-on-scroll and the hero parallax.

pub mod form;
pub mod menu;
pub mod nav;
pub mod parallax;
pub mod reveal;

pub use form::{
    ContactForm, FormError, FormField, FormFields, FormIntent, FormState, FormTimer, SubmitOutcome,
    THANK_YOU,
};
pub use menu::MobileMenu;
pub use nav::{NavLink, NavLinks, Section};
pub use parallax::hero_offset;
pub use reveal::{BlockId, RevealAnimator, RevealOptions, RevealStyle};
