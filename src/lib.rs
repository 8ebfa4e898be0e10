//! # Showcase
//!
//! The interaction layer of a small marketing site, rendered in the terminal.
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Paged catalogue: page-turn state machine, indicators, buttons, auto-advance |
//! | [`schedule`] | Single-threaded timer queue every controller schedules on |
//! | [`site`] | Mobile menu, scroll spy, contact form, reveal-on-scroll, parallax |
//! | [`viewport`] | Region/viewport geometry and intersection ratios |
//! | [`mvi`] | Intent / Reducer / State primitives |
//! | [`config`] | `config.toml` loading and validation |
//! | [`ui`] | `ratatui` front-end wiring keys and ticks into the controllers |

pub mod carousel;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod schedule;
pub mod shutdown;
pub mod site;
pub mod ui;
pub mod viewport;
