//! Terminal front end: renders the page and maps keys to clicks, scrolls
//! and keyboard events on the controllers in [`app::App`].

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
