//! Nav links: active-link highlighting from scroll position and
//! click-to-section scrolling.

use tracing::trace;

use crate::config::NavConfig;
use crate::viewport::Region;

/// An anchor-bearing block of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub region: Region,
}

impl Section {
    pub fn new(id: impl Into<String>, region: Region) -> Self {
        Self {
            id: id.into(),
            region,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// Anchor such as `#catalogue`.
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn target_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}

#[derive(Debug, Clone)]
pub struct NavLinks {
    links: Vec<NavLink>,
    active: Option<usize>,
    spy_offset: f32,
    scroll_offset: f32,
}

impl NavLinks {
    pub fn new(links: Vec<NavLink>, config: &NavConfig) -> Self {
        Self {
            links,
            active: None,
            spy_offset: config.spy_offset,
            scroll_offset: config.scroll_offset,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Id of the section the scroll position falls into. When sections
    /// overlap the later one wins.
    pub fn current_section<'a>(&self, sections: &'a [Section], scroll: f32) -> Option<&'a str> {
        sections
            .iter()
            .filter(|section| {
                let top = section.region.top - self.spy_offset;
                scroll >= top && scroll < top + section.region.height
            })
            .last()
            .map(|section| section.id.as_str())
    }

    /// Re-highlight after a scroll. No matching section clears every link.
    pub fn on_scroll(&mut self, sections: &[Section], scroll: f32) {
        let current = self.current_section(sections, scroll);
        let active = current.and_then(|id| self.links.iter().position(|link| link.target_id() == id));
        if active != self.active {
            trace!(?current, "nav: active link changed");
        }
        self.active = active;
    }

    /// Where clicking link `index` scrolls to: its section's top less the
    /// header offset, clamped at 0. `None` for unknown links or anchors.
    pub fn scroll_target(&self, index: usize, sections: &[Section]) -> Option<f32> {
        let id = self.links.get(index)?.target_id();
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| (section.region.top - self.scroll_offset).max(0.0))
    }

    /// Click a link: it becomes active straight away and the returned value,
    /// if any, is where the page should scroll to.
    pub fn click(&mut self, index: usize, sections: &[Section]) -> Option<f32> {
        if index >= self.links.len() {
            return None;
        }
        self.active = Some(index);
        self.scroll_target(index, sections)
    }
}
