/// Hamburger-driven navigation menu. The menu and the hamburger icon always
/// share one "active" flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any nav link click closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}
