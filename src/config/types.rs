use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Branding shown in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name (default: "Showcase").
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Hero tagline.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

/// Catalogue carousel pages and timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Pages in display order. Must not be empty.
    #[serde(default = "default_pages")]
    pub pages: Vec<CataloguePage>,
    /// Whether the carousel advances on its own while in view (default: true).
    #[serde(default = "default_true")]
    pub auto_advance: bool,
    /// Turning-out phase in milliseconds (default: 400).
    #[serde(default = "default_turn_ms")]
    pub turn_out_ms: u64,
    /// Turning-in phase in milliseconds (default: 400).
    #[serde(default = "default_turn_ms")]
    pub turn_in_ms: u64,
    /// Auto-advance period in milliseconds (default: 8000).
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Quiet period after a click before auto-advance resumes (default: 10000).
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
    /// Visible fraction of the carousel that arms auto-advance (default: 0.5).
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
}

impl CarouselConfig {
    /// Trim the page list to `count`, or pad it with numbered placeholder
    /// pages.
    pub fn resize_pages(&mut self, count: usize) {
        let start = self.pages.len();
        self.pages.truncate(count);
        self.pages.extend((start..count).map(|index| CataloguePage {
            title: format!("Collection {}", index + 1),
            body: String::new(),
        }));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CataloguePage {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Navigation offsets, in page units (a terminal row is 20 units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// A section counts as current this far before its top (default: 100).
    #[serde(default = "default_spy_offset")]
    pub spy_offset: f32,
    /// Link clicks scroll to a section's top minus this (default: 70).
    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Simulated submission time in milliseconds (default: 2000).
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction that reveals a block (default: 0.1).
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f32,
    /// Added to the viewport's bottom edge for content blocks (default: -50).
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; `None` falls back to the cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_site_name() -> String {
    "Showcase".to_string()
}

fn default_tagline() -> String {
    "Crafted spaces, built to last".to_string()
}

fn default_pages() -> Vec<CataloguePage> {
    [
        ("Residential", "Kitchens, bathrooms and whole-home renovations."),
        ("Commercial", "Offices, retail fit-outs and hospitality interiors."),
        ("Outdoor", "Decks, landscaping and garden structures."),
        ("Bespoke", "Custom joinery and one-off commissions."),
    ]
    .into_iter()
    .map(|(title, body)| CataloguePage {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

fn default_true() -> bool {
    true
}

fn default_turn_ms() -> u64 {
    400
}

fn default_auto_advance_ms() -> u64 {
    8_000
}

fn default_quiet_period_ms() -> u64 {
    10_000
}

fn default_visibility_threshold() -> f32 {
    0.5
}

fn default_spy_offset() -> f32 {
    100.0
}

fn default_scroll_offset() -> f32 {
    70.0
}

fn default_submit_delay_ms() -> u64 {
    2_000
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_bottom_margin() -> f32 {
    -50.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            auto_advance: true,
            turn_out_ms: default_turn_ms(),
            turn_in_ms: default_turn_ms(),
            auto_advance_ms: default_auto_advance_ms(),
            quiet_period_ms: default_quiet_period_ms(),
            visibility_threshold: default_visibility_threshold(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            spy_offset: default_spy_offset(),
            scroll_offset: default_scroll_offset(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            bottom_margin: default_bottom_margin(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
