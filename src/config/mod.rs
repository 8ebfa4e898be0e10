mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    CarouselConfig, CataloguePage, Config, FormConfig, LoggingConfig, NavConfig, RevealConfig,
    SiteConfig,
};
