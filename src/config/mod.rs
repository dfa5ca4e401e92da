//! Configuration module

mod site;
mod theme;

pub use site::Adapter;
pub use site::CollectionConfig;
pub use site::SiteConfig;
pub use theme::DarkMode;
pub use theme::ThemeConfig;
