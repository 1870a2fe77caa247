//! Configuration section definitions.
//!
//! Each module corresponds to a section in `quill.toml`:
//!
//! | Module    | TOML Section | Purpose                                |
//! |-----------|--------------|----------------------------------------|
//! | `site`    | `[site]`     | Site metadata (title, author, url)     |
//! | `feed`    | `[feed]`     | Feed settings (Atom/RSS)               |
//! | `sitemap` | `[sitemap]`  | Sitemap priorities and frequencies     |
//! | `theme`   | `[theme]`    | Theme selection                        |
//! | `build`   | `[build]`    | Paths, pagination                      |
//! | `plugins` | `[plugins]`  | Rendering plugins                      |

mod build;
mod feed;
mod plugins;
mod site;
mod sitemap;
mod theme;

pub use build::BuildConfig;
pub use feed::{FeedConfig, FeedFormat};
pub use plugins::PluginsConfig;
pub use site::SiteInfoConfig;
pub use sitemap::{ChangeFreq, SitemapConfig, SitemapFormat};
pub use theme::ThemeConfig;
