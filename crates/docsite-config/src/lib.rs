//! Site configuration model for docsite.
//!
//! Describes the pages of a documentation site and how they are grouped and
//! labeled: site identity, top navigation, a grouped sidebar and social links.
//! The resulting [`SiteConfiguration`] is handed to an external static-site
//! generator, which owns rendering, routing and asset handling.
//!
//! All types validate on construction:
//!
//! - titles and labels are non-empty
//! - navigation targets are absolute URLs or paths starting with `/`
//! - sidebar targets are paths starting with `/`
//! - sidebar groups have at least one item
//!
//! Configurations can also be loaded from `docsite.toml` (see
//! [`SiteConfiguration::load`]); the same constructors run during parsing.
//!
//! ```
//! use docsite_config::{NavLink, Sidebar, SidebarGroup, SidebarItem, SiteConfiguration, SiteMetadata};
//!
//! # fn main() -> Result<(), docsite_config::ConfigError> {
//! let config = SiteConfiguration::new(
//!     SiteMetadata::new("Docs", "Project documentation", "/logo.svg")?,
//!     vec![NavLink::new("Home", "/")?],
//!     Sidebar::new(vec![SidebarGroup::new(
//!         "Guide",
//!         vec![SidebarItem::new("Introduction", "/guide/introduction")?],
//!     )?]),
//!     Vec::new(),
//! );
//! assert!(config.lint().is_empty());
//! # Ok(())
//! # }
//! ```

mod error;
mod lint;
mod load;
mod model;
mod target;

pub use error::ConfigError;
pub use lint::Lint;
pub use load::CONFIG_FILENAME;
pub use model::{NavLink, Sidebar, SidebarGroup, SidebarItem, SiteConfiguration, SiteMetadata, SocialLink};
pub use target::LinkTarget;
