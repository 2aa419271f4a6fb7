//! Site configuration tree.
//!
//! Every type here is constructed through a validating constructor and exposes
//! read-only accessors, so a value that exists is a value that satisfies its
//! invariants. Deserialization parses into private raw structs first and then
//! runs the same constructors, prefixing errors with the field path.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{at, require_non_empty};
use crate::{ConfigError, LinkTarget};

static PLATFORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap());

/// Site identity: title, description and icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    title: String,
    description: String,
    icon: String,
}

impl SiteMetadata {
    /// Create site metadata.
    ///
    /// `icon` is a path to a favicon-like asset, resolved by the generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `title` or `icon` is empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let title = title.into();
        let icon = icon.into();
        require_non_empty(&title, "title")?;
        require_non_empty(&icon, "icon")?;
        Ok(Self {
            title,
            description: description.into(),
            icon,
        })
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Icon asset path.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// Top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    #[serde(rename = "text")]
    label: String,
    #[serde(rename = "link")]
    target: LinkTarget,
}

impl NavLink {
    /// Create a navigation link to an absolute URL or a site path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the label is empty or the target
    /// is malformed.
    pub fn new(label: impl Into<String>, target: &str) -> Result<Self, ConfigError> {
        let label = label.into();
        require_non_empty(&label, "text")?;
        Ok(Self {
            label,
            target: LinkTarget::parse(target)?,
        })
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Link target.
    #[must_use]
    pub fn target(&self) -> &LinkTarget {
        &self.target
    }
}

/// A single documentation page in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    #[serde(rename = "text")]
    label: String,
    #[serde(rename = "link")]
    target: LinkTarget,
}

impl SidebarItem {
    /// Create a sidebar item pointing at a site path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the label is empty or the target
    /// is not a path starting with `/`.
    pub fn new(label: impl Into<String>, target: &str) -> Result<Self, ConfigError> {
        let label = label.into();
        require_non_empty(&label, "text")?;
        Ok(Self {
            label,
            target: LinkTarget::path(target)?,
        })
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Site path of the page.
    #[must_use]
    pub fn target(&self) -> &LinkTarget {
        &self.target
    }
}

/// Labeled, collapsible cluster of sidebar items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    #[serde(rename = "text")]
    label: String,
    collapsed: bool,
    items: Vec<SidebarItem>,
}

impl SidebarGroup {
    /// Create an expanded group. Item order is display order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the label or `items` is empty.
    pub fn new(label: impl Into<String>, items: Vec<SidebarItem>) -> Result<Self, ConfigError> {
        let label = label.into();
        require_non_empty(&label, "text")?;
        if items.is_empty() {
            return Err(ConfigError::Validation("items cannot be empty".to_owned()));
        }
        Ok(Self {
            label,
            collapsed: false,
            items,
        })
    }

    /// Set the default expand state.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Section heading.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the group starts collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Items in display order. Never empty.
    #[must_use]
    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }
}

/// Ordered sidebar groups, rendered top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    groups: Vec<SidebarGroup>,
}

impl Sidebar {
    /// Create a sidebar from groups in display order.
    #[must_use]
    pub fn new(groups: Vec<SidebarGroup>) -> Self {
        Self { groups }
    }

    /// Groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[SidebarGroup] {
        &self.groups
    }

    /// First group with the given label.
    #[must_use]
    pub fn group(&self, label: &str) -> Option<&SidebarGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// All items across groups, in display order.
    pub fn items(&self) -> impl Iterator<Item = &SidebarItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sidebar has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Icon-labeled link to an external community or code-hosting platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    #[serde(rename = "icon")]
    platform: String,
    #[serde(rename = "link")]
    target: LinkTarget,
}

impl SocialLink {
    /// Create a social link.
    ///
    /// `platform` names an icon known to the generator (`github`, `discord`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the platform is not a lowercase
    /// identifier or the target is not an absolute URL.
    pub fn new(platform: impl Into<String>, target: &str) -> Result<Self, ConfigError> {
        let platform = platform.into();
        require_non_empty(&platform, "icon")?;
        if !PLATFORM_RE.is_match(&platform) {
            return Err(ConfigError::Validation(format!(
                "icon '{platform}' must be a lowercase identifier"
            )));
        }
        Ok(Self {
            platform,
            target: LinkTarget::url(target)?,
        })
    }

    /// Platform icon identifier.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// External URL.
    #[must_use]
    pub fn target(&self) -> &LinkTarget {
        &self.target
    }
}

/// Root of the configuration tree handed to the site generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SiteConfigurationRaw")]
pub struct SiteConfiguration {
    #[serde(flatten)]
    metadata: SiteMetadata,
    nav: Vec<NavLink>,
    sidebar: Sidebar,
    #[serde(rename = "socialLinks")]
    social_links: Vec<SocialLink>,
}

impl SiteConfiguration {
    /// Assemble a configuration from validated parts.
    #[must_use]
    pub fn new(
        metadata: SiteMetadata,
        nav: Vec<NavLink>,
        sidebar: Sidebar,
        social_links: Vec<SocialLink>,
    ) -> Self {
        Self {
            metadata,
            nav,
            sidebar,
            social_links,
        }
    }

    /// Site identity.
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.metadata.title()
    }

    /// Top navigation entries in display order.
    #[must_use]
    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    /// Sidebar.
    #[must_use]
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Social links in display order.
    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }
}

/// Configuration as authored in `docsite.toml` or JSON, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteConfigurationRaw {
    title: String,
    #[serde(default)]
    description: String,
    icon: String,
    #[serde(default)]
    nav: Vec<LinkRaw>,
    #[serde(default)]
    sidebar: Vec<SidebarGroupRaw>,
    #[serde(default, rename = "socialLinks", alias = "social_links")]
    social_links: Vec<SocialLinkRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkRaw {
    text: String,
    link: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SidebarGroupRaw {
    text: String,
    #[serde(default)]
    collapsed: bool,
    #[serde(default)]
    items: Vec<LinkRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SocialLinkRaw {
    icon: String,
    link: String,
}

impl TryFrom<SidebarGroupRaw> for SidebarGroup {
    type Error = ConfigError;

    fn try_from(raw: SidebarGroupRaw) -> Result<Self, Self::Error> {
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                SidebarItem::new(item.text, &item.link).map_err(at(&format!("items[{i}]")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(raw.text, items)?.collapsed(raw.collapsed))
    }
}

impl TryFrom<SiteConfigurationRaw> for SiteConfiguration {
    type Error = ConfigError;

    fn try_from(raw: SiteConfigurationRaw) -> Result<Self, Self::Error> {
        let metadata = SiteMetadata::new(raw.title, raw.description, raw.icon)?;

        let nav = raw
            .nav
            .into_iter()
            .enumerate()
            .map(|(i, link)| NavLink::new(link.text, &link.link).map_err(at(&format!("nav[{i}]"))))
            .collect::<Result<Vec<_>, _>>()?;

        let groups = raw
            .sidebar
            .into_iter()
            .enumerate()
            .map(|(i, group)| SidebarGroup::try_from(group).map_err(at(&format!("sidebar[{i}]"))))
            .collect::<Result<Vec<_>, _>>()?;

        let social_links = raw
            .social_links
            .into_iter()
            .enumerate()
            .map(|(i, link)| {
                SocialLink::new(link.icon, &link.link).map_err(at(&format!("socialLinks[{i}]")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(metadata, nav, Sidebar::new(groups), social_links))
    }
}
