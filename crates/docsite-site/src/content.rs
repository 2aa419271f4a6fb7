//! The documentation site's authored navigation and sidebar.

use docsite_config::{
    ConfigError, NavLink, Sidebar, SidebarGroup, SidebarItem, SiteConfiguration, SiteMetadata,
    SocialLink,
};

const TITLE: &str = "Recordkit";
const DESCRIPTION: &str = "Typed DML operations for platform records";
const ICON: &str = "/logo.svg";
const REPOSITORY: &str = "https://github.com/recordkit/recordkit";

const NAV: &[(&str, &str)] = &[("Home", "/"), ("Documentation", "/api")];

const GUIDE: &[(&str, &str)] = &[
    ("Introduction", "/guide/introduction"),
    ("Getting Started", "/guide/getting-started"),
    ("Installation", "/guide/installation"),
];

/// DML operations, most common first. Each page lives at `/dml/<name>`.
const DML_OPERATIONS: &[&str] = &["Insert", "Update", "Upsert", "Delete", "Undelete", "Publish"];

const CONFIGURATION: &[(&str, &str)] = &[
    ("Connection", "/configuration/connection"),
    ("Logging", "/configuration/logging"),
    ("Retries", "/configuration/retries"),
];

/// Build the site configuration.
///
/// Pure and deterministic: every call returns an equal value.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if an authored entry breaks an invariant.
/// The content is fixed, so this only happens after a bad edit.
pub fn site_configuration() -> Result<SiteConfiguration, ConfigError> {
    let metadata = SiteMetadata::new(TITLE, DESCRIPTION, ICON)?;

    let nav = NAV
        .iter()
        .map(|(label, target)| NavLink::new(*label, target))
        .collect::<Result<Vec<_>, _>>()?;

    let dml_items = DML_OPERATIONS
        .iter()
        .map(|op| SidebarItem::new(*op, &format!("/dml/{}", op.to_lowercase())))
        .collect::<Result<Vec<_>, _>>()?;

    let sidebar = Sidebar::new(vec![
        SidebarGroup::new("Guide", items(GUIDE)?)?,
        SidebarGroup::new("DMLs", dml_items)?,
        SidebarGroup::new("Configuration", items(CONFIGURATION)?)?,
    ]);

    let social_links = vec![SocialLink::new("github", REPOSITORY)?];

    Ok(SiteConfiguration::new(metadata, nav, sidebar, social_links))
}

fn items(entries: &[(&str, &str)]) -> Result<Vec<SidebarItem>, ConfigError> {
    entries
        .iter()
        .map(|(label, target)| SidebarItem::new(*label, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_config::LinkTarget;
    use pretty_assertions::assert_eq;

    fn config() -> SiteConfiguration {
        site_configuration().unwrap()
    }

    #[test]
    fn test_site_configuration_builds() {
        let config = config();
        assert_eq!(config.title(), "Recordkit");
        assert_eq!(config.metadata().icon(), "/logo.svg");
    }

    #[test]
    fn test_nav_is_home_then_documentation() {
        let config = config();

        let nav: Vec<_> = config
            .nav()
            .iter()
            .map(|l| (l.label(), l.target().as_str()))
            .collect();

        assert_eq!(nav, vec![("Home", "/"), ("Documentation", "/api")]);
    }

    #[test]
    fn test_dml_group_lists_six_operations_in_order() {
        let config = config();
        let dmls = config.sidebar().group("DMLs").unwrap();

        let entries: Vec<_> = dmls
            .items()
            .iter()
            .map(|i| (i.label(), i.target().as_str()))
            .collect();

        assert_eq!(
            entries,
            vec![
                ("Insert", "/dml/insert"),
                ("Update", "/dml/update"),
                ("Upsert", "/dml/upsert"),
                ("Delete", "/dml/delete"),
                ("Undelete", "/dml/undelete"),
                ("Publish", "/dml/publish"),
            ]
        );
    }

    #[test]
    fn test_dml_and_configuration_groups_are_expanded() {
        let config = config();
        assert!(!config.sidebar().group("DMLs").unwrap().is_collapsed());
        assert!(!config.sidebar().group("Configuration").unwrap().is_collapsed());
    }

    #[test]
    fn test_group_order() {
        let config = config();
        let labels: Vec<_> = config
            .sidebar()
            .groups()
            .iter()
            .map(SidebarGroup::label)
            .collect();
        assert_eq!(labels, vec!["Guide", "DMLs", "Configuration"]);
    }

    #[test]
    fn test_every_group_has_items() {
        for group in config().sidebar().groups() {
            assert!(!group.items().is_empty(), "{} is empty", group.label());
        }
    }

    #[test]
    fn test_every_target_is_url_or_root_path() {
        let config = config();
        let targets = config
            .nav()
            .iter()
            .map(NavLink::target)
            .chain(config.sidebar().items().map(SidebarItem::target));

        for target in targets {
            let s = target.as_str();
            match target {
                LinkTarget::Path(_) => assert!(s.starts_with('/'), "{s}"),
                LinkTarget::Url(_) => assert!(s.contains("://"), "{s}"),
            }
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        let first = config();
        let second = config();

        assert_eq!(first, second);
        let first_targets: Vec<_> = first.sidebar().items().map(|i| i.target().clone()).collect();
        let second_targets: Vec<_> = second.sidebar().items().map(|i| i.target().clone()).collect();
        assert_eq!(first_targets, second_targets);
    }

    #[test]
    fn test_social_link_points_at_repository() {
        let config = config();
        let links = config.social_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].platform(), "github");
        assert!(links[0].target().is_external());
    }

    #[test]
    fn test_authored_content_has_no_lints() {
        assert_eq!(config().lint(), Vec::new());
    }
}
