//! Tree view of a configuration for terminal display, as indented lines or
//! JSON.

use docsite_config::SiteConfiguration;
use serde::Serialize;

/// Node in the outline tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    /// Display title.
    pub title: String,
    /// Link target, if the node is a link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Whether the node starts collapsed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn branch(title: &str, children: Vec<OutlineNode>) -> Self {
        Self {
            title: title.to_owned(),
            link: None,
            collapsed: false,
            children,
        }
    }

    fn leaf(title: &str, link: &str) -> Self {
        Self {
            title: title.to_owned(),
            link: Some(link.to_owned()),
            collapsed: false,
            children: Vec::new(),
        }
    }
}

/// Outline of a configuration: a `nav`, `sidebar` and `social` section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// Site title.
    pub title: String,
    /// Top-level sections.
    pub sections: Vec<OutlineNode>,
}

impl Outline {
    /// Render as indented lines, two spaces per level.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        for section in &self.sections {
            push_lines(section, 1, &mut lines);
        }
        lines
    }
}

fn push_lines(node: &OutlineNode, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}{}", node.title);
    if let Some(link) = &node.link {
        line.push_str(&format!(" -> {link}"));
    }
    if node.collapsed {
        line.push_str(" (collapsed)");
    }
    lines.push(line);
    for child in &node.children {
        push_lines(child, depth + 1, lines);
    }
}

impl From<&SiteConfiguration> for Outline {
    fn from(config: &SiteConfiguration) -> Self {
        let nav = config
            .nav()
            .iter()
            .map(|l| OutlineNode::leaf(l.label(), l.target().as_str()))
            .collect();

        let groups = config
            .sidebar()
            .groups()
            .iter()
            .map(|group| OutlineNode {
                collapsed: group.is_collapsed(),
                ..OutlineNode::branch(
                    group.label(),
                    group
                        .items()
                        .iter()
                        .map(|i| OutlineNode::leaf(i.label(), i.target().as_str()))
                        .collect(),
                )
            })
            .collect();

        let social = config
            .social_links()
            .iter()
            .map(|l| OutlineNode::leaf(l.platform(), l.target().as_str()))
            .collect();

        Self {
            title: config.title().to_owned(),
            sections: vec![
                OutlineNode::branch("nav", nav),
                OutlineNode::branch("sidebar", groups),
                OutlineNode::branch("social", social),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_configuration;
    use docsite_config::{NavLink, Sidebar, SidebarGroup, SidebarItem, SiteMetadata};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outline_lines() {
        let config = SiteConfiguration::new(
            SiteMetadata::new("Docs", "", "/logo.svg").unwrap(),
            vec![NavLink::new("Home", "/").unwrap()],
            Sidebar::new(vec![
                SidebarGroup::new("Guide", vec![SidebarItem::new("Intro", "/intro").unwrap()])
                    .unwrap()
                    .collapsed(true),
            ]),
            Vec::new(),
        );

        let lines = Outline::from(&config).lines();

        assert_eq!(
            lines,
            vec![
                "Docs",
                "  nav",
                "    Home -> /",
                "  sidebar",
                "    Guide (collapsed)",
                "      Intro -> /intro",
                "  social",
            ]
        );
    }

    #[test]
    fn test_outline_of_site_configuration() {
        let outline = Outline::from(&site_configuration().unwrap());

        let sidebar = &outline.sections[1];
        assert_eq!(sidebar.children.len(), 3);
        assert_eq!(sidebar.children[1].title, "DMLs");
        assert_eq!(sidebar.children[1].children.len(), 6);
        assert_eq!(
            sidebar.children[1].children[5].link.as_deref(),
            Some("/dml/publish")
        );
    }

    #[test]
    fn test_outline_serialization_skips_empty_fields() {
        let node = OutlineNode::leaf("Home", "/");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json, serde_json::json!({ "title": "Home", "link": "/" }));
    }
}
