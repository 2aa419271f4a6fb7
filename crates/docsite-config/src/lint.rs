//! Non-fatal authoring checks.
//!
//! Duplicate labels and targets are legal configurations, the generator
//! renders them without complaint, but they are almost always copy-paste
//! mistakes. [`SiteConfiguration::lint`] reports them without failing.

use std::collections::HashMap;
use std::fmt;

use crate::SiteConfiguration;

/// An authoring warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lint {
    /// Two navigation links share a label.
    DuplicateNavLabel {
        /// The repeated label.
        label: String,
    },
    /// Two sidebar groups share a label.
    DuplicateGroupLabel {
        /// The repeated label.
        label: String,
    },
    /// Two items in one group share a label.
    DuplicateItemLabel {
        /// Group containing the items.
        group: String,
        /// The repeated label.
        label: String,
    },
    /// Two sidebar items point at the same page.
    DuplicateTarget {
        /// The repeated target.
        target: String,
        /// Labels of every item with this target, in display order.
        labels: Vec<String>,
    },
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNavLabel { label } => {
                write!(f, "nav label '{label}' is used more than once")
            }
            Self::DuplicateGroupLabel { label } => {
                write!(f, "sidebar group '{label}' is declared more than once")
            }
            Self::DuplicateItemLabel { group, label } => {
                write!(f, "sidebar group '{group}' has more than one item labeled '{label}'")
            }
            Self::DuplicateTarget { target, labels } => {
                write!(f, "'{target}' is linked from several sidebar items: {}", labels.join(", "))
            }
        }
    }
}

impl SiteConfiguration {
    /// Check for duplicate labels and targets.
    ///
    /// Returns warnings in a stable order: nav, groups, items, targets.
    #[must_use]
    pub fn lint(&self) -> Vec<Lint> {
        let mut lints = Vec::new();

        for label in duplicates(self.nav().iter().map(|l| l.label())) {
            lints.push(Lint::DuplicateNavLabel { label });
        }

        let groups = self.sidebar().groups();
        for label in duplicates(groups.iter().map(|g| g.label())) {
            lints.push(Lint::DuplicateGroupLabel { label });
        }

        for group in groups {
            for label in duplicates(group.items().iter().map(|i| i.label())) {
                lints.push(Lint::DuplicateItemLabel {
                    group: group.label().to_owned(),
                    label,
                });
            }
        }

        let mut by_target: HashMap<&str, Vec<String>> = HashMap::new();
        let mut order = Vec::new();
        for item in self.sidebar().items() {
            let target = item.target().as_str();
            let labels = by_target.entry(target).or_default();
            if labels.is_empty() {
                order.push(target);
            }
            labels.push(item.label().to_owned());
        }
        for target in order {
            if let Some(labels) = by_target.remove(target)
                && labels.len() > 1
            {
                lints.push(Lint::DuplicateTarget {
                    target: target.to_owned(),
                    labels,
                });
            }
        }

        lints
    }
}

/// Values appearing more than once, each reported once, in first-seen order.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(value.to_owned());
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NavLink, Sidebar, SidebarGroup, SidebarItem, SiteMetadata};
    use pretty_assertions::assert_eq;

    fn config(nav: Vec<NavLink>, groups: Vec<SidebarGroup>) -> SiteConfiguration {
        SiteConfiguration::new(
            SiteMetadata::new("Docs", "", "/logo.svg").unwrap(),
            nav,
            Sidebar::new(groups),
            Vec::new(),
        )
    }

    fn group(label: &str, items: &[(&str, &str)]) -> SidebarGroup {
        let items = items
            .iter()
            .map(|(l, t)| SidebarItem::new(*l, t).unwrap())
            .collect();
        SidebarGroup::new(label, items).unwrap()
    }

    #[test]
    fn test_lint_clean_config() {
        let config = config(
            vec![NavLink::new("Home", "/").unwrap()],
            vec![group("Guide", &[("Intro", "/intro")])],
        );
        assert!(config.lint().is_empty());
    }

    #[test]
    fn test_lint_duplicate_nav_label() {
        let config = config(
            vec![
                NavLink::new("Home", "/").unwrap(),
                NavLink::new("Home", "/home").unwrap(),
            ],
            Vec::new(),
        );
        assert_eq!(
            config.lint(),
            vec![Lint::DuplicateNavLabel {
                label: "Home".to_owned()
            }]
        );
    }

    #[test]
    fn test_lint_duplicate_group_and_item_labels() {
        let config = config(
            Vec::new(),
            vec![
                group("Guide", &[("Intro", "/intro"), ("Intro", "/intro-2")]),
                group("Guide", &[("Setup", "/setup")]),
            ],
        );

        assert_eq!(
            config.lint(),
            vec![
                Lint::DuplicateGroupLabel {
                    label: "Guide".to_owned()
                },
                Lint::DuplicateItemLabel {
                    group: "Guide".to_owned(),
                    label: "Intro".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_lint_duplicate_target_across_groups() {
        let config = config(
            Vec::new(),
            vec![
                group("Guide", &[("Publish", "/dml/publish")]),
                group("DMLs", &[("Publish events", "/dml/publish")]),
            ],
        );

        let lints = config.lint();

        assert_eq!(
            lints,
            vec![Lint::DuplicateTarget {
                target: "/dml/publish".to_owned(),
                labels: vec!["Publish".to_owned(), "Publish events".to_owned()],
            }]
        );
        assert_eq!(
            lints[0].to_string(),
            "'/dml/publish' is linked from several sidebar items: Publish, Publish events"
        );
    }

    #[test]
    fn test_duplicates_reports_each_value_once() {
        let values = ["a", "b", "a", "a", "b", "c"];
        assert_eq!(duplicates(values.into_iter()), vec!["a", "b"]);
    }
}
