//! Link targets for navigation, sidebar and social entries.
//!
//! A target is either an absolute URL (`https://...`, `mailto://...`) or a
//! root-relative path starting with `/`. Relative paths such as `guide/intro`
//! or `../api` are rejected because the generator resolves them against the
//! current page, which makes the same entry point somewhere different on every
//! page.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://\S+$").unwrap());

/// A validated link target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LinkTarget {
    /// Absolute URL with a scheme.
    Url(String),
    /// Root-relative site path.
    Path(String),
}

impl LinkTarget {
    /// Parse a target, accepting absolute URLs and root-relative paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the target is empty or neither
    /// form.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::Validation("link cannot be empty".to_owned()));
        }
        if value.starts_with('/') {
            if value.starts_with("//") {
                return Err(ConfigError::Validation(format!(
                    "link '{value}' is protocol-relative, use an explicit scheme"
                )));
            }
            return Ok(Self::Path(value.to_owned()));
        }
        if URL_RE.is_match(value) {
            return Ok(Self::Url(value.to_owned()));
        }
        Err(ConfigError::Validation(format!(
            "link '{value}' must be an absolute URL or start with '/'"
        )))
    }

    /// Parse a root-relative path, rejecting URLs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` unless the value starts with `/`.
    pub fn path(value: &str) -> Result<Self, ConfigError> {
        match Self::parse(value)? {
            Self::Url(url) => Err(ConfigError::Validation(format!(
                "link '{url}' must be a site path starting with '/'"
            ))),
            path @ Self::Path(_) => Ok(path),
        }
    }

    /// Parse an absolute URL, rejecting site paths.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` unless the value is an absolute URL.
    pub fn url(value: &str) -> Result<Self, ConfigError> {
        match Self::parse(value)? {
            Self::Path(path) => Err(ConfigError::Validation(format!(
                "link '{path}' must be an absolute URL"
            ))),
            url @ Self::Url(_) => Ok(url),
        }
    }

    /// The target as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(s) | Self::Path(s) => s,
        }
    }

    /// Whether the target points outside the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for LinkTarget {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LinkTarget> for String {
    fn from(target: LinkTarget) -> Self {
        match target {
            LinkTarget::Url(s) | LinkTarget::Path(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_path() {
        assert_eq!(LinkTarget::parse("/").unwrap(), LinkTarget::Path("/".to_owned()));
        assert_eq!(
            LinkTarget::parse("/dml/insert").unwrap(),
            LinkTarget::Path("/dml/insert".to_owned())
        );
    }

    #[test]
    fn test_parse_absolute_url() {
        let target = LinkTarget::parse("https://github.com/example/repo").unwrap();
        assert!(target.is_external());
        assert_eq!(target.as_str(), "https://github.com/example/repo");
    }

    #[test]
    fn test_parse_rejects_relative_path() {
        let err = LinkTarget::parse("guide/intro").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("guide/intro"));
    }

    #[test]
    fn test_parse_rejects_protocol_relative() {
        let err = LinkTarget::parse("//cdn.example.com/x").unwrap_err();
        assert!(err.to_string().contains("protocol-relative"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = LinkTarget::parse("").unwrap_err();
        assert!(err.to_string().contains("link cannot be empty"));
    }

    #[test]
    fn test_parse_rejects_scheme_without_rest() {
        assert!(LinkTarget::parse("https://").is_err());
        assert!(LinkTarget::parse("1http://example.com").is_err());
    }

    #[test]
    fn test_path_rejects_url() {
        let err = LinkTarget::path("https://example.com").unwrap_err();
        assert!(err.to_string().contains("must be a site path"));
    }

    #[test]
    fn test_url_rejects_path() {
        let err = LinkTarget::url("/api").unwrap_err();
        assert!(err.to_string().contains("must be an absolute URL"));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let target = LinkTarget::parse("/api").unwrap();
        assert_eq!(serde_json::to_string(&target).unwrap(), r#""/api""#);

        let parsed: LinkTarget = serde_json::from_str(r#""https://example.com""#).unwrap();
        assert!(parsed.is_external());

        assert!(serde_json::from_str::<LinkTarget>(r#""api""#).is_err());
    }
}
