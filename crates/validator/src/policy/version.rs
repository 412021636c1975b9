use std::sync::Arc;

use thiserror::Error;
use vsx_types::{REVIEWS_SEGMENT, VersionAlias};

use crate::issue::Issue;

/// Version strings that collide with route segments.
pub const RESERVED_VERSIONS: [&str; 3] =
    [VersionAlias::LATEST, VersionAlias::PRE_RELEASE, REVIEWS_SEGMENT];

/// Why a version string could not be parsed. The message is shown to publishers as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct VersionParseError {
    message: String,
}

impl VersionParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns a version string into a structured semantic version.
pub trait VersionParser: Send + Sync {
    fn parse(&self, version: &str) -> Result<semver::Version, VersionParseError>;
}

/// Strict SemVer 2.0 parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverParser;

impl SemverParser {
    pub const INVALID_MESSAGE: &'static str = "Invalid semantic version. See https://semver.org/.";
}

impl VersionParser for SemverParser {
    fn parse(&self, version: &str) -> Result<semver::Version, VersionParseError> {
        semver::Version::parse(version).map_err(|_| VersionParseError::new(Self::INVALID_MESSAGE))
    }
}

#[derive(Clone)]
pub struct VersionPolicy {
    parser: Arc<dyn VersionParser>,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self::new(Arc::new(SemverParser))
    }
}

impl VersionPolicy {
    pub fn new(parser: Arc<dyn VersionParser>) -> Self {
        Self { parser }
    }

    /// All issues for `version`. A reserved name and a parse failure are reported independently.
    pub fn validate(&self, version: Option<&str>) -> Vec<Issue> {
        let version = match version {
            Some(version) if !version.is_empty() => version,
            _ => return vec![Issue::new("Version must not be empty.")],
        };

        let mut issues = Vec::new();
        if RESERVED_VERSIONS.contains(&version) {
            issues.push(Issue::new(format!(
                "The version string '{}' is reserved.",
                version
            )));
        }
        if let Err(e) = self.parser.parse(version) {
            issues.push(Issue::new(e.to_string()));
        }
        issues
    }

    pub fn first_issue(&self, version: Option<&str>) -> Option<Issue> {
        self.validate(version).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CalVerParser;

    impl VersionParser for CalVerParser {
        fn parse(&self, version: &str) -> Result<semver::Version, VersionParseError> {
            semver::Version::parse(version)
                .ok()
                .filter(|v| v.major >= 2000)
                .ok_or_else(|| {
                    VersionParseError::new(format!("'{}' is not a calendar version", version))
                })
        }
    }

    #[test]
    fn test_valid_versions() {
        let policy = VersionPolicy::default();
        for version in ["1.0.0", "0.0.1-alpha.1", "2.3.4+build.5", "10.20.30-rc.1+meta"] {
            assert!(policy.validate(Some(version)).is_empty(), "{} should pass", version);
        }
    }

    #[test]
    fn test_empty_version_stops_early() {
        let policy = VersionPolicy::default();
        assert_eq!(
            policy.validate(None),
            vec![Issue::new("Version must not be empty.")]
        );
        assert_eq!(
            policy.validate(Some("")),
            vec![Issue::new("Version must not be empty.")]
        );
    }

    #[test]
    fn test_reserved_versions_report_both_issues() {
        let policy = VersionPolicy::default();
        for reserved in RESERVED_VERSIONS {
            let issues = policy.validate(Some(reserved));
            assert_eq!(
                issues,
                vec![
                    Issue::new(format!("The version string '{}' is reserved.", reserved)),
                    Issue::new(SemverParser::INVALID_MESSAGE),
                ]
            );
        }
    }

    #[test]
    fn test_first_issue() {
        let policy = VersionPolicy::default();
        assert_eq!(
            policy.first_issue(Some("latest")),
            Some(Issue::new("The version string 'latest' is reserved."))
        );
        assert_eq!(
            policy.first_issue(Some("1/2")),
            Some(Issue::new("Invalid semantic version. See https://semver.org/."))
        );
        assert_eq!(policy.first_issue(Some("1.0.0")), None);
    }

    #[test]
    fn test_malformed_versions() {
        let policy = VersionPolicy::default();
        for version in ["1", "1.0", "v1.0.0", "01.0.0", "1.0.0.0", " 1.0.0"] {
            assert_eq!(
                policy.validate(Some(version)),
                vec![Issue::new(SemverParser::INVALID_MESSAGE)],
                "{} should be malformed",
                version
            );
        }
    }

    #[test]
    fn test_parser_message_is_used_verbatim() {
        let policy = VersionPolicy::new(Arc::new(CalVerParser));
        assert!(policy.validate(Some("2024.5.1")).is_empty());
        assert_eq!(
            policy.validate(Some("1.0.0")),
            vec![Issue::new("'1.0.0' is not a calendar version")]
        );
    }
}
