//! Field-level validation policies.
//!
//! Each policy is a pure rule over a single string value. Validators combine
//! them per field and collect whatever [`Issue`]s they report.

mod characters;
mod enumeration;
mod identifier;
mod length;
mod social;
mod url;
mod version;

pub use characters::{CharacterPolicy, ZERO_WIDTH_JOINER};
pub use enumeration::EnumPolicy;
pub use identifier::{IdentifierKind, IdentifierPolicy};
pub use length::LengthPolicy;
pub use social::SocialLinkPolicy;
pub use self::url::UrlPolicy;
pub use version::{RESERVED_VERSIONS, SemverParser, VersionParseError, VersionParser, VersionPolicy};

use crate::issue::Issue;

/// A rule applied to one named field.
pub trait FieldPolicy: Send + Sync {
    /// Short name used in trace output
    fn rule_name(&self) -> &str;

    /// Check a present value
    fn check(&self, value: &str, field: &str) -> Option<Issue>;

    /// Absent values are always accepted.
    fn check_optional(&self, value: Option<&str>, field: &str) -> Option<Issue> {
        value.and_then(|value| self.check(value, field))
    }

    /// Check every element of a list field, keeping one issue per failing element.
    fn check_each(&self, values: &[String], field: &str) -> Vec<Issue> {
        values
            .iter()
            .filter_map(|value| self.check(value, field))
            .collect()
    }
}
