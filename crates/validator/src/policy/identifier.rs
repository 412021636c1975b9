use once_cell::sync::Lazy;
use regex::Regex;
use vsx_types::NAMESPACE_PLACEHOLDER;

use crate::config::DEFAULT_STRING_SIZE;
use crate::issue::{Issue, characters_exceeded};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-+$~]+$").expect("name pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Namespace,
    Extension,
}

impl IdentifierKind {
    fn label(&self) -> &'static str {
        match self {
            IdentifierKind::Namespace => "namespace",
            IdentifierKind::Extension => "extension",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            IdentifierKind::Namespace => "Namespace name must not be empty.",
            IdentifierKind::Extension => "Name must not be empty.",
        }
    }
}

/// Shape rules for namespace and extension names, which end up in URL paths.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierPolicy {
    kind: IdentifierKind,
    limit: usize,
}

impl IdentifierPolicy {
    pub fn namespace() -> Self {
        Self::new(IdentifierKind::Namespace, DEFAULT_STRING_SIZE)
    }

    pub fn extension() -> Self {
        Self::new(IdentifierKind::Extension, DEFAULT_STRING_SIZE)
    }

    pub fn new(kind: IdentifierKind, limit: usize) -> Self {
        Self { kind, limit }
    }

    /// Returns the first violation: emptiness, then shape, then length.
    pub fn validate(&self, name: Option<&str>) -> Option<Issue> {
        let name = name.unwrap_or_default();
        let is_placeholder =
            self.kind == IdentifierKind::Namespace && name == NAMESPACE_PLACEHOLDER;
        if name.is_empty() || is_placeholder {
            return Some(Issue::new(self.kind.empty_message()));
        }
        if !NAME_PATTERN.is_match(name) {
            return Some(Issue::new(format!(
                "Invalid {} name: {}",
                self.kind.label(),
                name
            )));
        }
        if name.chars().count() > self.limit {
            return Some(characters_exceeded(
                &format!("{} name", self.kind.label()),
                self.limit,
            ));
        }
        None
    }
}
