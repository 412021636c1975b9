use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Publisher profile attached to a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceDetails {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub support_link: Option<String>,
    /// Links keyed by provider: `github`, `linkedin` or `twitter`.
    pub social_links: HashMap<String, String>,
}

impl NamespaceDetails {
    pub fn social_link(&self, provider: &str) -> Option<&str> {
        self.social_links.get(provider).map(String::as_str)
    }
}
