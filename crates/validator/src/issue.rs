use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One reported validation failure.
///
/// Two issues are equal when their messages are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Issue {
    message: String,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Shared wording for every length-limit violation.
pub(crate) fn characters_exceeded(name: &str, limit: usize) -> Issue {
    Issue::new(format!(
        "The {} exceeds the current limit of {} characters.",
        name, limit
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_message() {
        assert_eq!(Issue::new("a"), Issue::new(String::from("a")));
        assert_ne!(Issue::new("a"), Issue::new("b"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Issue::new("Invalid GitHub URL")).unwrap();
        assert_eq!(json, "\"Invalid GitHub URL\"");
    }
}
