use super::FieldPolicy;
use crate::issue::{Issue, characters_exceeded};

/// Rejects values with more than `limit` characters.
#[derive(Debug, Clone, Copy)]
pub struct LengthPolicy {
    limit: usize,
}

impl LengthPolicy {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl FieldPolicy for LengthPolicy {
    fn rule_name(&self) -> &str {
        "length"
    }

    fn check(&self, value: &str, field: &str) -> Option<Issue> {
        if value.chars().count() > self.limit {
            return Some(characters_exceeded(&format!("field '{}'", field), self.limit));
        }
        None
    }
}
