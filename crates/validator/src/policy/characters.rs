use unicode_general_category::{GeneralCategory, get_general_category};

use super::FieldPolicy;
use crate::issue::Issue;

/// Joins several emoji into a single glyph.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Rejects control, format, unassigned, private-use and line/paragraph separator characters.
#[derive(Debug, Clone, Default)]
pub struct CharacterPolicy {
    allowed: Vec<char>,
}

impl CharacterPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the given characters even if their category is disallowed.
    pub fn allowing(allowed: &[char]) -> Self {
        Self {
            allowed: allowed.to_vec(),
        }
    }

    fn is_disallowed(&self, c: char) -> bool {
        if self.allowed.contains(&c) {
            return false;
        }
        matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Unassigned
                | GeneralCategory::PrivateUse
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
    }
}

impl FieldPolicy for CharacterPolicy {
    fn rule_name(&self) -> &str {
        "characters"
    }

    fn check(&self, value: &str, field: &str) -> Option<Issue> {
        let index = value.chars().position(|c| self.is_disallowed(c))?;
        Some(Issue::new(format!(
            "Invalid character found in field '{}': {} (index {})",
            field, value, index
        )))
    }
}
