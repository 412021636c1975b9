use super::{FieldPolicy, UrlPolicy};
use crate::error::{Result, ValidatorError};
use crate::issue::Issue;

/// Accepts only values from a fixed set, or values passing an optional fallback rule.
#[derive(Debug, Clone)]
pub struct EnumPolicy {
    allowed: Vec<String>,
    fallback: Option<Fallback>,
}

#[derive(Debug, Clone)]
struct Fallback {
    accepts: fn(&str) -> bool,
    label: &'static str,
}

impl EnumPolicy {
    pub fn new<S: AsRef<str>>(allowed: &[S]) -> Result<Self> {
        if allowed.is_empty() {
            return Err(ValidatorError::EmptyAllowedValues);
        }
        Ok(Self::fixed(allowed))
    }

    /// Built-in sets are never empty.
    pub(crate) fn fixed<S: AsRef<str>>(allowed: &[S]) -> Self {
        Self {
            allowed: allowed.iter().map(|s| s.as_ref().to_string()).collect(),
            fallback: None,
        }
    }

    /// Also accept values for which `accepts` holds; `label` describes them in messages.
    pub fn with_fallback(mut self, accepts: fn(&str) -> bool, label: &'static str) -> Self {
        self.fallback = Some(Fallback { accepts, label });
        self
    }

    /// Also accept any valid URL.
    pub fn or_url(self) -> Self {
        self.with_fallback(UrlPolicy::is_valid, "a URL")
    }

    fn allowed_description(&self) -> String {
        let set = format!("[{}]", self.allowed.join(", "));
        match &self.fallback {
            Some(fallback) => format!("{} or {}", set, fallback.label),
            None => set,
        }
    }

    fn is_accepted(&self, value: &str) -> bool {
        self.allowed.iter().any(|allowed| allowed == value)
            || self
                .fallback
                .as_ref()
                .is_some_and(|fallback| (fallback.accepts)(value))
    }
}

impl FieldPolicy for EnumPolicy {
    fn rule_name(&self) -> &str {
        "enum"
    }

    fn check(&self, value: &str, field: &str) -> Option<Issue> {
        if value.is_empty() || self.is_accepted(value) {
            return None;
        }
        Some(Issue::new(format!(
            "Invalid value in field '{}': {}. Allowed values: {}",
            field,
            value,
            self.allowed_description()
        )))
    }
}
