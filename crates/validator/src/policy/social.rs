use once_cell::sync::Lazy;
use regex::Regex;

use crate::issue::Issue;

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://github\.com/[^/]+$").expect("github pattern is valid"));
static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://www\.linkedin\.com/(company|in)/[^/]+$")
        .expect("linkedin pattern is valid")
});
static TWITTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://twitter\.com/[^/]+$").expect("twitter pattern is valid"));

/// Profile link for one social network, which must point at a single account page.
#[derive(Debug, Clone, Copy)]
pub struct SocialLinkPolicy {
    provider: &'static str,
    pattern: &'static Lazy<Regex>,
    message: &'static str,
}

impl SocialLinkPolicy {
    pub fn github() -> Self {
        Self {
            provider: "github",
            pattern: &GITHUB,
            message: "Invalid GitHub URL",
        }
    }

    pub fn linkedin() -> Self {
        Self {
            provider: "linkedin",
            pattern: &LINKEDIN,
            message: "Invalid LinkedIn URL",
        }
    }

    pub fn twitter() -> Self {
        Self {
            provider: "twitter",
            pattern: &TWITTER,
            message: "Invalid Twitter URL",
        }
    }

    /// Key of this provider in a profile's social links.
    pub fn provider(&self) -> &'static str {
        self.provider
    }

    pub fn check(&self, link: Option<&str>) -> Option<Issue> {
        match link {
            Some(link) if !self.pattern.is_match(link) => Some(Issue::new(self.message)),
            _ => None,
        }
    }
}
