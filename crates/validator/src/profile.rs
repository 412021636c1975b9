use tracing::{debug, trace};
use vsx_types::NamespaceDetails;

use crate::config::ValidationConfig;
use crate::issue::Issue;
use crate::metadata::apply;
use crate::policy::{CharacterPolicy, LengthPolicy, SocialLinkPolicy, UrlPolicy, ZERO_WIDTH_JOINER};

/// Checks the publisher profile shown on a namespace page.
#[derive(Debug, Clone)]
pub struct ProfileValidator {
    characters: CharacterPolicy,
    description_characters: CharacterPolicy,
    display_name_length: LengthPolicy,
    description_length: LengthPolicy,
    url: UrlPolicy,
    social_links: [SocialLinkPolicy; 3],
}

impl Default for ProfileValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl ProfileValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            characters: CharacterPolicy::new(),
            description_characters: CharacterPolicy::allowing(&[ZERO_WIDTH_JOINER]),
            display_name_length: LengthPolicy::new(config.profile_display_name_limit),
            description_length: LengthPolicy::new(config.profile_description_limit),
            url: UrlPolicy::new(),
            social_links: [
                SocialLinkPolicy::github(),
                SocialLinkPolicy::linkedin(),
                SocialLinkPolicy::twitter(),
            ],
        }
    }

    pub fn validate(&self, details: &NamespaceDetails) -> Vec<Issue> {
        let mut issues = Vec::new();

        apply(
            &mut issues,
            details.display_name.as_deref(),
            "displayName",
            &[&self.characters, &self.display_name_length],
        );
        apply(
            &mut issues,
            details.description.as_deref(),
            "description",
            &[&self.description_characters, &self.description_length],
        );
        apply(&mut issues, details.website.as_deref(), "website", &[&self.url]);
        apply(
            &mut issues,
            details.support_link.as_deref(),
            "supportLink",
            &[&self.url],
        );

        for policy in &self.social_links {
            if let Some(issue) = policy.check(details.social_link(policy.provider())) {
                trace!(provider = policy.provider(), "Social link rejected");
                issues.push(issue);
            }
        }

        debug!(issues = issues.len(), "Validated namespace details");
        issues
    }
}
