//! Validation of the descriptive metadata of an extension version.

use std::sync::Arc;

use tracing::{debug, trace};
use vsx_types::ExtensionMetadata;

use crate::config::ValidationConfig;
use crate::issue::Issue;
use crate::platform::{KnownPlatforms, PlatformRegistry};
use crate::policy::{
    CharacterPolicy, EnumPolicy, FieldPolicy, LengthPolicy, UrlPolicy, VersionPolicy,
    ZERO_WIDTH_JOINER,
};

pub const MARKDOWN_VALUES: [&str; 2] = ["github", "standard"];
pub const GALLERY_THEME_VALUES: [&str; 2] = ["dark", "light"];
pub const QNA_VALUES: [&str; 2] = ["marketplace", "false"];

/// Runs every metadata field through its policies and reports all issues found.
#[derive(Clone)]
pub struct MetadataValidator {
    version: VersionPolicy,
    platforms: Arc<dyn PlatformRegistry>,
    characters: CharacterPolicy,
    description_characters: CharacterPolicy,
    url: UrlPolicy,
    default_length: LengthPolicy,
    description_length: LengthPolicy,
    gallery_color_length: LengthPolicy,
    markdown: EnumPolicy,
    gallery_theme: EnumPolicy,
    qna: EnumPolicy,
}

impl Default for MetadataValidator {
    fn default() -> Self {
        Self::new(
            &ValidationConfig::default(),
            VersionPolicy::default(),
            Arc::new(KnownPlatforms),
        )
    }
}

impl MetadataValidator {
    pub fn new(
        config: &ValidationConfig,
        version: VersionPolicy,
        platforms: Arc<dyn PlatformRegistry>,
    ) -> Self {
        Self {
            version,
            platforms,
            characters: CharacterPolicy::new(),
            description_characters: CharacterPolicy::allowing(&[ZERO_WIDTH_JOINER]),
            url: UrlPolicy::new(),
            default_length: LengthPolicy::new(config.default_limit),
            description_length: LengthPolicy::new(config.description_limit),
            gallery_color_length: LengthPolicy::new(config.gallery_color_limit),
            markdown: EnumPolicy::fixed(&MARKDOWN_VALUES),
            gallery_theme: EnumPolicy::fixed(&GALLERY_THEME_VALUES),
            qna: EnumPolicy::fixed(&QNA_VALUES).or_url(),
        }
    }

    pub fn validate(&self, metadata: &ExtensionMetadata) -> Vec<Issue> {
        let mut issues = self.version.validate(metadata.version.as_deref());

        let target_platform = metadata.target_platform.as_deref();
        if !self.platforms.is_valid(target_platform) {
            issues.push(Issue::new(format!(
                "Unsupported target platform '{}'",
                target_platform.unwrap_or_default()
            )));
        }

        let text = [&self.characters as &dyn FieldPolicy, &self.default_length];
        let url = [&self.url as &dyn FieldPolicy, &self.default_length];

        apply(
            &mut issues,
            metadata.display_name.as_deref(),
            "displayName",
            &text,
        );
        apply(
            &mut issues,
            metadata.description.as_deref(),
            "description",
            &[&self.description_characters, &self.description_length],
        );
        apply_each(&mut issues, &metadata.categories, "categories", &text);
        apply_each(&mut issues, &metadata.tags, "keywords", &text);
        apply(&mut issues, metadata.license.as_deref(), "license", &text);
        apply(&mut issues, metadata.homepage.as_deref(), "homepage", &url);
        apply(&mut issues, metadata.repository.as_deref(), "repository", &url);
        apply(&mut issues, metadata.bugs.as_deref(), "bugs", &url);
        apply(
            &mut issues,
            metadata.markdown.as_deref(),
            "markdown",
            &[&self.markdown],
        );
        apply(
            &mut issues,
            metadata.gallery_color.as_deref(),
            "galleryBanner.color",
            &[&self.characters, &self.gallery_color_length],
        );
        apply(
            &mut issues,
            metadata.gallery_theme.as_deref(),
            "galleryBanner.theme",
            &[&self.gallery_theme],
        );
        apply_each(
            &mut issues,
            &metadata.localized_languages,
            "localizedLanguages",
            &[&self.default_length],
        );
        apply(
            &mut issues,
            metadata.qna.as_deref(),
            "qna",
            &[&self.qna, &self.default_length],
        );

        debug!(
            version = metadata.version.as_deref().unwrap_or_default(),
            issues = issues.len(),
            "Validated extension metadata"
        );
        issues
    }
}

/// Apply each policy in turn to a single-valued field.
pub(crate) fn apply(
    issues: &mut Vec<Issue>,
    value: Option<&str>,
    field: &str,
    policies: &[&dyn FieldPolicy],
) {
    for policy in policies {
        if let Some(issue) = policy.check_optional(value, field) {
            trace!(field, rule = policy.rule_name(), "Field rejected");
            issues.push(issue);
        }
    }
}

/// Apply each policy in turn to every element of a list field.
pub(crate) fn apply_each(
    issues: &mut Vec<Issue>,
    values: &[String],
    field: &str,
    policies: &[&dyn FieldPolicy],
) {
    for policy in policies {
        let found = policy.check_each(values, field);
        if !found.is_empty() {
            trace!(field, rule = policy.rule_name(), count = found.len(), "List field rejected");
            issues.extend(found);
        }
    }
}
