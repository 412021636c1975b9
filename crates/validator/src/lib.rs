//! Validation of extension and publisher metadata before it is stored.
//!
//! Everything submitted by publishers passes through this crate: namespace and
//! extension names, version strings, the descriptive fields of an extension
//! version and the profile attached to a namespace. Nothing is rewritten; values
//! are either accepted or reported as [`Issue`]s.
//!
//! Single-field checks return the first issue found. Record-level checks return
//! every issue so publishers can fix everything in one go. An empty list means
//! the record can be stored.
//!
//! ```rust
//! use vsx_types::ExtensionMetadata;
//! use vsx_validator::{ExtensionValidator, Issue};
//!
//! let validator = ExtensionValidator::new();
//!
//! assert_eq!(
//!     validator.validate_extension_version(Some("latest")),
//!     Some(Issue::new("The version string 'latest' is reserved."))
//! );
//!
//! let metadata = ExtensionMetadata::new("1.0.0").with_target_platform("debian-x64");
//! let issues = validator.validate_metadata(&metadata);
//! assert_eq!(issues, vec![Issue::new("Unsupported target platform 'debian-x64'")]);
//! ```
pub mod config;
pub mod error;
pub mod issue;
pub mod metadata;
pub mod platform;
pub mod policy;
pub mod profile;

use std::sync::Arc;

use tracing::debug;
use vsx_types::{ExtensionMetadata, NamespaceDetails};

pub use config::ValidationConfig;
pub use error::{Result, ValidatorError};
pub use issue::Issue;
pub use metadata::MetadataValidator;
pub use platform::{KnownPlatforms, PlatformRegistry};
pub use policy::{FieldPolicy, SemverParser, VersionParseError, VersionParser};
pub use profile::ProfileValidator;

use policy::{IdentifierKind, IdentifierPolicy, VersionPolicy};

/// Entry point bundling every validation used when publishing.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct ExtensionValidator {
    config: ValidationConfig,
    version_parser: Arc<dyn VersionParser>,
    platforms: Arc<dyn PlatformRegistry>,
    namespace: IdentifierPolicy,
    extension: IdentifierPolicy,
    version: VersionPolicy,
    metadata: MetadataValidator,
    profile: ProfileValidator,
}

impl Default for ExtensionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionValidator {
    pub fn new() -> Self {
        Self::build(
            ValidationConfig::default(),
            Arc::new(SemverParser),
            Arc::new(KnownPlatforms),
        )
    }

    /// Create a validator with custom limits
    pub fn with_config(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        debug!(?config, "Creating extension validator with custom limits");
        Ok(Self::build(
            config,
            Arc::new(SemverParser),
            Arc::new(KnownPlatforms),
        ))
    }

    /// Replace the parser used to check version strings
    pub fn with_version_parser(self, parser: Arc<dyn VersionParser>) -> Self {
        Self::build(self.config, parser, self.platforms)
    }

    /// Replace the registry deciding which target platforms are supported
    pub fn with_platform_registry(self, platforms: Arc<dyn PlatformRegistry>) -> Self {
        Self::build(self.config, self.version_parser, platforms)
    }

    fn build(
        config: ValidationConfig,
        version_parser: Arc<dyn VersionParser>,
        platforms: Arc<dyn PlatformRegistry>,
    ) -> Self {
        let version = VersionPolicy::new(version_parser.clone());
        Self {
            namespace: IdentifierPolicy::new(IdentifierKind::Namespace, config.identifier_limit),
            extension: IdentifierPolicy::new(IdentifierKind::Extension, config.identifier_limit),
            metadata: MetadataValidator::new(&config, version.clone(), platforms.clone()),
            profile: ProfileValidator::new(&config),
            version,
            version_parser,
            platforms,
            config,
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn validate_namespace(&self, namespace: Option<&str>) -> Option<Issue> {
        self.namespace.validate(namespace)
    }

    pub fn validate_extension_name(&self, name: Option<&str>) -> Option<Issue> {
        self.extension.validate(name)
    }

    pub fn validate_extension_version(&self, version: Option<&str>) -> Option<Issue> {
        self.version.first_issue(version)
    }

    pub fn validate_metadata(&self, metadata: &ExtensionMetadata) -> Vec<Issue> {
        self.metadata.validate(metadata)
    }

    /// Validate the publisher profile of a namespace.
    pub fn validate_namespace_details(&self, details: &NamespaceDetails) -> Vec<Issue> {
        self.profile.validate(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyWeb;

    impl PlatformRegistry for OnlyWeb {
        fn is_valid(&self, target_platform: Option<&str>) -> bool {
            target_platform == Some("web")
        }
    }

    #[test]
    fn test_rejects_zero_limits() {
        let config = ValidationConfig {
            default_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            ExtensionValidator::with_config(config),
            Err(ValidatorError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_identifier_limit_from_config() {
        let config = ValidationConfig {
            identifier_limit: 5,
            ..Default::default()
        };
        let validator = ExtensionValidator::with_config(config).unwrap();
        assert!(validator.validate_namespace(Some("abcde")).is_none());
        assert_eq!(
            validator.validate_namespace(Some("abcdef")),
            Some(Issue::new(
                "The namespace name exceeds the current limit of 5 characters."
            ))
        );
    }

    #[test]
    fn test_custom_platform_registry() {
        let validator = ExtensionValidator::new().with_platform_registry(Arc::new(OnlyWeb));
        let web = ExtensionMetadata::new("1.0.0").with_target_platform("web");
        assert!(validator.validate_metadata(&web).is_empty());

        let linux = ExtensionMetadata::new("1.0.0").with_target_platform("linux-x64");
        assert_eq!(
            validator.validate_metadata(&linux),
            vec![Issue::new("Unsupported target platform 'linux-x64'")]
        );
    }

    #[test]
    fn test_validator_is_shareable_across_threads() {
        let validator = Arc::new(ExtensionValidator::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let validator = Arc::clone(&validator);
                std::thread::spawn(move || {
                    let metadata = ExtensionMetadata::new(format!("1.0.{}", i));
                    validator.validate_metadata(&metadata)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_empty());
        }
    }
}
