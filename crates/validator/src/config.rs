use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidatorError};

pub const DEFAULT_STRING_SIZE: usize = 255;
pub const DESCRIPTION_SIZE: usize = 2048;
pub const GALLERY_COLOR_SIZE: usize = 16;
pub const PROFILE_DISPLAY_NAME_SIZE: usize = 32;

/// Character limits applied by the validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Limit for short text fields, URLs and list elements
    pub default_limit: usize,

    /// Limit for the extension description
    pub description_limit: usize,

    /// Limit for the gallery banner color
    pub gallery_color_limit: usize,

    /// Limit for namespace and extension names
    pub identifier_limit: usize,

    pub profile_display_name_limit: usize,
    pub profile_description_limit: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_STRING_SIZE,
            description_limit: DESCRIPTION_SIZE,
            gallery_color_limit: GALLERY_COLOR_SIZE,
            identifier_limit: DEFAULT_STRING_SIZE,
            profile_display_name_limit: PROFILE_DISPLAY_NAME_SIZE,
            profile_description_limit: DEFAULT_STRING_SIZE,
        }
    }
}

impl ValidationConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ValidatorError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| ValidatorError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("default_limit", self.default_limit),
            ("description_limit", self.description_limit),
            ("gallery_color_limit", self.gallery_color_limit),
            ("identifier_limit", self.identifier_limit),
            ("profile_display_name_limit", self.profile_display_name_limit),
            ("profile_description_limit", self.profile_description_limit),
        ];

        for (name, limit) in limits {
            if limit == 0 {
                return Err(ValidatorError::InvalidConfiguration(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.default_limit, 255);
        assert_eq!(config.description_limit, 2048);
        assert_eq!(config.gallery_color_limit, 16);
        assert_eq!(config.profile_display_name_limit, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let config = ValidationConfig {
            gallery_color_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gallery_color_limit"));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "description_limit": 4096 }}"#).unwrap();

        let config = ValidationConfig::load(file.path()).unwrap();
        assert_eq!(config.description_limit, 4096);
        assert_eq!(config.default_limit, 255);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ValidationConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ValidatorError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ValidationConfig::load("/nonexistent/vsx-config.json").unwrap_err();
        assert!(matches!(err, ValidatorError::ConfigIo { .. }));
    }
}
