use serde::{Deserialize, Serialize};

/// Descriptive metadata submitted with a published extension version.
///
/// Every field is optional; an absent field is always acceptable to the
/// validator unless stated otherwise. On the wire this reads and writes the
/// `package.json` shape, see [`PackageManifest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PackageManifest", into = "PackageManifest")]
pub struct ExtensionMetadata {
    pub version: Option<String>,
    pub target_platform: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub license: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub bugs: Option<String>,
    pub markdown: Option<String>,
    pub gallery_color: Option<String>,
    pub gallery_theme: Option<String>,
    pub localized_languages: Vec<String>,
    pub qna: Option<String>,
}

impl ExtensionMetadata {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Default::default()
        }
    }

    pub fn with_target_platform(mut self, target_platform: impl Into<String>) -> Self {
        self.target_platform = Some(target_platform.into());
        self
    }
}

/// The fields of an extension's `package.json` that feed [`ExtensionMetadata`].
///
/// Unknown keys (`name`, `engines`, `contributes`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct PackageManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(alias = "tags", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<ManifestLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugs: Option<ManifestLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_banner: Option<GalleryBanner>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub localized_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qna: Option<QnaSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct GalleryBanner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// `repository` and `bugs` are either a bare URL or an object with a `url` key,
/// e.g. `{ "type": "git", "url": "https://..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ManifestLink {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

impl ManifestLink {
    pub fn into_url(self) -> Option<String> {
        match self {
            ManifestLink::Url(url) => Some(url),
            ManifestLink::Object { url } => url,
        }
    }
}

/// `qna` is a string (`"marketplace"`, a URL) or `false` to turn Q&A off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum QnaSetting {
    Text(String),
    Enabled(bool),
}

impl From<PackageManifest> for ExtensionMetadata {
    fn from(manifest: PackageManifest) -> Self {
        let banner = manifest.gallery_banner.unwrap_or_default();
        Self {
            version: manifest.version,
            target_platform: manifest.target_platform,
            display_name: manifest.display_name,
            description: manifest.description,
            categories: manifest.categories,
            tags: manifest.keywords,
            license: manifest.license,
            homepage: manifest.homepage,
            repository: manifest.repository.and_then(ManifestLink::into_url),
            bugs: manifest.bugs.and_then(ManifestLink::into_url),
            markdown: manifest.markdown,
            gallery_color: banner.color,
            gallery_theme: banner.theme,
            localized_languages: manifest.localized_languages,
            qna: manifest.qna.map(|qna| match qna {
                QnaSetting::Text(text) => text,
                QnaSetting::Enabled(enabled) => enabled.to_string(),
            }),
        }
    }
}

impl From<ExtensionMetadata> for PackageManifest {
    fn from(metadata: ExtensionMetadata) -> Self {
        let gallery_banner = match (metadata.gallery_color, metadata.gallery_theme) {
            (None, None) => None,
            (color, theme) => Some(GalleryBanner { color, theme }),
        };
        Self {
            version: metadata.version,
            target_platform: metadata.target_platform,
            display_name: metadata.display_name,
            description: metadata.description,
            categories: metadata.categories,
            keywords: metadata.tags,
            license: metadata.license,
            homepage: metadata.homepage,
            repository: metadata.repository.map(ManifestLink::Url),
            bugs: metadata.bugs.map(ManifestLink::Url),
            markdown: metadata.markdown,
            gallery_banner,
            localized_languages: metadata.localized_languages,
            qna: metadata.qna.map(QnaSetting::Text),
        }
    }
}
