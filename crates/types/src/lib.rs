//! Shared record types for extension publishing.
//!
//! These are the plain data holders handed to `vsx_validator` plus the contract
//! constants the routing layer relies on (version aliases, the namespace
//! placeholder and the supported target platform names).

pub mod metadata;
pub mod namespace;
pub mod platform;
pub mod version;

pub use metadata::{ExtensionMetadata, GalleryBanner, ManifestLink, PackageManifest, QnaSetting};
pub use namespace::NamespaceDetails;
pub use platform::{ParsePlatformError, TargetPlatform};
pub use version::{NAMESPACE_PLACEHOLDER, REVIEWS_SEGMENT, VersionAlias};
