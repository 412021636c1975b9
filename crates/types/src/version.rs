//! Path segments reserved by the routing layer.

/// Aliases resolved by the routing layer instead of a concrete version.
pub struct VersionAlias;

impl VersionAlias {
    pub const LATEST: &'static str = "latest";
    pub const PRE_RELEASE: &'static str = "pre-release";
}

/// Literal path segment used for the reviews endpoint of an extension.
pub const REVIEWS_SEGMENT: &str = "reviews";

/// Stands in for "no namespace" in routes.
pub const NAMESPACE_PLACEHOLDER: &str = "-";
