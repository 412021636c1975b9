use vsx_types::TargetPlatform;

/// Decides which target platform identifiers may be published.
pub trait PlatformRegistry: Send + Sync {
    fn is_valid(&self, target_platform: Option<&str>) -> bool;
}

/// The platforms known to [`TargetPlatform`]. Absent or empty means universal.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownPlatforms;

impl PlatformRegistry for KnownPlatforms {
    fn is_valid(&self, target_platform: Option<&str>) -> bool {
        TargetPlatform::is_universal(target_platform)
            || target_platform.is_some_and(|name| name.parse::<TargetPlatform>().is_ok())
    }
}
