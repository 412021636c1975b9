use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Build or runtime target an extension version is published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetPlatform {
    Win32X64,
    Win32Ia32,
    Win32Arm64,
    LinuxX64,
    LinuxArm64,
    LinuxArmhf,
    AlpineX64,
    AlpineArm64,
    DarwinX64,
    DarwinArm64,
    Web,
    Universal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlatformError(pub String);

impl Display for ParsePlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported target platform '{}'", self.0)
    }
}

impl std::error::Error for ParsePlatformError {}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 12] = [
        TargetPlatform::Win32X64,
        TargetPlatform::Win32Ia32,
        TargetPlatform::Win32Arm64,
        TargetPlatform::LinuxX64,
        TargetPlatform::LinuxArm64,
        TargetPlatform::LinuxArmhf,
        TargetPlatform::AlpineX64,
        TargetPlatform::AlpineArm64,
        TargetPlatform::DarwinX64,
        TargetPlatform::DarwinArm64,
        TargetPlatform::Web,
        TargetPlatform::Universal,
    ];

    pub const NAME_UNIVERSAL: &'static str = "universal";

    pub fn name(&self) -> &'static str {
        match self {
            TargetPlatform::Win32X64 => "win32-x64",
            TargetPlatform::Win32Ia32 => "win32-ia32",
            TargetPlatform::Win32Arm64 => "win32-arm64",
            TargetPlatform::LinuxX64 => "linux-x64",
            TargetPlatform::LinuxArm64 => "linux-arm64",
            TargetPlatform::LinuxArmhf => "linux-armhf",
            TargetPlatform::AlpineX64 => "alpine-x64",
            TargetPlatform::AlpineArm64 => "alpine-arm64",
            TargetPlatform::DarwinX64 => "darwin-x64",
            TargetPlatform::DarwinArm64 => "darwin-arm64",
            TargetPlatform::Web => "web",
            TargetPlatform::Universal => Self::NAME_UNIVERSAL,
        }
    }

    /// Names of every supported platform, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(TargetPlatform::name)
    }

    /// An absent platform means the version runs everywhere.
    pub fn is_universal(name: Option<&str>) -> bool {
        name.is_none_or(|n| n.is_empty() || n == Self::NAME_UNIVERSAL)
    }
}

impl FromStr for TargetPlatform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|platform| platform.name() == s)
            .ok_or_else(|| ParsePlatformError(s.to_string()))
    }
}

impl TryFrom<String> for TargetPlatform {
    type Error = ParsePlatformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetPlatform> for String {
    fn from(platform: TargetPlatform) -> Self {
        platform.name().to_string()
    }
}

impl Display for TargetPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for platform in TargetPlatform::ALL {
            assert_eq!(platform.name().parse::<TargetPlatform>(), Ok(platform));
        }
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let err = "debian-x64".parse::<TargetPlatform>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported target platform 'debian-x64'");
        assert!("Linux-X64".parse::<TargetPlatform>().is_err());
    }

    #[test]
    fn test_is_universal() {
        assert!(TargetPlatform::is_universal(None));
        assert!(TargetPlatform::is_universal(Some("universal")));
        assert!(!TargetPlatform::is_universal(Some("web")));
    }

    #[test]
    fn test_serde_uses_platform_names() {
        let json = serde_json::to_string(&TargetPlatform::DarwinArm64).unwrap();
        assert_eq!(json, "\"darwin-arm64\"");
        let parsed: TargetPlatform = serde_json::from_str("\"linux-armhf\"").unwrap();
        assert_eq!(parsed, TargetPlatform::LinuxArmhf);
        assert!(serde_json::from_str::<TargetPlatform>("\"solaris\"").is_err());
    }
}
