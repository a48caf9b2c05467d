//! Target platforms binaries are provisioned for.

use std::{fmt, str::FromStr};

use vorpal_sdk::api::artifact::ArtifactSystem::{
    self, Aarch64Darwin, X8664Darwin, X8664Linux,
};

use crate::error::UnsupportedPlatform;

/// An (operating system, CPU architecture) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinuxX8664,
    MacosX8664,
    MacosAarch64,
    WindowsX8664,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::LinuxX8664,
        Platform::MacosX8664,
        Platform::MacosAarch64,
        Platform::WindowsX8664,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinuxX8664 => "linux-x86_64",
            Platform::MacosX8664 => "macos-x86_64",
            Platform::MacosAarch64 => "macos-aarch64",
            Platform::WindowsX8664 => "windows-x86_64",
        }
    }

    /// Detect the platform of the host running the build.
    pub fn current() -> Result<Self, UnsupportedPlatform> {
        Self::from_os_arch(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map `std::env::consts`-style OS and architecture names.
    pub fn from_os_arch(os: &str, arch: &str) -> Result<Self, UnsupportedPlatform> {
        match (os, arch) {
            ("linux", "x86_64") => Ok(Platform::LinuxX8664),
            ("macos", "x86_64") => Ok(Platform::MacosX8664),
            ("macos", "aarch64") => Ok(Platform::MacosAarch64),
            ("windows", "x86_64") => Ok(Platform::WindowsX8664),
            (os, arch) => Err(UnsupportedPlatform::new(format!("{os}-{arch}"))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnsupportedPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| UnsupportedPlatform::new(s))
    }
}

impl TryFrom<ArtifactSystem> for Platform {
    type Error = UnsupportedPlatform;

    fn try_from(system: ArtifactSystem) -> Result<Self, Self::Error> {
        match system {
            X8664Linux => Ok(Platform::LinuxX8664),
            X8664Darwin => Ok(Platform::MacosX8664),
            Aarch64Darwin => Ok(Platform::MacosAarch64),
            other => Err(UnsupportedPlatform::new(format!("{other:?}"))),
        }
    }
}
