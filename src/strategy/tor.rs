use crate::{platform::Platform, strategy::PlatformUrlStrategy};

/// Tor expert bundle release provisioned when no version is given.
pub const TOR_BINARY_VERSION: &str = "13.5.6";

/// Download URLs of the Tor expert bundle on the Tor Project archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorBinaryUrlStrategy {
    version: String,
}

impl TorBinaryUrlStrategy {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn bundle(&self, system: &str) -> String {
        format!("tor-expert-bundle-{}-{system}.tar.gz", self.version)
    }
}

impl Default for TorBinaryUrlStrategy {
    fn default() -> Self {
        Self::new(TOR_BINARY_VERSION)
    }
}

impl PlatformUrlStrategy for TorBinaryUrlStrategy {
    fn url_prefix(&self) -> String {
        format!(
            "https://archive.torproject.org/tor-package-archive/torbrowser/{}/",
            self.version
        )
    }

    fn url_for(&self, platform: Platform) -> String {
        match platform {
            Platform::LinuxX8664 => self.bundle("linux-x86_64"),
            Platform::MacosX8664 => self.bundle("macos-x86_64"),
            // The native macos-aarch64 bundle does not work yet, so Apple silicon
            // runs the x86_64 bundle under Rosetta. Switch back to
            // `self.bundle("macos-aarch64")` once a working build is published.
            Platform::MacosAarch64 => self.bundle("macos-x86_64"),
            Platform::WindowsX8664 => self.bundle("windows-x86_64"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::resolve_url;

    const PREFIX: &str = "https://archive.torproject.org/tor-package-archive/torbrowser/13.5.6/";

    #[test]
    fn url_prefix_contains_version() {
        let strategy = TorBinaryUrlStrategy::new("13.5.6");

        assert_eq!(strategy.url_prefix(), PREFIX);
    }

    #[test]
    fn resolves_every_platform() {
        let strategy = TorBinaryUrlStrategy::new("13.5.6");

        assert_eq!(
            resolve_url(&strategy, Platform::LinuxX8664),
            format!("{PREFIX}tor-expert-bundle-13.5.6-linux-x86_64.tar.gz")
        );
        assert_eq!(
            resolve_url(&strategy, Platform::MacosX8664),
            format!("{PREFIX}tor-expert-bundle-13.5.6-macos-x86_64.tar.gz")
        );
        assert_eq!(
            resolve_url(&strategy, Platform::MacosAarch64),
            format!("{PREFIX}tor-expert-bundle-13.5.6-macos-x86_64.tar.gz")
        );
        assert_eq!(
            resolve_url(&strategy, Platform::WindowsX8664),
            format!("{PREFIX}tor-expert-bundle-13.5.6-windows-x86_64.tar.gz")
        );
    }

    #[test]
    fn macos_aarch64_uses_x86_64_bundle() {
        for version in ["13.5.6", "14.0.1", "0.4.8.12"] {
            let strategy = TorBinaryUrlStrategy::new(version);

            assert_eq!(
                strategy.url_for(Platform::MacosAarch64),
                strategy.url_for(Platform::MacosX8664)
            );
            assert!(!strategy
                .url_for(Platform::MacosAarch64)
                .contains("aarch64"));
        }
    }

    #[test]
    fn filenames_contain_version_once() {
        for version in ["13.5.6", "14.0a1", "0.4.8.12"] {
            let strategy = TorBinaryUrlStrategy::new(version);

            for platform in Platform::ALL {
                let url = resolve_url(&strategy, platform);
                let filename = strategy.url_for(platform);

                assert!(url.starts_with(&strategy.url_prefix()));
                assert!(url.ends_with(&filename));
                assert_eq!(filename.matches(version).count(), 1, "{filename}");
            }
        }
    }

    #[test]
    fn changing_version_changes_every_url() {
        let old = TorBinaryUrlStrategy::new("13.5.6");
        let new = TorBinaryUrlStrategy::new("13.5.7");

        for platform in Platform::ALL {
            let old_url = resolve_url(&old, platform);
            let new_url = resolve_url(&new, platform);

            assert_ne!(old_url, new_url);
            assert_eq!(old_url.replace("13.5.6", "13.5.7"), new_url);
        }
    }

    #[test]
    fn resolution_is_repeatable() {
        let strategy = TorBinaryUrlStrategy::default();

        assert_eq!(strategy.version(), TOR_BINARY_VERSION);
        for platform in Platform::ALL {
            assert_eq!(
                resolve_url(&strategy, platform),
                resolve_url(&strategy, platform)
            );
        }
    }

    #[test]
    fn empty_version_is_not_validated() {
        let strategy = TorBinaryUrlStrategy::new("");

        assert_eq!(
            resolve_url(&strategy, Platform::LinuxX8664),
            "https://archive.torproject.org/tor-package-archive/torbrowser//tor-expert-bundle--linux-x86_64.tar.gz"
        );
    }
}
