use thiserror::Error;

/// A build target outside the platforms an artifact can be provisioned for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported platform: {platform}")]
pub struct UnsupportedPlatform {
    pub platform: String,
}

impl UnsupportedPlatform {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }
}
