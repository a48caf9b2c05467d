pub mod artifact;
pub mod error;
pub mod platform;
pub mod strategy;

pub use error::UnsupportedPlatform;
pub use platform::Platform;
pub use strategy::{resolve_url, tor::TorBinaryUrlStrategy, PlatformUrlStrategy};
