//! Per-platform download URL resolution.

use crate::platform::Platform;

pub mod tor;

/// Produces the download URL of an artifact for each supported platform.
pub trait PlatformUrlStrategy {
    /// Base shared by every platform URL.
    fn url_prefix(&self) -> String;

    /// Platform specific filename appended to [`PlatformUrlStrategy::url_prefix`].
    fn url_for(&self, platform: Platform) -> String;
}

/// Full download URL of `strategy`'s artifact on `platform`.
pub fn resolve_url<S: PlatformUrlStrategy + ?Sized>(strategy: &S, platform: Platform) -> String {
    let url = format!("{}{}", strategy.url_prefix(), strategy.url_for(platform));

    tracing::debug!(%platform, %url, "resolved artifact url");

    url
}
