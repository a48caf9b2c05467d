use anyhow::Result;
use indoc::formatdoc;
use vorpal_sdk::{
    api::artifact::ArtifactSystem::{self, Aarch64Darwin, X8664Darwin, X8664Linux},
    artifact::{step, Artifact, ArtifactSource},
    context::ConfigContext,
};

use crate::{
    platform::Platform,
    strategy::{
        resolve_url,
        tor::{TorBinaryUrlStrategy, TOR_BINARY_VERSION},
    },
};

pub const TOR_SYSTEMS: [ArtifactSystem; 3] = [Aarch64Darwin, X8664Darwin, X8664Linux];

pub struct TorExpertBundle {
    version: String,
}

impl Default for TorExpertBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl TorExpertBundle {
    pub fn new() -> Self {
        Self {
            version: TOR_BINARY_VERSION.to_string(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub async fn build(self, context: &mut ConfigContext) -> Result<String> {
        let name = "tor-expert-bundle";

        let platform = Platform::try_from(context.get_system())?;

        let strategy = TorBinaryUrlStrategy::new(self.version.as_str());

        let source_path = resolve_url(&strategy, platform);

        tracing::info!(%platform, version = %self.version, "provisioning {name} from {source_path}");

        let source = ArtifactSource::new(name, &source_path).build();

        let steps = vec![step::shell(context, &[], &[], step_script(name), &[]).await?];

        Artifact::new(name, steps, TOR_SYSTEMS.to_vec())
            .with_aliases(vec![format!("{name}:{}", self.version)])
            .with_sources(vec![source])
            .build(context)
            .await
    }
}

fn step_script(name: &str) -> String {
    formatdoc! {"
        mkdir -pv \"$VORPAL_OUTPUT/bin\" \"$VORPAL_OUTPUT/share/tor\"
        pushd ./source/{name}
        cp -Rv tor/* \"$VORPAL_OUTPUT/bin/.\"
        cp -Rv data/* \"$VORPAL_OUTPUT/share/tor/.\"
        chmod +x \"$VORPAL_OUTPUT/bin/tor\"",
    }
}
