use anyhow::Result;
use tor_binary_artifacts::artifact::tor_expert_bundle::TorExpertBundle;
use tracing_subscriber::EnvFilter;
use vorpal_sdk::context::get_context;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut context = get_context().await?;

    // Artifacts

    TorExpertBundle::new().build(&mut context).await?;

    context.run().await
}
