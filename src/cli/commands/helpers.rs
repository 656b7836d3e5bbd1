//! Shared helpers for the release commands.

use std::path::Path;

use crate::cli::OutputManager;
use crate::cloud::CloudApi;
use crate::config::DeployConfig;
use crate::docker;
use crate::error::Result;
use crate::tool::ToolRunner;

/// Build an image and push it to the registry in the primary region:
/// login, build, tag, push. Restarts loop over every region; pushes do
/// not, because ECR replicates from the primary.
pub(crate) async fn push_image<C: CloudApi, R: ToolRunner>(
    config: &DeployConfig,
    cloud: &C,
    runner: &mut R,
    output: &OutputManager,
    image: &str,
    dockerfile: &Path,
) -> Result<()> {
    let registry = docker::registry_url(&config.aws.account_id, &config.aws.region);

    output.progress(&format!("Logging in to {registry}..."));
    let token = cloud.registry_token(&config.aws.region).await?;
    runner.run(docker::login(&registry, &token)).await?;

    output.progress(&format!("Building image {image}..."));
    runner.run(docker::build(image, dockerfile)).await?;
    runner.run(docker::tag(image, &registry)).await?;

    output.progress(&format!("Pushing {registry}/{image}:latest..."));
    runner.run(docker::push(image, &registry)).await?;
    Ok(())
}
