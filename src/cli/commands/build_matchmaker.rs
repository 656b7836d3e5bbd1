//! `build:mm`: build and push the matchmaker image.

use super::helpers::push_image;
use crate::cli::OutputManager;
use crate::cloud::CloudApi;
use crate::config::DeployConfig;
use crate::error::Result;
use crate::tool::ToolRunner;

pub(crate) async fn execute<C: CloudApi, R: ToolRunner>(
    config: &DeployConfig,
    cloud: &C,
    runner: &mut R,
    output: &OutputManager,
) -> Result<()> {
    push_image(
        config,
        cloud,
        runner,
        output,
        &config.images.matchmaker,
        &config.images.matchmaker_dockerfile,
    )
    .await?;

    output.success("Matchmaker image pushed");
    Ok(())
}
