//! `release:game`: push client exports to itch.io, run the Steam app
//! build, then build and push the game server image.

use super::helpers::push_image;
use crate::cli::OutputManager;
use crate::cloud::CloudApi;
use crate::config::{DeployConfig, resolve_tool};
use crate::error::Result;
use crate::tool::{ToolInvocation, ToolRunner};

pub(crate) async fn execute<C: CloudApi, R: ToolRunner>(
    config: &DeployConfig,
    cloud: &C,
    runner: &mut R,
    output: &OutputManager,
) -> Result<()> {
    let butler = resolve_tool(&config.tools.butler)?;
    let project = config.itch.project();

    output.progress("Authenticating with itch.io...");
    runner.run(ToolInvocation::new(&butler).arg("login")).await?;

    for push in &config.export.pushes {
        output.progress(&format!(
            "Pushing {} to {project}:{}",
            push.dir.display(),
            push.channel
        ));
        runner
            .run(
                ToolInvocation::new(&butler)
                    .arg("push")
                    .arg(push.dir.display().to_string())
                    .arg(format!("{project}:{}", push.channel)),
            )
            .await?;
    }

    let steamcmd = resolve_tool(&config.tools.steamcmd)?;
    output.progress("Running Steam app build...");
    runner
        .run(
            ToolInvocation::new(&steamcmd)
                .arg("+login")
                .arg(&config.steam.username)
                .arg("+run_app_build")
                .arg(config.steam.app_build_vdf.display().to_string())
                .arg("+exit"),
        )
        .await?;

    push_image(
        config,
        cloud,
        runner,
        output,
        &config.images.gameserver,
        &config.images.gameserver_dockerfile,
    )
    .await?;

    output.success("Release complete");
    Ok(())
}
