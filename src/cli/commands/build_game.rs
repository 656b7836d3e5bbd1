//! `build:game`: stamp the version file and export the client for every
//! configured target.

use crate::cli::OutputManager;
use crate::config::{DeployConfig, resolve_tool};
use crate::error::Result;
use crate::tool::{ToolInvocation, ToolRunner};
use crate::version_stamp;

pub(crate) async fn execute<R: ToolRunner>(
    config: &DeployConfig,
    runner: &mut R,
    output: &OutputManager,
) -> Result<()> {
    let stamp = version_stamp::write_stamp(&config.export.version_file)?;
    output.println(&format!("version {stamp}"));

    let godot = resolve_tool(&config.tools.godot)?;
    for target in &config.export.targets {
        output.progress(&format!("Exporting {target}..."));
        runner
            .run(
                ToolInvocation::new(&godot)
                    .arg("--headless")
                    .arg("--export-release")
                    .arg(target),
            )
            .await?;
    }

    output.success(&format!(
        "Exported {} target(s)",
        config.export.targets.len()
    ));
    Ok(())
}
