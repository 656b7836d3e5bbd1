//! `restart:game` / `restart:mm`: in every configured region, list the
//! running tasks of a family and stop each one. The orchestrator replaces
//! stopped tasks with fresh ones running the latest pushed image.

use crate::cli::OutputManager;
use crate::cloud::CloudApi;
use crate::config::DeployConfig;
use crate::error::Result;

pub(crate) async fn execute<C: CloudApi>(
    config: &DeployConfig,
    cloud: &C,
    output: &OutputManager,
    family: &str,
) -> Result<()> {
    for region in config.aws.target_regions() {
        output.progress(&format!("Restarting {family} tasks in {region}..."));
        let tasks = cloud
            .list_tasks(region, &config.aws.cluster, family)
            .await?;
        if tasks.is_empty() {
            output.println(&format!("  no running {family} tasks in {region}"));
            continue;
        }
        for task in &tasks {
            log::debug!("stopping {task}");
            cloud.stop_task(region, &config.aws.cluster, task).await?;
        }
        output.success(&format!("Stopped {} task(s) in {region}", tasks.len()));
    }
    Ok(())
}
