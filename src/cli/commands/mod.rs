//! Command execution: wires parsed arguments to the dispatcher.

pub(crate) mod build_game;
pub(crate) mod build_matchmaker;
pub(crate) mod helpers;
pub(crate) mod release_game;
pub(crate) mod restart;

use crate::cli::{Args, OutputManager};
use crate::cloud::AwsCloud;
use crate::config::DeployConfig;
use crate::dispatch::Dispatcher;
use crate::error::{ReleaseError, Result};
use crate::tool::{FailurePolicy, ProcessRunner};

/// Execute the commands named in `args`, returning a process exit code.
///
/// An empty command list is a no-op: no configuration is loaded and
/// nothing is printed.
pub async fn execute_command(args: Args) -> Result<i32> {
    if args.commands.is_empty() {
        return Ok(0);
    }

    let config = DeployConfig::load(&args.config)?;
    let output = OutputManager::new(args.verbose, args.quiet);

    let policy = if args.keep_going {
        FailurePolicy::Continue
    } else {
        config.policy.on_tool_failure
    };
    let runner = ProcessRunner::new(policy, output.clone());

    let mut dispatcher = Dispatcher::new(config, AwsCloud::new(), runner, output.clone());
    match dispatcher.run(&args.commands).await {
        Ok(()) => Ok(0),
        Err(ReleaseError::Cli(e)) => {
            output.error(&e.to_string());
            Ok(1)
        }
        Err(e) => Err(e),
    }
}
