//! Command line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Release automation for a game project
#[derive(Parser, Debug)]
#[command(
    name = "gamedeploy",
    version,
    about = "Release automation for a game project",
    long_about = "Export game client builds, push them to distribution platforms, \
build and push server container images, and restart cloud container tasks.

Commands run in the order given:
  gamedeploy build:game release:game
  gamedeploy build:mm restart:mm
  gamedeploy restart:game"
)]
pub struct Args {
    /// Deployment commands, run in order: build:game, release:game,
    /// build:mm, restart:game, restart:mm
    #[arg(value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Path to the deployment configuration file
    #[arg(short, long, default_value = "deploy.toml", value_name = "PATH")]
    pub config: PathBuf,

    /// Continue past external tool failures instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_positional_and_ordered() {
        let args = Args::parse_from(["gamedeploy", "build:game", "release:game"]);
        assert_eq!(args.commands, vec!["build:game", "release:game"]);
        assert_eq!(args.config, PathBuf::from("deploy.toml"));
    }

    #[test]
    fn no_commands_is_valid() {
        let args = Args::parse_from(["gamedeploy"]);
        assert!(args.commands.is_empty());
    }

    #[test]
    fn keep_going_and_config_flags() {
        let args = Args::parse_from([
            "gamedeploy",
            "--keep-going",
            "--config",
            "ops/deploy.toml",
            "build:mm",
        ]);
        assert!(args.keep_going);
        assert_eq!(args.config, PathBuf::from("ops/deploy.toml"));
        assert_eq!(args.commands, vec!["build:mm"]);
    }
}
