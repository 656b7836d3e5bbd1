//! The deployment dispatcher.
//!
//! Maps command-line tokens to actions and runs them sequentially. The
//! token set is a closed enumeration, so the token-to-action binding is a
//! `match` and cannot contain duplicates; anything outside the set is a
//! typed [`CliError::UnknownCommand`].

use std::str::FromStr;

use crate::cli::OutputManager;
use crate::cli::commands::{build_game, build_matchmaker, release_game, restart};
use crate::cloud::CloudApi;
use crate::config::DeployConfig;
use crate::error::{CliError, Result};
use crate::tool::ToolRunner;

/// The recognized deployment commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandToken {
    /// Stamp the version file and export the client for every target
    BuildGame,
    /// Push client exports to itch.io and Steam; build and push the
    /// game server image
    ReleaseGame,
    /// Build and push the matchmaker image
    BuildMatchmaker,
    /// Stop all running game server tasks in every region
    RestartGame,
    /// Stop all running matchmaker tasks in every region
    RestartMatchmaker,
}

impl CommandToken {
    /// The token as written on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandToken::BuildGame => "build:game",
            CommandToken::ReleaseGame => "release:game",
            CommandToken::BuildMatchmaker => "build:mm",
            CommandToken::RestartGame => "restart:game",
            CommandToken::RestartMatchmaker => "restart:mm",
        }
    }
}

impl FromStr for CommandToken {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, CliError> {
        match s {
            "build:game" => Ok(CommandToken::BuildGame),
            "release:game" => Ok(CommandToken::ReleaseGame),
            "build:mm" => Ok(CommandToken::BuildMatchmaker),
            "restart:game" => Ok(CommandToken::RestartGame),
            "restart:mm" => Ok(CommandToken::RestartMatchmaker),
            other => Err(CliError::UnknownCommand {
                token: other.to_string(),
            }),
        }
    }
}

/// Executes deployment commands in order.
///
/// Generic over the cloud API and the tool runner so command sequences can
/// be verified against recording stubs.
pub struct Dispatcher<C, R> {
    config: DeployConfig,
    cloud: C,
    runner: R,
    output: OutputManager,
}

impl<C: CloudApi, R: ToolRunner> Dispatcher<C, R> {
    /// Assemble a dispatcher from its collaborators.
    pub fn new(config: DeployConfig, cloud: C, runner: R, output: OutputManager) -> Self {
        Self {
            config,
            cloud,
            runner,
            output,
        }
    }

    /// Run each token's action in the order given.
    ///
    /// Tokens are parsed at their turn: actions before an unrecognized
    /// token have already run when the error is returned (fail-fast, no
    /// rollback).
    pub async fn run(&mut self, tokens: &[String]) -> Result<()> {
        for token in tokens {
            let command = CommandToken::from_str(token)?;
            self.execute(command).await?;
        }
        Ok(())
    }

    /// Execute a single command.
    pub async fn execute(&mut self, command: CommandToken) -> Result<()> {
        log::info!("executing {}", command.as_str());
        match command {
            CommandToken::BuildGame => {
                build_game::execute(&self.config, &mut self.runner, &self.output).await
            }
            CommandToken::ReleaseGame => {
                release_game::execute(&self.config, &self.cloud, &mut self.runner, &self.output)
                    .await
            }
            CommandToken::BuildMatchmaker => {
                build_matchmaker::execute(&self.config, &self.cloud, &mut self.runner, &self.output)
                    .await
            }
            CommandToken::RestartGame => {
                restart::execute(
                    &self.config,
                    &self.cloud,
                    &self.output,
                    &self.config.aws.gameserver_family,
                )
                .await
            }
            CommandToken::RestartMatchmaker => {
                restart::execute(
                    &self.config,
                    &self.cloud,
                    &self.output,
                    &self.config.aws.matchmaker_family,
                )
                .await
            }
        }
    }

    /// Tear the dispatcher apart, returning its collaborators.
    ///
    /// Used by tests to inspect what the stubs recorded.
    pub fn into_parts(self) -> (DeployConfig, C, R) {
        (self.config, self.cloud, self.runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_round_trips() {
        for token in [
            CommandToken::BuildGame,
            CommandToken::ReleaseGame,
            CommandToken::BuildMatchmaker,
            CommandToken::RestartGame,
            CommandToken::RestartMatchmaker,
        ] {
            assert_eq!(CommandToken::from_str(token.as_str()).unwrap(), token);
        }
    }

    #[test]
    fn unknown_tokens_are_rejected_with_the_token_named() {
        let err = CommandToken::from_str("deploy:game").unwrap_err();
        assert_eq!(err.to_string(), "invalid command: deploy:game");
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert!(CommandToken::from_str("BUILD:GAME").is_err());
    }
}
