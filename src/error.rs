//! Error types for deployment operations.
//!
//! Each subsystem gets its own error enum; `ReleaseError` is the top-level
//! type returned across command boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deployment operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all deployment operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// External tool invocation errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Cloud API errors
    #[error("Cloud error: {0}")]
    Cloud(#[from] CloudError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI argument errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Command token not in the recognized set
    #[error("invalid command: {token}")]
    UnknownCommand {
        /// The unrecognized token as given on the command line
        token: String,
    },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("configuration file not found at {path}")]
    NotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// TOML deserialization error
        #[source]
        source: toml::de::Error,
    },

    /// A configured tool name could not be resolved on PATH
    #[error("could not find tool '{tool}' on PATH")]
    ToolNotFound {
        /// Tool name as configured
        tool: String,
        /// Lookup error
        #[source]
        source: which::Error,
    },
}

/// External tool invocation errors
#[derive(Error, Debug)]
pub enum ToolError {
    /// Process could not be started at all
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        /// Command line that failed
        command: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Could not deliver the stdin payload to the child
    #[error("failed to write to stdin of '{command}': {source}")]
    Stdin {
        /// Command line that failed
        command: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Process exited nonzero under the abort policy
    #[error("'{command}' exited with status {code}")]
    Failed {
        /// Command line that failed
        command: String,
        /// Exit code (-1 if terminated by signal)
        code: i32,
    },
}

/// Cloud orchestration and registry errors
#[derive(Error, Debug)]
pub enum CloudError {
    /// Listing tasks for a family failed
    #[error("failed to list tasks for family '{family}' in {region}: {source}")]
    ListTasks {
        /// Task family queried
        family: String,
        /// Region queried
        region: String,
        /// SDK error
        #[source]
        source: Box<aws_sdk_ecs::Error>,
    },

    /// Stopping a task failed
    #[error("failed to stop task {task} in {region}: {source}")]
    StopTask {
        /// Task ARN
        task: String,
        /// Region queried
        region: String,
        /// SDK error
        #[source]
        source: Box<aws_sdk_ecs::Error>,
    },

    /// Fetching a registry authorization token failed
    #[error("failed to obtain a registry token for {region}: {source}")]
    RegistryToken {
        /// Region queried
        region: String,
        /// SDK error
        #[source]
        source: Box<aws_sdk_ecr::Error>,
    },

    /// The registry returned an authorization token that could not be decoded
    #[error("registry returned a malformed authorization token")]
    MalformedRegistryToken,
}

impl ReleaseError {
    /// Recovery suggestions for the most common operational failures.
    ///
    /// Returns an empty list when there is nothing actionable to suggest.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Config(ConfigError::NotFound { path }) => vec![
                format!(
                    "Copy deploy.example.toml to {} and fill in your values",
                    path.display()
                ),
                "Pass --config <PATH> to use a file elsewhere".to_string(),
            ],
            ReleaseError::Tool(ToolError::Spawn { command, .. })
                if command.starts_with("docker") =>
            {
                vec![
                    "Check that Docker is installed and the daemon is running".to_string(),
                    "Try: docker info".to_string(),
                ]
            }
            ReleaseError::Tool(ToolError::Spawn { .. }) => vec![
                "Check the tool paths in the [tools] section of your configuration".to_string(),
            ],
            ReleaseError::Cloud(_) => vec![
                "Check your AWS credentials (AWS_PROFILE / AWS_ACCESS_KEY_ID)".to_string(),
                "Confirm the configured account id, regions, and cluster name".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_display_names_the_token() {
        let err = CliError::UnknownCommand {
            token: "deploy:game".to_string(),
        };
        assert_eq!(err.to_string(), "invalid command: deploy:game");
    }

    #[test]
    fn cli_errors_are_not_prefixed_when_wrapped() {
        // The unknown-command diagnostic is user-facing verbatim; the
        // top-level wrapper must not decorate it.
        let err = ReleaseError::from(CliError::UnknownCommand {
            token: "bogus".to_string(),
        });
        assert_eq!(err.to_string(), "invalid command: bogus");
    }

    #[test]
    fn missing_config_suggests_the_template() {
        let err = ReleaseError::from(ConfigError::NotFound {
            path: PathBuf::from("deploy.toml"),
        });
        let suggestions = err.recovery_suggestions();
        assert!(!suggestions.is_empty());
        assert!(suggestions[0].contains("deploy.example.toml"));
    }
}
