//! # gamedeploy
//!
//! Release automation for a game project. One binary, five commands:
//!
//! - `build:game` — stamp the version file and run the editor's headless
//!   export for every configured target
//! - `release:game` — push the exports to itch.io, run the Steam app
//!   build, then build and push the game server container image
//! - `build:mm` — build and push the matchmaker container image
//! - `restart:game` / `restart:mm` — stop every running task of the
//!   family in every configured region so the orchestrator reschedules
//!   them on the latest image
//!
//! Commands run sequentially in the order given; an unrecognized command
//! halts the rest of the list.
//!
//! ## Usage
//!
//! ```bash
//! gamedeploy build:game release:game
//! gamedeploy build:mm restart:mm
//! gamedeploy --keep-going restart:game
//! ```
//!
//! Configuration lives in `deploy.toml` (see `deploy.example.toml`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod cloud;
pub mod config;
pub mod dispatch;
pub mod docker;
pub mod error;
pub mod tool;
pub mod version_stamp;

// Re-export main types for the public API
pub use cli::{Args, OutputManager};
pub use cloud::{AwsCloud, CloudApi, RegistryToken};
pub use config::DeployConfig;
pub use dispatch::{CommandToken, Dispatcher};
pub use error::{CliError, CloudError, ConfigError, ReleaseError, Result, ToolError};
pub use tool::{FailurePolicy, ProcessRunner, ToolInvocation, ToolOutput, ToolRunner};
