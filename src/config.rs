//! Deployment configuration.
//!
//! Everything the dispatcher needs is loaded from a single TOML file
//! (`deploy.toml` by default) into an explicit [`DeployConfig`] struct:
//! local tool paths, distribution identifiers, registry/account identifiers,
//! cluster name, and region lists. No global state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::tool::FailurePolicy;

/// Complete configuration for a deployment run
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    /// Local tool paths
    pub tools: Tools,
    /// itch.io identifiers
    pub itch: Itch,
    /// Steam identifiers
    pub steam: Steam,
    /// AWS account, regions, and cluster
    pub aws: Aws,
    /// Client export targets and pushes
    #[serde(default)]
    pub export: Export,
    /// Container image names and dockerfiles
    #[serde(default)]
    pub images: Images,
    /// Failure handling policy
    #[serde(default)]
    pub policy: Policy,
}

impl DeployConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Paths to the external tools driven by the dispatcher
#[derive(Debug, Clone, Deserialize)]
pub struct Tools {
    /// Godot editor binary, used for headless exports
    pub godot: PathBuf,
    /// itch.io butler binary
    pub butler: PathBuf,
    /// steamcmd binary
    pub steamcmd: PathBuf,
}

/// Resolve a configured tool path.
///
/// Paths with a directory component are taken as-is; bare names are looked
/// up on `PATH`.
pub fn resolve_tool(tool: &Path) -> Result<PathBuf, ConfigError> {
    if tool.components().count() > 1 {
        return Ok(tool.to_path_buf());
    }
    which::which(tool.as_os_str()).map_err(|source| ConfigError::ToolNotFound {
        tool: tool.display().to_string(),
        source,
    })
}

/// itch.io project identifiers
#[derive(Debug, Clone, Deserialize)]
pub struct Itch {
    /// Account name
    pub user: String,
    /// Game name under that account
    pub game: String,
}

impl Itch {
    /// Project identifier in `user/game` form, as butler expects it.
    pub fn project(&self) -> String {
        format!("{}/{}", self.user, self.game)
    }
}

/// Steam build identifiers
#[derive(Debug, Clone, Deserialize)]
pub struct Steam {
    /// Account used for `+login`
    pub username: String,
    /// App build descriptor passed to `+run_app_build`
    pub app_build_vdf: PathBuf,
}

/// AWS account, regions, cluster, and task families
#[derive(Debug, Clone, Deserialize)]
pub struct Aws {
    /// Account id, used to derive the registry URL
    pub account_id: String,
    /// Primary region; image pushes go here
    pub region: String,
    /// Regions the game is deployed to; restarts loop over these.
    /// Defaults to the primary region when empty.
    #[serde(default)]
    pub regions: Vec<String>,
    /// ECS cluster name
    pub cluster: String,
    /// Task family for game servers
    #[serde(default = "default_gameserver_family")]
    pub gameserver_family: String,
    /// Task family for matchmakers
    #[serde(default = "default_matchmaker_family")]
    pub matchmaker_family: String,
}

impl Aws {
    /// Regions that restart actions iterate over, in configured order.
    pub fn target_regions(&self) -> impl Iterator<Item = &str> {
        let regions = if self.regions.is_empty() {
            std::slice::from_ref(&self.region)
        } else {
            &self.regions[..]
        };
        regions.iter().map(String::as_str)
    }
}

fn default_gameserver_family() -> String {
    "gameservers".to_string()
}

fn default_matchmaker_family() -> String {
    "matchmakers".to_string()
}

/// Client export targets and patch-distribution pushes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Export {
    /// Editor export presets, invoked in order
    pub targets: Vec<String>,
    /// Export directories pushed to itch.io, in order
    pub pushes: Vec<ExportPush>,
    /// File the build timestamp is written to
    pub version_file: PathBuf,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            targets: vec![
                "Linux/X11".to_string(),
                "Windows Desktop".to_string(),
                "macOS".to_string(),
            ],
            pushes: vec![
                ExportPush {
                    dir: PathBuf::from("Exports/Windows"),
                    channel: "win".to_string(),
                },
                ExportPush {
                    dir: PathBuf::from("Exports/MacOS"),
                    channel: "mac".to_string(),
                },
                ExportPush {
                    dir: PathBuf::from("Exports/Linux"),
                    channel: "linux".to_string(),
                },
            ],
            version_file: PathBuf::from("version"),
        }
    }
}

/// One export directory and the itch.io channel it is pushed to
#[derive(Debug, Clone, Deserialize)]
pub struct ExportPush {
    /// Directory produced by the editor export
    pub dir: PathBuf,
    /// Channel suffix, e.g. `win`
    pub channel: String,
}

/// Container image names and dockerfile paths
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Game server image name
    pub gameserver: String,
    /// Matchmaker image name
    pub matchmaker: String,
    /// Dockerfile for the game server image
    pub gameserver_dockerfile: PathBuf,
    /// Dockerfile for the matchmaker image
    pub matchmaker_dockerfile: PathBuf,
}

impl Default for Images {
    fn default() -> Self {
        Self {
            gameserver: "gameserver".to_string(),
            matchmaker: "matchmaker".to_string(),
            gameserver_dockerfile: PathBuf::from("Server/dockerfiles/GameServer"),
            matchmaker_dockerfile: PathBuf::from("Server/dockerfiles/Matchmaker"),
        }
    }
}

/// Failure handling policy
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Policy {
    /// What to do when an external tool exits nonzero
    #[serde(default)]
    pub on_tool_failure: FailurePolicy,
}
