use crate::error::{PublishError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for publish-tool.
///
/// Covers the versions file location, the module whose version is managed,
/// the build command used for publish actions, and artifact listing paths.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Module name whose version record is read and bumped
    #[serde(default = "default_module")]
    pub module: String,

    /// Path to the line-oriented versions file
    #[serde(default = "default_versions_file")]
    pub versions_file: PathBuf,

    /// Build command invoked for publish actions
    #[serde(default = "default_build_command")]
    pub build_command: String,

    #[serde(default)]
    pub tasks: TasksConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

fn default_module() -> String {
    "common".to_string()
}

fn default_versions_file() -> PathBuf {
    PathBuf::from("gradle/libs.versions.toml")
}

fn default_build_command() -> String {
    "./gradlew".to_string()
}

/// Build task names invoked for each publish action.
///
/// The test and github scopes share `remote` on purpose: the source
/// publishing setup drives both through the same publish task, with the
/// repository selected by the build itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TasksConfig {
    #[serde(default = "default_local_task")]
    pub local: String,

    #[serde(default = "default_remote_task")]
    pub remote: String,
}

fn default_local_task() -> String {
    "publishToMavenLocal".to_string()
}

fn default_remote_task() -> String {
    "publish".to_string()
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            local: default_local_task(),
            remote: default_remote_task(),
        }
    }
}

/// Where published artifacts land locally, for the informational listing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactsConfig {
    /// Root of the local artifact repository
    #[serde(default = "default_repository")]
    pub repository: PathBuf,

    /// Group segment under the repository root (slash-separated)
    #[serde(default)]
    pub group_path: String,
}

fn default_repository() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".m2/repository"),
        None => PathBuf::from(".m2/repository"),
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        ArtifactsConfig {
            repository: default_repository(),
            group_path: String::new(),
        }
    }
}

impl ArtifactsConfig {
    /// Resolves the directory a module's artifacts land in for a version.
    pub fn module_dir(&self, module: &str, version: &str) -> PathBuf {
        let mut dir = self.repository.clone();
        for segment in self.group_path.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir.push(module);
        dir.push(version);
        dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            module: default_module(),
            versions_file: default_versions_file(),
            build_command: default_build_command(),
            tasks: TasksConfig::default(),
            artifacts: ArtifactsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `publishtool.toml` in current directory
/// 3. `~/.config/.publishtool.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./publishtool.toml").exists() {
        fs::read_to_string("./publishtool.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".publishtool.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str).map_err(|e| PublishError::config(e.to_string()))?;
    Ok(config)
}
