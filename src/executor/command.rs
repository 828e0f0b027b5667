use crate::config::Config;
use crate::error::{PublishError, Result};
use crate::executor::BuildExecutor;
use crate::target::{PublishAction, RemoteScope};
use crate::version::Version;
use std::process::Command;

/// Executes publish actions by spawning the configured build command.
pub struct CommandExecutor {
    config: Config,
}

impl CommandExecutor {
    pub fn new(config: Config) -> Self {
        CommandExecutor { config }
    }

    /// Run a single build task with the version passed as a project property.
    ///
    /// A zero exit code is success. Any non-zero exit code is a failure,
    /// with captured stdout/stderr included in the error message.
    fn run_task(&self, task: &str, version: Version) -> Result<String> {
        let output = Command::new(&self.config.build_command)
            .arg(task)
            .arg(format!("-Pversion={}", version))
            .output()
            .map_err(|e| {
                PublishError::action(format!(
                    "failed to execute {} {}: {}",
                    self.config.build_command, task, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(PublishError::action(format!(
                "{} {} failed with exit code {}\nStdout: {}\nStderr: {}",
                self.config.build_command,
                task,
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            )));
        }

        Ok(format!("{} completed", task))
    }

    /// List the artifacts published locally for this module and version.
    ///
    /// Purely informational; the caller treats a failure here as
    /// non-fatal.
    fn list_artifacts(&self, version: Version) -> Result<String> {
        let dir = self
            .config
            .artifacts
            .module_dir(&self.config.module, &version.to_string());

        let entries = std::fs::read_dir(&dir).map_err(|e| {
            PublishError::action(format!("cannot list {}: {}", dir.display(), e))
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        if names.is_empty() {
            Ok(format!("no artifacts in {}", dir.display()))
        } else {
            Ok(format!("artifacts in {}: {}", dir.display(), names.join(", ")))
        }
    }
}

impl BuildExecutor for CommandExecutor {
    fn execute(&self, action: PublishAction, version: Version) -> Result<String> {
        match action {
            PublishAction::PublishToLocalRepository => {
                self.run_task(&self.config.tasks.local, version)
            }
            // Both remote scopes drive the same publish task; the build
            // itself selects the repository. See DESIGN.md.
            PublishAction::PublishToRemotePackages(RemoteScope::Test)
            | PublishAction::PublishToRemotePackages(RemoteScope::GitHub) => {
                self.run_task(&self.config.tasks.remote, version)
            }
            PublishAction::ListLocalArtifacts => self.list_artifacts(version),
        }
    }
}
