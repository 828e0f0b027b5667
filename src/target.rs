use crate::error::{PublishError, Result};
use std::fmt;

/// A publish destination selected on the command line.
///
/// The target determines which downstream actions run and whether the
/// module version advances before publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishTarget {
    /// Publish to the local artifact repository only
    Local,
    /// Publish to the test-scoped remote package repository
    TestRepo,
    /// Publish to GitHub Packages (bumps the version)
    GitHubPackages,
    /// All of the above, sequentially (bumps the version)
    All,
}

/// Scope of a remote package publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteScope {
    Test,
    GitHub,
}

/// A single publish step executed against the build-action executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishAction {
    PublishToLocalRepository,
    PublishToRemotePackages(RemoteScope),
    ListLocalArtifacts,
}

/// The resolved plan for a target: whether to bump, and which actions to
/// run in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub should_bump: bool,
    pub actions: Vec<PublishAction>,
}

impl PublishTarget {
    /// Parses a target name from the command line.
    ///
    /// Unknown names are an error; the caller reports usage and exits
    /// without performing any action.
    pub fn parse(s: &str) -> Result<PublishTarget> {
        match s {
            "local" => Ok(PublishTarget::Local),
            "test" => Ok(PublishTarget::TestRepo),
            "github" => Ok(PublishTarget::GitHubPackages),
            "all" => Ok(PublishTarget::All),
            other => Err(PublishError::invalid_target(other)),
        }
    }
}

impl fmt::Display for PublishTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublishTarget::Local => "local",
            PublishTarget::TestRepo => "test",
            PublishTarget::GitHubPackages => "github",
            PublishTarget::All => "all",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for PublishAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishAction::PublishToLocalRepository => {
                write!(f, "publish to local repository")
            }
            PublishAction::PublishToRemotePackages(RemoteScope::Test) => {
                write!(f, "publish to remote packages (test)")
            }
            PublishAction::PublishToRemotePackages(RemoteScope::GitHub) => {
                write!(f, "publish to remote packages (github)")
            }
            PublishAction::ListLocalArtifacts => write!(f, "list local artifacts"),
        }
    }
}

/// Resolves a target into its publish plan.
///
/// Only targets that reach GitHub Packages bump the version; local and
/// test publishes reuse the declared version as-is.
pub fn resolve(target: PublishTarget) -> ResolvedTarget {
    match target {
        PublishTarget::Local => ResolvedTarget {
            should_bump: false,
            actions: vec![
                PublishAction::PublishToLocalRepository,
                PublishAction::ListLocalArtifacts,
            ],
        },
        PublishTarget::TestRepo => ResolvedTarget {
            should_bump: false,
            actions: vec![PublishAction::PublishToRemotePackages(RemoteScope::Test)],
        },
        PublishTarget::GitHubPackages => ResolvedTarget {
            should_bump: true,
            actions: vec![PublishAction::PublishToRemotePackages(RemoteScope::GitHub)],
        },
        PublishTarget::All => ResolvedTarget {
            should_bump: true,
            actions: vec![
                PublishAction::PublishToLocalRepository,
                PublishAction::PublishToRemotePackages(RemoteScope::Test),
                PublishAction::PublishToRemotePackages(RemoteScope::GitHub),
                PublishAction::ListLocalArtifacts,
            ],
        },
    }
}
