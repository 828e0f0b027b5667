//! Main publish workflow orchestration.
//!
//! Keeps the run logic decoupled from clap so it can be driven
//! programmatically (and from tests) with any `BuildExecutor`.

use crate::config::Config;
use crate::error::Result;
use crate::executor::BuildExecutor;
use crate::store;
use crate::target::{self, PublishAction, PublishTarget};
use crate::ui;
use crate::version::{bump_version, BumpKind, Version};

/// Outcome of a single publish action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub action: PublishAction,
    pub success: bool,
    pub message: String,
}

/// Result of a completed publish run.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    /// The target that was published
    pub target: PublishTarget,

    /// Version read from the versions file at the start of the run
    pub old_version: Version,

    /// Version used for publishing (equals `old_version` when not bumped)
    pub new_version: Version,

    /// Per-action outcomes, in execution order
    pub outcomes: Vec<ActionOutcome>,
}

/// Runs the publish workflow for a target.
///
/// 1. Resolve the target into a publish plan (invalid targets fail before
///    this function is reached, so no side effects occur for them).
/// 2. Load the module's current version from the versions file.
/// 3. If the plan calls for it, bump the version and persist it. The file
///    is rewritten exactly once per run, and only here.
/// 4. Execute the plan's actions in order through the executor. The first
///    failing action aborts the run; a persisted bump is not rolled back.
///    Artifact listing is informational, so its failure is logged and
///    recorded but does not abort.
pub fn run(
    config: &Config,
    target: PublishTarget,
    kind: BumpKind,
    executor: &dyn BuildExecutor,
) -> Result<PublishReport> {
    let plan = target::resolve(target);

    let old_version = store::load(&config.versions_file, &config.module)?;

    let new_version = if plan.should_bump {
        let bumped = bump_version(old_version, kind);
        store::store(&config.versions_file, &config.module, bumped)?;
        ui::display_status(&format!(
            "Bumped {} version: {} -> {}",
            config.module, old_version, bumped
        ));
        bumped
    } else {
        ui::display_status(&format!(
            "Publishing {} at declared version {}",
            config.module, old_version
        ));
        old_version
    };

    let mut outcomes = Vec::with_capacity(plan.actions.len());

    for action in plan.actions {
        ui::display_status(&format!("Running: {} ({})", action, new_version));

        match executor.execute(action, new_version) {
            Ok(message) => {
                ui::display_success(&message);
                outcomes.push(ActionOutcome {
                    action,
                    success: true,
                    message,
                });
            }
            Err(e) if action == PublishAction::ListLocalArtifacts => {
                // Listing is informational; record the failure and move on
                ui::display_warning(&e.to_string());
                outcomes.push(ActionOutcome {
                    action,
                    success: false,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(PublishReport {
        target,
        old_version,
        new_version,
        outcomes,
    })
}
