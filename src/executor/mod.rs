use crate::error::Result;
use crate::target::PublishAction;
use crate::version::Version;

mod command;
mod mock;

pub use command::CommandExecutor;
pub use mock::MockExecutor;

/// Boundary to the external build machinery.
///
/// The orchestrator drives publish steps through this trait so the real
/// command-spawning executor can be swapped for a mock in tests.
pub trait BuildExecutor {
    /// Perform a single publish action with the given version.
    ///
    /// Returns a human-readable success message, or an `Action` error
    /// describing the failure.
    fn execute(&self, action: PublishAction, version: Version) -> Result<String>;
}
