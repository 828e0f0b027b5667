use crate::error::{PublishError, Result};
use crate::executor::BuildExecutor;
use crate::target::PublishAction;
use crate::version::Version;
use std::cell::RefCell;

/// Mock executor for testing without spawning real build processes.
///
/// Records every invocation in order and can be scripted to fail on a
/// specific action.
pub struct MockExecutor {
    invocations: RefCell<Vec<(PublishAction, Version)>>,
    fail_on: Option<PublishAction>,
}

impl MockExecutor {
    /// Create a mock where every action succeeds
    pub fn new() -> Self {
        MockExecutor {
            invocations: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Create a mock that fails when the given action is executed
    pub fn failing_on(action: PublishAction) -> Self {
        MockExecutor {
            invocations: RefCell::new(Vec::new()),
            fail_on: Some(action),
        }
    }

    /// The `(action, version)` pairs executed so far, in order
    pub fn invocations(&self) -> Vec<(PublishAction, Version)> {
        self.invocations.borrow().clone()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildExecutor for MockExecutor {
    fn execute(&self, action: PublishAction, version: Version) -> Result<String> {
        self.invocations.borrow_mut().push((action, version));

        if self.fail_on == Some(action) {
            return Err(PublishError::action(format!("{} failed (mock)", action)));
        }

        Ok(format!("{} ok (mock)", action))
    }
}
