pub mod config;
pub mod error;
pub mod executor;
pub mod orchestrator;
pub mod store;
pub mod target;
pub mod ui;
pub mod version;

pub use error::{PublishError, Result};
