//! Runtime wiring and observability setup.
//!
//! - [`AppSystem`] starts the background tasks, wires the orchestrator and shuts everything down
//! - [`setup_tracing`] installs the log subscriber

pub mod app_system;
pub mod tracing;

pub use app_system::*;
pub use self::tracing::*;
