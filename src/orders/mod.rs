//! Order orchestration: the remote orders port, its HTTP adapter, outcome classification and
//! the static response tables.
//!
//! The flow for every request is the same:
//!
//! 1. [`OrderOrchestrator`] issues one call through an [`OrderBackend`].
//! 2. The backend returns an [`OperationOutcome`], already classified by HTTP status.
//! 3. The [`translator`] narrows the outcome to what the operation recognises and maps it to
//!    a [`Response`](crate::model::Response).

pub mod backend;
pub mod http_backend;
pub mod orchestrator;
pub mod outcome;
pub mod translator;

pub use backend::OrderBackend;
pub use http_backend::HttpOrderBackend;
pub use orchestrator::OrderOrchestrator;
pub use outcome::{FailureKind, OperationOutcome};
pub use translator::Operation;
