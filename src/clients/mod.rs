//! Type-safe wrappers around [`RecordClient`](record_actor::RecordClient).

pub mod account_client;

pub use account_client::*;
