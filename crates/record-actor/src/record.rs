//! # Record Trait
//!
//! The `Record` trait is the contract every stored type must satisfy to be owned by a
//! [`RecordActor`](crate::RecordActor). Unlike a counter-keyed store, records are keyed by a
//! *natural key* derived from their creation payload (an email address, an account number, ...),
//! so the actor can reject duplicates before anything is inserted.
//!
//! # Associated Types
//!
//! - `Key`: the natural key. Two creates with the same key collide.
//! - `Create` / `Update`: the payloads accepted by the store.
//! - `Error`: the record's own validation error, surfaced as [`StoreError::Rejected`](crate::StoreError::Rejected).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `RecordActor`.
///
/// Every method is synchronous: the actor calls them while it holds exclusive
/// ownership of its store, so they must not block.
pub trait Record: Clone + Send + Sync + 'static {
    /// Natural key of the record.
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Validation error raised by `from_create` or `apply_update`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the natural key from a creation payload.
    fn key_of(params: &Self::Create) -> Self::Key;

    /// Builds the full record from its creation payload.
    fn from_create(params: Self::Create) -> Result<Self, Self::Error>;

    /// Applies an update in place. Must leave the record untouched on error.
    fn apply_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
