//! # Record Actor
//!
//! An actor-owned, in-memory keyed store. One Tokio task owns a `HashMap` of records and
//! processes CRUD requests from its mailbox one at a time, so the data needs no locks.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Record`]) - how a record is keyed, created and updated
//! 2. **Runtime Layer** ([`RecordActor`]) - the message loop that owns the store
//! 3. **Interface Layer** ([`RecordClient`]) - the cloneable async handle callers use
//!
//! Records are addressed by a *natural key* taken from their creation payload. A second
//! create with the same key is refused with [`StoreError::AlreadyExists`] before
//! `Record::from_create` ever runs.
//!
//! ```rust
//! use record_actor::{Record, RecordActor, StoreError};
//!
//! #[derive(Clone, Debug)]
//! struct Profile { email: String, nickname: String }
//! #[derive(Debug)] struct ProfileCreate { email: String }
//! #[derive(Debug)] struct ProfileUpdate { nickname: String }
//! #[derive(Debug, thiserror::Error)] #[error("invalid profile")] struct ProfileError;
//!
//! impl Record for Profile {
//!     type Key = String;
//!     type Create = ProfileCreate;
//!     type Update = ProfileUpdate;
//!     type Error = ProfileError;
//!
//!     fn key_of(params: &ProfileCreate) -> String { params.email.clone() }
//!     fn from_create(params: ProfileCreate) -> Result<Self, ProfileError> {
//!         Ok(Self { email: params.email, nickname: String::new() })
//!     }
//!     fn apply_update(&mut self, update: ProfileUpdate) -> Result<(), ProfileError> {
//!         self.nickname = update.nickname;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Profile>::new(16);
//!     tokio::spawn(actor.run());
//!
//!     client.create(ProfileCreate { email: "a@x.io".into() }).await.unwrap();
//!     let updated = client
//!         .update("a@x.io".into(), ProfileUpdate { nickname: "ace".into() })
//!         .await
//!         .unwrap();
//!     assert_eq!(updated.nickname, "ace");
//!
//!     let missing = client.delete("b@x.io".into()).await;
//!     assert!(matches!(missing, Err(StoreError::NotFound(_))));
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - The mailbox is a bounded `mpsc` channel; replies travel over `oneshot` channels.
//! - Requests are handled strictly in arrival order.
//! - The actor stops when every [`RecordClient`] clone has been dropped.
//!
//! ## Testing
//!
//! [`mock::MockRecordClient`] answers a real `RecordClient` from scripted expectations, so
//! wrappers around the client can be tested without a running store.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use error::StoreError;
pub use message::RecordRequest;
pub use record::Record;
