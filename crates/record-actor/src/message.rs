//! # Store Messages
//!
//! Message types exchanged between a [`RecordClient`](crate::RecordClient) and a
//! [`RecordActor`](crate::RecordActor).

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a `RecordActor`.
///
/// The variants are the four CRUD operations of a keyed store. Records are
/// addressed by their natural key (`T::Key`), never by a store-generated id.
#[derive(Debug)]
pub enum RecordRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Reply<T>,
    },
    Get {
        key: T::Key,
        respond_to: Reply<Option<T>>,
    },
    Update {
        key: T::Key,
        update: T::Update,
        respond_to: Reply<T>,
    },
    Delete {
        key: T::Key,
        respond_to: Reply<T>,
    },
}
