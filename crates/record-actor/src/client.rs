//! # Record Client
//!
//! The async handle used to talk to a [`RecordActor`](crate::RecordActor).

use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// Type-safe handle to a `RecordActor`.
///
/// Holds only the sending half of the actor's mailbox, so cloning is cheap and
/// clones can be moved into any task. Every call sends one request and awaits
/// exactly one reply.
pub struct RecordClient<T: Record> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: Record> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    /// Inserts a new record. Fails with `AlreadyExists` when the key is taken.
    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RecordRequest::Create { params, respond_to }).await?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RecordRequest::Get { key, respond_to }).await?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn update(&self, key: T::Key, update: T::Update) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RecordRequest::Update {
            key,
            update,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Removes a record and returns its last state.
    pub async fn delete(&self, key: T::Key) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(RecordRequest::Delete { key, respond_to }).await?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    async fn send(&self, request: RecordRequest<T>) -> Result<(), StoreError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| StoreError::ActorClosed)
    }
}
