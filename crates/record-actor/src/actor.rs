//! # Record Actor
//!
//! The server half of the store: a single task that owns every record of one type
//! and processes requests one at a time.

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::record::Record;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Actor that owns a keyed collection of records.
///
/// The store is a plain `HashMap`: the actor is the only task that ever touches
/// it, so no `Mutex` is needed. Concurrent callers are serialised by the mailbox.
///
/// ```rust
/// use record_actor::{Record, RecordActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { title: String, body: String }
/// #[derive(Debug)] struct NoteCreate { title: String }
/// #[derive(Debug)] struct NoteUpdate { body: String }
/// #[derive(Debug, thiserror::Error)] #[error("empty title")] struct NoteError;
///
/// impl Record for Note {
///     type Key = String;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Error = NoteError;
///
///     fn key_of(params: &NoteCreate) -> String { params.title.clone() }
///     fn from_create(params: NoteCreate) -> Result<Self, NoteError> {
///         if params.title.is_empty() { return Err(NoteError); }
///         Ok(Self { title: params.title, body: String::new() })
///     }
///     fn apply_update(&mut self, update: NoteUpdate) -> Result<(), NoteError> {
///         self.body = update.body;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Note>::new(8);
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteCreate { title: "todo".into() }).await.unwrap();
///     assert_eq!(note.title, "todo");
///     assert!(client.create(NoteCreate { title: "todo".into() }).await.is_err());
/// }
/// ```
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: HashMap<T::Key, T>,
}

impl<T: Record> RecordActor<T> {
    /// Creates the actor and the client that feeds its mailbox.
    ///
    /// `buffer_size` bounds the mailbox; callers wait for space when it is full. Zero is
    /// raised to one.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, RecordClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        let record_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(record_type, params));
                }
                RecordRequest::Get { key, respond_to } => {
                    let record = self.store.get(&key).cloned();
                    debug!(record_type, %key, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::Update {
                    key,
                    update,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.update(record_type, key, update));
                }
                RecordRequest::Delete { key, respond_to } => {
                    let result = match self.store.remove(&key) {
                        Some(record) => {
                            info!(record_type, %key, size = self.store.len(), "Deleted");
                            Ok(record)
                        }
                        None => {
                            warn!(record_type, %key, "Not found");
                            Err(StoreError::NotFound(key.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, record_type: &str, params: T::Create) -> Result<T, StoreError> {
        debug!(record_type, ?params, "Create");
        let key = T::key_of(&params);
        match self.store.entry(key) {
            Entry::Occupied(slot) => {
                warn!(record_type, key = %slot.key(), "Duplicate key");
                Err(StoreError::AlreadyExists(slot.key().to_string()))
            }
            Entry::Vacant(slot) => {
                let record = T::from_create(params).map_err(|e| {
                    warn!(record_type, error = %e, "Create rejected");
                    StoreError::Rejected(Box::new(e))
                })?;
                info!(record_type, key = %slot.key(), "Created");
                Ok(slot.insert(record).clone())
            }
        }
    }

    fn update(&mut self, record_type: &str, key: T::Key, update: T::Update) -> Result<T, StoreError> {
        debug!(record_type, %key, ?update, "Update");
        let Some(record) = self.store.get_mut(&key) else {
            warn!(record_type, %key, "Not found");
            return Err(StoreError::NotFound(key.to_string()));
        };
        record.apply_update(update).map_err(|e| {
            warn!(record_type, %key, error = %e, "Update rejected");
            StoreError::Rejected(Box::new(e))
        })?;
        info!(record_type, %key, "Updated");
        Ok(record.clone())
    }
}
