//! # Mock Store
//!
//! `MockRecordClient<T>` hands out a real [`RecordClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a live store. Use it to test code that
//! wraps a `RecordClient` (error mapping, response shaping) without spawning a `RecordActor`.
//!
//! | | `MockRecordClient` | `RecordActor` |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real keyed store |
//! | **Error injection** | `return_err(...)` | Needs a crafted store state |
//! | **Use case** | Testing wrappers around the client | Testing the store itself |
//!
//! ```rust
//! use record_actor::mock::MockRecordClient;
//! use record_actor::{Record, StoreError};
//!
//! #[derive(Clone, Debug)] struct Tag { name: String }
//! #[derive(Debug)] struct TagCreate { name: String }
//! #[derive(Debug)] struct TagUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl Record for Tag {
//!     type Key = String; type Create = TagCreate; type Update = TagUpdate; type Error = TagError;
//!     fn key_of(params: &TagCreate) -> String { params.name.clone() }
//!     fn from_create(params: TagCreate) -> Result<Self, TagError> { Ok(Self { name: params.name }) }
//!     fn apply_update(&mut self, _: TagUpdate) -> Result<(), TagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockRecordClient::<Tag>::new();
//!     mock.expect_get("rust".to_string()).return_err(StoreError::ActorClosed);
//!
//!     let result = mock.client().get("rust".to_string()).await;
//!     assert!(matches!(result, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

enum Expectation<T: Record> {
    Create(Result<T, StoreError>),
    Get {
        key: T::Key,
        response: Result<Option<T>, StoreError>,
    },
    Update {
        key: T::Key,
        response: Result<T, StoreError>,
    },
    Delete {
        key: T::Key,
        response: Result<T, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Scripted stand-in for a `RecordActor`.
///
/// Requests are matched in FIFO order against the queued expectations. A request
/// that does not match the next expectation (wrong operation or wrong key) is
/// counted as unexpected and its reply channel is dropped, so the caller sees
/// `StoreError::ActorDropped`. [`verify`](Self::verify) fails on either leftover
/// expectations or unexpected requests.
pub struct MockRecordClient<T: Record> {
    client: RecordClient<T>,
    expectations: Queue<T>,
    unexpected: Arc<AtomicUsize>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockRecordClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockRecordClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(64);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(AtomicUsize::new(0));

        let queue = expectations.clone();
        let misses = unexpected.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, next) {
                    (RecordRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Get { key, respond_to },
                        Some(Expectation::Get { key: expected, response }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Update { key, respond_to, .. },
                        Some(Expectation::Update { key: expected, response }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Delete { key, respond_to },
                        Some(Expectation::Delete { key: expected, response }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        misses.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    pub fn expect_get(&mut self, key: T::Key) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get {
            key,
            response,
        })
    }

    pub fn expect_update(&mut self, key: T::Key) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Update {
            key,
            response,
        })
    }

    pub fn expect_delete(&mut self, key: T::Key) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Delete {
            key,
            response,
        })
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let unexpected = self.unexpected.load(Ordering::SeqCst);
        if remaining != 0 || unexpected != 0 {
            panic!(
                "Mock store not satisfied: {remaining} expectation(s) remaining, {unexpected} unexpected request(s)"
            );
        }
    }
}

/// Fluent builder that queues one expectation.
pub struct ExpectationBuilder<T: Record, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Answers the request successfully.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answers the request with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Member {
        handle: String,
        display_name: String,
    }

    #[derive(Debug)]
    struct MemberCreate {
        handle: String,
    }

    #[derive(Debug)]
    struct MemberUpdate {
        display_name: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Member error")]
    struct MemberError;

    impl Record for Member {
        type Key = String;
        type Create = MemberCreate;
        type Update = MemberUpdate;
        type Error = MemberError;

        fn key_of(params: &MemberCreate) -> String {
            params.handle.clone()
        }

        fn from_create(params: MemberCreate) -> Result<Self, MemberError> {
            Ok(Self {
                display_name: params.handle.clone(),
                handle: params.handle,
            })
        }

        fn apply_update(&mut self, update: MemberUpdate) -> Result<(), MemberError> {
            self.display_name = update.display_name;
            Ok(())
        }
    }

    fn member(handle: &str) -> Member {
        Member {
            handle: handle.to_string(),
            display_name: handle.to_uppercase(),
        }
    }

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mut mock = MockRecordClient::<Member>::new();
        mock.expect_create().return_ok(member("ada"));
        mock.expect_get("ada".to_string()).return_ok(Some(member("ada")));
        mock.expect_delete("ada".to_string()).return_ok(member("ada"));

        let client = mock.client();
        let created = client
            .create(MemberCreate {
                handle: "ada".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.display_name, "ADA");

        let fetched = client.get("ada".to_string()).await.unwrap();
        assert_eq!(fetched, Some(member("ada")));

        client.delete("ada".to_string()).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_injects_errors() {
        let mut mock = MockRecordClient::<Member>::new();
        mock.expect_update("ghost".to_string())
            .return_err(StoreError::NotFound("ghost".to_string()));

        let result = mock
            .client()
            .update(
                "ghost".to_string(),
                MemberUpdate {
                    display_name: "Boo".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(StoreError::NotFound(key)) if key == "ghost"));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "1 unexpected request")]
    async fn test_mock_flags_key_mismatch() {
        let mut mock = MockRecordClient::<Member>::new();
        mock.expect_get("ada".to_string()).return_ok(None);

        let result = mock.client().get("grace".to_string()).await;
        assert!(matches!(result, Err(StoreError::ActorDropped)));

        mock.verify();
    }
}
