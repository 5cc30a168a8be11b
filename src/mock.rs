//! # Test Doubles
//!
//! In-memory stand-ins for the two collaborators of [`OrderOrchestrator`](crate::orders::OrderOrchestrator).
//!
//! - [`MockOrderBackend`] answers remote calls from a FIFO queue of scripted expectations
//!   and records every call it receives.
//! - [`RecordingNotifier`] keeps every published event, or refuses them all.
//!
//! ```ignore
//! let backend = MockOrderBackend::new();
//! backend.expect_delete().return_failure(FailureKind::PreconditionFailed);
//!
//! let orchestrator = OrderOrchestrator::new(Arc::new(backend.clone()), notifier, timeout);
//! let response = orchestrator.delete(&order_id).await;
//!
//! assert_eq!(response.status_code, ResponseStatus::PreconditionFailed);
//! backend.verify();
//! ```

use crate::model::{NotificationEvent, Order, OrderId, Response};
use crate::notify::{NotificationChannel, NotifyError};
use crate::orders::{FailureKind, OperationOutcome, OrderBackend};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// =============================================================================
// ORDER BACKEND
// =============================================================================

/// A call received by [`MockOrderBackend`], with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Create(Order),
    FetchAll(String),
    Fetch(OrderId),
    Update(Order),
    Delete(OrderId),
}

enum Reply {
    Create(OperationOutcome<()>),
    FetchAll(OperationOutcome<Vec<Order>>),
    Fetch(OperationOutcome<Order>),
    Update(OperationOutcome<Option<Response>>),
    Delete(OperationOutcome<Option<Response>>),
}

struct Expectation {
    reply: Reply,
    /// Never answer: the call stays pending until the caller gives up.
    stall: bool,
}

#[derive(Default)]
struct BackendState {
    expectations: VecDeque<Expectation>,
    calls: Vec<BackendCall>,
    unexpected: usize,
}

/// Scripted [`OrderBackend`]. Clones share state, so keep one clone to inspect after the
/// orchestrator has taken the other.
#[derive(Clone, Default)]
pub struct MockOrderBackend {
    state: Arc<Mutex<BackendState>>,
}

impl MockOrderBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_create(&self) -> ExpectationBuilder<()> {
        ExpectationBuilder::new(self.state.clone(), Reply::Create)
    }

    pub fn expect_fetch_all(&self) -> ExpectationBuilder<Vec<Order>> {
        ExpectationBuilder::new(self.state.clone(), Reply::FetchAll)
    }

    pub fn expect_fetch(&self) -> ExpectationBuilder<Order> {
        ExpectationBuilder::new(self.state.clone(), Reply::Fetch)
    }

    pub fn expect_update(&self) -> ExpectationBuilder<Option<Response>> {
        ExpectationBuilder::new(self.state.clone(), Reply::Update)
    }

    pub fn expect_delete(&self) -> ExpectationBuilder<Option<Response>> {
        ExpectationBuilder::new(self.state.clone(), Reply::Delete)
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Panics unless every expectation was consumed by a call of the matching kind.
    pub fn verify(&self) {
        let state = self.lock();
        if !state.expectations.is_empty() || state.unexpected != 0 {
            panic!(
                "Mock backend not satisfied: {} expectation(s) remaining, {} unexpected call(s)",
                state.expectations.len(),
                state.unexpected
            );
        }
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn answer<T>(
        &self,
        call: BackendCall,
        pick: fn(Reply) -> Option<OperationOutcome<T>>,
    ) -> OperationOutcome<T> {
        let (outcome, stall) = {
            let mut state = self.lock();
            state.calls.push(call);
            let picked = state
                .expectations
                .pop_front()
                .and_then(|expectation| pick(expectation.reply).map(|o| (o, expectation.stall)));
            match picked {
                Some(answer) => answer,
                None => {
                    state.unexpected += 1;
                    return OperationOutcome::UnknownFailure;
                }
            }
        };
        if stall {
            std::future::pending::<()>().await;
        }
        outcome
    }
}

#[async_trait]
impl OrderBackend for MockOrderBackend {
    async fn create(&self, order: &Order) -> OperationOutcome<()> {
        self.answer(BackendCall::Create(order.clone()), |reply| match reply {
            Reply::Create(outcome) => Some(outcome),
            _ => None,
        })
        .await
    }

    async fn fetch_all(&self, account_number: &str) -> OperationOutcome<Vec<Order>> {
        self.answer(BackendCall::FetchAll(account_number.to_string()), |reply| match reply {
            Reply::FetchAll(outcome) => Some(outcome),
            _ => None,
        })
        .await
    }

    async fn fetch(&self, order_id: &OrderId) -> OperationOutcome<Order> {
        self.answer(BackendCall::Fetch(order_id.clone()), |reply| match reply {
            Reply::Fetch(outcome) => Some(outcome),
            _ => None,
        })
        .await
    }

    async fn update(&self, order: &Order) -> OperationOutcome<Option<Response>> {
        self.answer(BackendCall::Update(order.clone()), |reply| match reply {
            Reply::Update(outcome) => Some(outcome),
            _ => None,
        })
        .await
    }

    async fn delete(&self, order_id: &OrderId) -> OperationOutcome<Option<Response>> {
        self.answer(BackendCall::Delete(order_id.clone()), |reply| match reply {
            Reply::Delete(outcome) => Some(outcome),
            _ => None,
        })
        .await
    }
}

/// Fluent builder that queues one backend expectation.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<BackendState>>,
    wrap: fn(OperationOutcome<T>) -> Reply,
}

impl<T> ExpectationBuilder<T> {
    fn new(state: Arc<Mutex<BackendState>>, wrap: fn(OperationOutcome<T>) -> Reply) -> Self {
        Self { state, wrap }
    }

    pub fn return_ok(self, value: T) {
        self.push(OperationOutcome::Success(value), false);
    }

    pub fn return_failure(self, kind: FailureKind) {
        self.push(OperationOutcome::KnownFailure(kind), false);
    }

    /// Transport error, timeout or unclassified status.
    pub fn return_unknown(self) {
        self.push(OperationOutcome::UnknownFailure, false);
    }

    /// The call never completes.
    pub fn stall(self) {
        self.push(OperationOutcome::UnknownFailure, true);
    }

    fn push(self, outcome: OperationOutcome<T>, stall: bool) {
        let reply = (self.wrap)(outcome);
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .expectations
            .push_back(Expectation { reply, stall });
    }
}

// =============================================================================
// NOTIFICATION CHANNEL
// =============================================================================

/// [`NotificationChannel`] that records what it is given.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<NotificationEvent>>>,
    attempts: Arc<Mutex<usize>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every `publish` fails with `QueueFull`.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Events accepted so far.
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `publish` calls, accepted or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationChannel for RecordingNotifier {
    fn publish(&self, event: NotificationEvent) -> Result<(), NotifyError> {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        if self.failing {
            return Err(NotifyError::QueueFull);
        }
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
