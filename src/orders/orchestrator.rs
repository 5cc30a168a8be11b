//! The order orchestrator: one remote call per request, classified and translated.

use super::backend::OrderBackend;
use super::outcome::OperationOutcome;
use super::translator::{self, Operation};
use crate::model::{NotificationEvent, Order, OrderDraft, OrderId, Response};
use crate::notify::NotificationChannel;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn, Span};

/// Accepts local order requests and delegates each to the orders service.
///
/// Every method issues at most one backend call, bounded by the configured timeout and by
/// the cancellation token. No call is retried. Failures come back as the operation's
/// classified [`Response`], never as transport errors.
///
/// Cloning is cheap: all fields are shared handles, so handlers can hold their own copy.
#[derive(Clone)]
pub struct OrderOrchestrator {
    backend: Arc<dyn OrderBackend>,
    notifier: Arc<dyn NotificationChannel>,
    timeout: Duration,
    cancel: CancellationToken,
}

impl OrderOrchestrator {
    pub fn new(
        backend: Arc<dyn OrderBackend>,
        notifier: Arc<dyn NotificationChannel>,
        timeout: Duration,
    ) -> Self {
        Self {
            backend,
            notifier,
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the cancellation token. Once the token fires, outstanding and future calls
    /// stop waiting and report an unknown failure.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Assigns a fresh identifier, creates the order remotely and, on success, publishes an
    /// order-placed notification to `receiver_email`.
    #[instrument(skip(self, draft), fields(order_id))]
    pub async fn create(&self, receiver_email: &str, draft: OrderDraft) -> Response {
        let order = Order::from_draft(OrderId::generate(), draft);
        Span::current().record("order_id", order.order_id.as_str());

        let outcome = self
            .call(Operation::Create, self.backend.create(&order))
            .await;

        if outcome.is_success() {
            let event = NotificationEvent::order_placed(receiver_email, order);
            match self.notifier.publish(event) {
                Ok(()) => info!("Order placed notification queued"),
                Err(e) => warn!(error = %e, "Order placed notification dropped"),
            }
        }

        translator::translate(Operation::Create, &outcome)
    }

    /// Lists the orders of an account. An empty list is a success.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self, account_number: &str) -> Result<Vec<Order>, Response> {
        let outcome = self
            .call(Operation::FetchAll, self.backend.fetch_all(account_number))
            .await;
        match outcome {
            OperationOutcome::Success(orders) => Ok(orders),
            failure => Err(translator::translate(Operation::FetchAll, &failure)),
        }
    }

    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn fetch_one(&self, order_id: &OrderId) -> Result<Order, Response> {
        let outcome = self
            .call(Operation::FetchOne, self.backend.fetch(order_id))
            .await;
        match outcome {
            OperationOutcome::Success(order) => Ok(order),
            failure => Err(translator::translate(Operation::FetchOne, &failure)),
        }
    }

    /// Replaces the remote order. The identifier is passed through untouched.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn update(&self, order: Order) -> Response {
        let outcome = self
            .call(Operation::Update, self.backend.update(&order))
            .await;
        Self::pass_through(Operation::Update, outcome)
    }

    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn delete(&self, order_id: &OrderId) -> Response {
        let outcome = self
            .call(Operation::Delete, self.backend.delete(order_id))
            .await;
        Self::pass_through(Operation::Delete, outcome)
    }

    /// The remote's own response wins on success; the table default covers an empty body.
    fn pass_through(operation: Operation, outcome: OperationOutcome<Option<Response>>) -> Response {
        match outcome {
            OperationOutcome::Success(Some(remote)) => remote,
            other => translator::translate(operation, &other),
        }
    }

    async fn call<T>(
        &self,
        operation: Operation,
        request: impl Future<Output = OperationOutcome<T>>,
    ) -> OperationOutcome<T> {
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                warn!(%operation, "Cancelled while waiting for orders service");
                OperationOutcome::UnknownFailure
            }
            result = tokio::time::timeout(self.timeout, request) => match result {
                Ok(outcome) => translator::narrow(operation, outcome),
                Err(_) => {
                    warn!(%operation, timeout_ms = self.timeout.as_millis() as u64, "Orders service timed out");
                    OperationOutcome::UnknownFailure
                }
            },
        };
        info!(%operation, outcome = outcome.label(), "Remote call finished");
        outcome
    }
}
