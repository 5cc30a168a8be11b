//! Port to the remote orders service.

use super::outcome::OperationOutcome;
use crate::model::{Order, OrderId, Response};
use async_trait::async_trait;

/// One method per remote endpoint. Each call performs exactly one remote request and
/// classifies its result; implementations never retry.
///
/// `update` and `delete` return the remote's own `Response` when it sent one, or
/// `None` for a successful call with an empty body.
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn create(&self, order: &Order) -> OperationOutcome<()>;

    async fn fetch_all(&self, account_number: &str) -> OperationOutcome<Vec<Order>>;

    async fn fetch(&self, order_id: &OrderId) -> OperationOutcome<Order>;

    async fn update(&self, order: &Order) -> OperationOutcome<Option<Response>>;

    async fn delete(&self, order_id: &OrderId) -> OperationOutcome<Option<Response>>;
}
