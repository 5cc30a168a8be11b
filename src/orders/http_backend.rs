//! reqwest implementation of [`OrderBackend`].

use super::backend::OrderBackend;
use super::outcome::OperationOutcome;
use crate::model::{Order, OrderId, Response};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the orders service. One method per remote endpoint.
///
/// Status classification is uniform across endpoints (see
/// [`FailureKind::from_status`](super::FailureKind::from_status)); narrowing to what each
/// operation recognises happens in the orchestrator.
#[derive(Clone)]
pub struct HttpOrderBackend {
    base_url: String,
    client: Client,
}

impl HttpOrderBackend {
    /// Builds a client whose every request is bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/orders/{}", self.base_url, path)
    }

    /// Sends one request. Any non-2xx status or transport error is returned already classified.
    async fn send<T>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, OperationOutcome<T>> {
        let response = request.send().await.map_err(|e| {
            warn!(operation, error = %e, timeout = e.is_timeout(), "Orders service unreachable");
            OperationOutcome::UnknownFailure
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(operation, status = status.as_u16(), "Orders service responded");
            return Ok(response);
        }

        warn!(operation, status = status.as_u16(), "Orders service rejected request");
        Err(OperationOutcome::from_failed_status(status.as_u16()))
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        response: reqwest::Response,
    ) -> OperationOutcome<T> {
        match response.json::<T>().await {
            Ok(body) => OperationOutcome::Success(body),
            Err(e) => {
                warn!(operation, error = %e, "Undecodable response body");
                OperationOutcome::UnknownFailure
            }
        }
    }

    /// Reads the body of a 2xx mutation. An empty body or one that is not a valid
    /// `Response` (unknown `statusCode`, plain text) counts as success without a payload:
    /// the remote has already applied the change.
    async fn decode_optional_response(
        operation: &'static str,
        response: reqwest::Response,
    ) -> OperationOutcome<Option<Response>> {
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(operation, error = %e, "Failed to read response body");
                return OperationOutcome::UnknownFailure;
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return OperationOutcome::Success(None);
        }
        match serde_json::from_slice::<Response>(&bytes) {
            Ok(body) => OperationOutcome::Success(Some(body)),
            Err(e) => {
                warn!(operation, error = %e, "Ignoring undecodable success body");
                OperationOutcome::Success(None)
            }
        }
    }
}

#[async_trait]
impl OrderBackend for HttpOrderBackend {
    async fn create(&self, order: &Order) -> OperationOutcome<()> {
        let request = self.client.post(self.url("create")).json(order);
        match self.send("create", request).await {
            Ok(_) => OperationOutcome::Success(()),
            Err(outcome) => outcome,
        }
    }

    async fn fetch_all(&self, account_number: &str) -> OperationOutcome<Vec<Order>> {
        let request = self
            .client
            .get(self.url("fetchAll"))
            .query(&[("accountNumber", account_number)]);
        match self.send("fetch_all", request).await {
            Ok(response) => Self::decode("fetch_all", response).await,
            Err(outcome) => outcome,
        }
    }

    async fn fetch(&self, order_id: &OrderId) -> OperationOutcome<Order> {
        let request = self
            .client
            .get(self.url("fetch"))
            .query(&[("orderId", order_id.as_str())]);
        match self.send("fetch", request).await {
            Ok(response) => Self::decode("fetch", response).await,
            Err(outcome) => outcome,
        }
    }

    async fn update(&self, order: &Order) -> OperationOutcome<Option<Response>> {
        let request = self.client.put(self.url("update")).json(order);
        match self.send("update", request).await {
            Ok(response) => Self::decode_optional_response("update", response).await,
            Err(outcome) => outcome,
        }
    }

    async fn delete(&self, order_id: &OrderId) -> OperationOutcome<Option<Response>> {
        let request = self
            .client
            .delete(self.url("delete"))
            .query(&[("orderId", order_id.as_str())]);
        match self.send("delete", request).await {
            Ok(response) => Self::decode_optional_response("delete", response).await,
            Err(outcome) => outcome,
        }
    }
}
