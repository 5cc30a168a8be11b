use super::AppState;
use crate::model::{Order, OrderDraft, OrderId, Response, ResponseStatus};
use crate::orders::{translator, FailureKind, Operation, OperationOutcome};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::Json;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    pub receiver_email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParams {
    pub account_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdParams {
    pub order_id: String,
}

/// POST /api/orders/create?receiverEmail=..
pub async fn create_order(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
    Json(draft): Json<OrderDraft>,
) -> Response {
    if let Err(e) = draft.validate() {
        warn!(error = %e, "Rejected order draft");
        return translator::translate::<()>(
            Operation::Create,
            &OperationOutcome::KnownFailure(FailureKind::BadRequest),
        );
    }
    state
        .orchestrator
        .create(&params.receiver_email, draft)
        .await
}

/// GET /api/orders/fetchAll?accountNumber=..
pub async fn fetch_all_orders(
    State(state): State<AppState>,
    Query(params): Query<AccountParams>,
) -> HttpResponse {
    match state.orchestrator.fetch_all(&params.account_number).await {
        Ok(orders) => Json(orders).into_response(),
        Err(response) => response.into_response(),
    }
}

/// GET /api/orders/fetch?orderId=..
pub async fn fetch_order(
    State(state): State<AppState>,
    Query(params): Query<OrderIdParams>,
) -> HttpResponse {
    let order_id = OrderId::from(params.order_id);
    match state.orchestrator.fetch_one(&order_id).await {
        Ok(order) => Json(order).into_response(),
        Err(response) => response.into_response(),
    }
}

/// PUT /api/orders/update
///
/// An order that fails local validation never reaches the orders service. It is answered
/// with 400 and the validation message itself: the update row has no bad-request entry,
/// because a remote 400 on update is reported as an internal error.
pub async fn update_order(State(state): State<AppState>, Json(order): Json<Order>) -> Response {
    if let Err(e) = order.validate() {
        warn!(order_id = %order.order_id, error = %e, "Rejected order update");
        return Response::new(ResponseStatus::BadRequest, e.to_string());
    }
    state.orchestrator.update(order).await
}

/// DELETE /api/orders/delete?orderId=..
pub async fn delete_order(
    State(state): State<AppState>,
    Query(params): Query<OrderIdParams>,
) -> Response {
    let order_id = OrderId::from(params.order_id);
    state.orchestrator.delete(&order_id).await
}
