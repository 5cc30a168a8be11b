//! Thin axum entry points. Handlers parse the request, call the orchestrator or the
//! account client, and map the result to an HTTP response with the same numeric status.

pub mod accounts;
pub mod orders;
pub mod response;

use crate::clients::AccountClient;
use crate::orders::OrderOrchestrator;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Shared handler state. Both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: OrderOrchestrator,
    pub accounts: AccountClient,
}

pub fn router(state: AppState) -> Router {
    let order_routes = Router::new()
        .route("/create", post(orders::create_order))
        .route("/fetchAll", get(orders::fetch_all_orders))
        .route("/fetch", get(orders::fetch_order))
        .route("/update", put(orders::update_order))
        .route("/delete", delete(orders::delete_order));

    let account_routes = Router::new()
        .route("/create", post(accounts::create_account))
        .route("/fetch", get(accounts::fetch_account))
        .route("/update", put(accounts::update_account))
        .route("/delete", delete(accounts::delete_account));

    Router::new()
        .nest("/api/orders", order_routes)
        .nest("/api/accounts", account_routes)
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
