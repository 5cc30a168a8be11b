use super::AppState;
use crate::account_actor::AccountError;
use crate::model::{Account, AccountCreate, AccountUpdateRequest, Response, ResponseStatus};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

pub const MESSAGE_ACCOUNT_CREATED: &str = "Account created successfully";
pub const MESSAGE_PROCESSED: &str = "Request processed successfully";

#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// POST /api/accounts/create
pub async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountCreate>,
) -> Result<Response, AccountError> {
    state.accounts.create_account(payload).await?;
    Ok(Response::fixed(ResponseStatus::Created, MESSAGE_ACCOUNT_CREATED))
}

/// GET /api/accounts/fetch?email=..
pub async fn fetch_account(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<Json<Account>, AccountError> {
    let account = state.accounts.fetch_account(&params.email).await?;
    Ok(Json(account))
}

/// PUT /api/accounts/update
pub async fn update_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountUpdateRequest>,
) -> Result<Response, AccountError> {
    state
        .accounts
        .update_account(&payload.email, payload.update)
        .await?;
    Ok(Response::fixed(ResponseStatus::Ok, MESSAGE_PROCESSED))
}

/// DELETE /api/accounts/delete?email=..
pub async fn delete_account(
    State(state): State<AppState>,
    Query(params): Query<EmailParams>,
) -> Result<Response, AccountError> {
    state.accounts.delete_account(&params.email).await?;
    Ok(Response::fixed(ResponseStatus::Ok, MESSAGE_PROCESSED))
}
