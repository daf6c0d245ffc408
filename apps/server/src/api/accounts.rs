use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use teller_core::accounts::{CloseAccountResponse, OpenAccountResponse, TransactionResponse};
use teller_core::validation::{AccountTransactionRequest, CloseAccountRequest, OpenAccountRequest};

use crate::{error::ApiResult, main_lib::AppState};

/// HTTP status for each domain outcome. Failures the caller can fix are 400,
/// unknown or foreign resources are 404.
trait OutcomeStatus {
    fn status(&self) -> StatusCode;
}

impl OutcomeStatus for OpenAccountResponse {
    fn status(&self) -> StatusCode {
        match self {
            OpenAccountResponse::Opened { .. } => StatusCode::CREATED,
            OpenAccountResponse::CustomerNotFound { .. } => StatusCode::NOT_FOUND,
            OpenAccountResponse::SavingsAccountRequired { .. }
            | OpenAccountResponse::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl OutcomeStatus for TransactionResponse {
    fn status(&self) -> StatusCode {
        match self {
            TransactionResponse::Completed { .. } => StatusCode::OK,
            TransactionResponse::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            TransactionResponse::InsufficientFunds { .. }
            | TransactionResponse::AccountClosed { .. }
            | TransactionResponse::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl OutcomeStatus for CloseAccountResponse {
    fn status(&self) -> StatusCode {
        match self {
            CloseAccountResponse::Closed { .. } => StatusCode::OK,
            CloseAccountResponse::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            CloseAccountResponse::AccountAlreadyClosed { .. }
            | CloseAccountResponse::AccountHasFundedBalance { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

fn respond<T: OutcomeStatus>(outcome: T) -> (StatusCode, Json<T>) {
    (outcome.status(), Json(outcome))
}

async fn open_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OpenAccountRequest>,
) -> ApiResult<(StatusCode, Json<OpenAccountResponse>)> {
    let outcome = state.account_service.open_account(request).await?;
    Ok(respond(outcome))
}

async fn deposit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AccountTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    let outcome = state.account_service.deposit(request).await?;
    Ok(respond(outcome))
}

async fn withdraw(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AccountTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    let outcome = state.account_service.withdraw(request).await?;
    Ok(respond(outcome))
}

async fn close_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CloseAccountRequest>,
) -> ApiResult<(StatusCode, Json<CloseAccountResponse>)> {
    let outcome = state.account_service.close_account(request).await?;
    Ok(respond(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/accounts/open", post(open_account))
        .route("/accounts/deposit", post(deposit))
        .route("/accounts/withdrawal", post(withdraw))
        .route("/accounts/close", put(close_account))
}
