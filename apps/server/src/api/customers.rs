use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use teller_core::accounts::{Account, AccountId, CreateCustomerResponse};
use teller_core::customers::{Customer, CustomerId, NewCustomer};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn list_customers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Customer>>> {
    let customers = state.account_service.list_customers()?;
    Ok(Json(customers))
}

async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(new_customer): Json<NewCustomer>,
) -> ApiResult<(StatusCode, Json<CreateCustomerResponse>)> {
    let outcome = state.account_service.create_customer(new_customer).await?;
    let status = match outcome {
        CreateCustomerResponse::Created { .. } => StatusCode::CREATED,
        CreateCustomerResponse::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
    };
    Ok((status, Json(outcome)))
}

async fn get_customer(
    Path(customer_id): Path<CustomerId>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Customer>> {
    state
        .account_service
        .get_customer(customer_id)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn get_account(
    Path((customer_id, account_id)): Path<(CustomerId, AccountId)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Account>> {
    state
        .account_service
        .get_account(customer_id, account_id)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/{customer_id}", get(get_customer))
        .route(
            "/customers/{customer_id}/accounts/{account_id}",
            get(get_account),
        )
}
