mod accounts;
mod customers;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use teller_core::TransactionPolicy;

use crate::{config::Config, main_lib::AppState};

pub async fn healthz() -> &'static str {
    "ok"
}

async fn get_policy(State(state): State<Arc<AppState>>) -> Json<TransactionPolicy> {
    Json(state.policy.clone())
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/policy", get(get_policy))
        .merge(accounts::router())
        .merge(customers::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
