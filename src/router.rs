use crate::controller::login;
use crate::middleware::cors::build_cors_layer;
use crate::model::app_state::AppState;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

pub const LOGIN_PATH: &str = "/api/login";

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = build_cors_layer(&state.cors_policy)?;

    Ok(Router::new()
        .route(LOGIN_PATH, post(login))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
