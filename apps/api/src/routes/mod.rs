pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers::handle_download;
use crate::generation::handlers::{handle_form, handle_generate};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handle_form).post(handle_generate))
        .route("/generate", post(handle_generate))
        .route("/download/:format", get(handle_download))
        .with_state(state)
}
