use axum::routing::get;
use axum::Router;

use crate::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/", get(index_handler).post(shorten_handler))
            .route("/{code}", get(redirect_handler))
            .with_state(state)
    }
}
