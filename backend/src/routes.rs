use axum::{
    routing::{any, get},
    Router,
};

use crate::handlers::{health, todos};

pub fn api_routes() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // The todos endpoint does its own method handling
        .route("/todos", any(todos::todos))
}
