use gloo_net::http::Request;

use shared::api::{ErrorResponse, TodosResponse};
use shared::models::Todo;

use crate::services::session::Session;

const API_BASE_URL: &str = "http://localhost:8080/api";

/// How a fetch went wrong: a failure the endpoint reported, or a
/// transport/parse problem on this side.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Server(String),
    Network(String),
}

pub struct ApiService;

impl ApiService {
    pub async fn list_todos(session: &Session) -> Result<Vec<Todo>, ApiError> {
        let url = format!("{}/todos", API_BASE_URL);

        let response = Request::get(&url)
            .header(
                "Authorization",
                &format!("Bearer {}", session.access_token),
            )
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request failed: {:?}", e)))?;

        if !response.ok() {
            // The endpoint reports failures as `{"error": ...}`.
            let body: ErrorResponse = response
                .json()
                .await
                .map_err(|e| ApiError::Network(format!("Failed to parse response: {:?}", e)))?;
            return Err(ApiError::Server(body.error));
        }

        let body: TodosResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {:?}", e)))?;

        Ok(body.todos)
    }
}
