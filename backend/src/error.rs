use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::ErrorResponse;
use std::fmt;

use crate::supabase::SupabaseError;

#[derive(Debug)]
pub enum AppError {
    /// Service URL or publishable key missing from the environment.
    Config,
    /// Failure reported by the external database service, message verbatim.
    Query(String),
    MethodNotAllowed,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "Supabase configuration missing"),
            Self::Query(msg) => write!(f, "{}", msg),
            Self::MethodNotAllowed => write!(f, "Method not allowed"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Config | Self::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<SupabaseError> for AppError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::Query(msg) => Self::Query(msg),
            SupabaseError::Network(e) => Self::Query(e.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, AppError>;
