use serde::{Deserialize, Serialize};

use crate::models::Todo;

// ============================================================================
// Todo API Types
// ============================================================================

/// Success body of `GET /api/todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodosResponse {
    /// An absent field on the wire reads as an empty list.
    #[serde(default)]
    pub todos: Vec<Todo>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Failure body shared by every endpoint error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_todos_field_defaults_to_empty() {
        let body: TodosResponse = serde_json::from_str("{}").expect("should deserialize");
        assert!(body.todos.is_empty());
    }

    #[test]
    fn error_body_round_trips() {
        let body = ErrorResponse::new("Method not allowed");
        let json = serde_json::to_string(&body).expect("should serialize");
        assert_eq!(json, r#"{"error":"Method not allowed"}"#);
    }
}
