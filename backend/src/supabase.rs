//! Client for the hosted database service's REST API.
//!
//! One client is built per request; the caller's bearer token rides along
//! unmodified so the service's row-level rules decide what the query may see.

use serde::Deserialize;
use thiserror::Error;

use crate::config::SupabaseConfig;
use shared::models::Todo;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by the service, message passed through as-is.
    #[error("{0}")]
    Query(String),
}

/// Error body shape used by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
}

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    publishable_key: String,
    bearer_token: Option<String>,
}

impl SupabaseClient {
    /// The publishable key is sent as `apikey` on every call. Without a
    /// bearer token the request goes out unauthenticated and the service
    /// rejects it if the table requires a logged-in user.
    pub fn new(config: &SupabaseConfig, bearer_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            publishable_key: config.publishable_key.clone(),
            bearer_token,
        }
    }

    /// Full-table select of the todos collection, ascending by id.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, SupabaseError> {
        let url = format!("{}/rest/v1/todos", self.base_url);

        let mut request = self
            .http
            .get(&url)
            .query(&[("select", "*"), ("order", "id.asc")])
            .header("apikey", self.publishable_key.as_str());

        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<Vec<Todo>>().await?),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(SupabaseError::Query(parse_error_message(&body)))
            }
        }
    }
}

/// PostgREST reports failures as `{"message": ...}`; any other body is
/// passed through untouched.
fn parse_error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgrest_message_is_extracted() {
        let body = r#"{"code":"42501","details":null,"message":"permission denied for table todos"}"#;
        assert_eq!(
            parse_error_message(body),
            "permission denied for table todos"
        );
    }

    #[test]
    fn non_json_body_is_passed_through() {
        assert_eq!(
            parse_error_message("upstream unavailable"),
            "upstream unavailable"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = SupabaseConfig {
            url: "http://localhost:54321/".to_string(),
            publishable_key: "key".to_string(),
        };
        let client = SupabaseClient::new(&config, None);
        assert_eq!(client.base_url, "http://localhost:54321");
    }
}
