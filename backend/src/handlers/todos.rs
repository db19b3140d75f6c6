use axum::{
    http::{header, HeaderMap, Method},
    Json,
};

use crate::config::SupabaseConfig;
use crate::error::{ApiResult, AppError};
use crate::supabase::SupabaseClient;
use shared::api::TodosResponse;

/// `/api/todos` answers GET only. Configuration is validated before the
/// method check, so a misconfigured server responds 500 to every verb.
pub async fn todos(method: Method, headers: HeaderMap) -> ApiResult<Json<TodosResponse>> {
    let config = SupabaseConfig::from_env().ok_or(AppError::Config)?;

    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let token = bearer_token(&headers);
    let client = SupabaseClient::new(&config, token);
    let todos = client.list_todos().await?;

    Ok(Json(TodosResponse { todos }))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with_authorization("Bearer abc123");
        assert_eq!(bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn non_bearer_scheme_is_ignored() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }
}
