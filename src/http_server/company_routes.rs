//! Company HTTP Routes
//!
//! Six endpoints: a plain-text greeting at `/` and CRUD under `/companies`.
//! Handlers only parse input, call the service and map outcomes to status
//! codes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::company::{Company, CompanyName};
use crate::observability::{Event, SharedEventLog};
use crate::service::{CompanyService, ServiceError};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across company handlers
pub struct CompanyState {
    pub service: CompanyService,
    pub log: SharedEventLog,
}

impl CompanyState {
    pub fn new(service: CompanyService, log: SharedEventLog) -> Self {
        Self { service, log }
    }

    /// Log a service failure and collapse it to a bare 500
    fn internal(&self, operation: &str, err: ServiceError) -> ApiError {
        self.log.error(
            Event::RequestFailed,
            &[("operation", operation), ("error", err.to_string().as_str())],
        );
        ApiError::Internal
    }
}

// ==================
// Company Routes
// ==================

/// Create company routes
pub fn company_routes(state: Arc<CompanyState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/companies", get(list_handler).post(create_handler))
        .route(
            "/companies/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Extract a validated name from a `{"name": "..."}` body.
///
/// An empty body or a body without a non-empty string `name` is a missing
/// name; bytes that are not JSON at all are an invalid body.
fn parse_name(body: &Bytes) -> ApiResult<CompanyName> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::NameRequired);
    }
    let request: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)?;
    let name = request.get("name").and_then(Value::as_str);
    Ok(CompanyName::from_optional(name)?)
}

// ==================
// Handlers
// ==================

async fn root_handler() -> &'static str {
    "hello world"
}

async fn list_handler(State(state): State<Arc<CompanyState>>) -> ApiResult<Json<Vec<Company>>> {
    let companies = state
        .service
        .get_all()
        .map_err(|e| state.internal("list", e))?;
    Ok(Json(companies))
}

async fn get_handler(
    State(state): State<Arc<CompanyState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Company>> {
    state
        .service
        .get_by_id(&id)
        .map_err(|e| state.internal("get", e))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_handler(
    State(state): State<Arc<CompanyState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Company>)> {
    let name = parse_name(&body)?;
    let company = state
        .service
        .create(name)
        .map_err(|e| state.internal("create", e))?;
    Ok((StatusCode::CREATED, Json(company)))
}

async fn update_handler(
    State(state): State<Arc<CompanyState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Company>> {
    let name = parse_name(&body)?;
    state
        .service
        .update(&id, name)
        .map_err(|e| state.internal("update", e))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_handler(
    State(state): State<Arc<CompanyState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let deleted = state
        .service
        .delete(&id)
        .map_err(|e| state.internal("delete", e))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(s: &str) -> Bytes {
        Bytes::from(s.to_string())
    }

    #[test]
    fn test_parse_name_accepts_string() {
        let name = parse_name(&bytes(r#"{"name": "Acme"}"#)).unwrap();
        assert_eq!(name.as_str(), "Acme");
    }

    #[test]
    fn test_parse_name_ignores_other_fields() {
        let name = parse_name(&bytes(r#"{"name": "Acme", "industry": "anvils"}"#)).unwrap();
        assert_eq!(name.as_str(), "Acme");
    }

    #[test]
    fn test_parse_name_missing_or_empty() {
        for body in ["", "  ", "{}", r#"{"name": ""}"#, r#"{"name": null}"#, "[]", "42"] {
            assert_eq!(
                parse_name(&bytes(body)).unwrap_err(),
                ApiError::NameRequired,
                "body: {body:?}"
            );
        }
    }

    #[test]
    fn test_parse_name_non_string_is_missing() {
        assert_eq!(
            parse_name(&bytes(r#"{"name": 7}"#)).unwrap_err(),
            ApiError::NameRequired
        );
    }

    #[test]
    fn test_parse_name_invalid_json() {
        assert_eq!(
            parse_name(&bytes("{name:")).unwrap_err(),
            ApiError::InvalidBody
        );
    }
}
