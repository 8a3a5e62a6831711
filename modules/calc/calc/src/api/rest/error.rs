use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::api::rest::dto::ErrorDto;
use crate::domain::error::{DomainError, ErrorKind};

/// Failure of an arithmetic endpoint. Rendered as `400` with the message as a
/// bare JSON string.
#[derive(Debug)]
pub struct ArithmeticFailure(pub DomainError);

/// Failure of a constant endpoint. Rendered as `400` with `{"error": message}`.
#[derive(Debug)]
pub struct ConstantFailure(pub DomainError);

impl From<DomainError> for ArithmeticFailure {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl From<DomainError> for ConstantFailure {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ArithmeticFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection_to_domain(&rejection))
    }
}

impl From<JsonRejection> for ConstantFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection_to_domain(&rejection))
    }
}

impl IntoResponse for ArithmeticFailure {
    fn into_response(self) -> Response {
        log_failure(&self.0);
        (StatusCode::BAD_REQUEST, Json(self.0.to_string())).into_response()
    }
}

impl IntoResponse for ConstantFailure {
    fn into_response(self) -> Response {
        log_failure(&self.0);
        let body = ErrorDto {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

fn rejection_to_domain(rejection: &JsonRejection) -> DomainError {
    DomainError::validation(rejection.body_text())
}

fn log_failure(e: &DomainError) {
    let kind = e.kind().as_str();
    if e.kind() == ErrorKind::Persistence {
        tracing::error!(kind, error = %e, "request failed in the store");
    } else {
        tracing::debug!(kind, error = %e, "request rejected");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tracing_test::traced_test;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn arithmetic_failure_is_bare_string() {
        let response = ArithmeticFailure(DomainError::DivisionByZero).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!("division by zero"));
    }

    #[tokio::test]
    async fn constant_failure_is_error_object() {
        let response = ConstantFailure(DomainError::validation("name is required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "name is required"})
        );
    }

    #[tokio::test]
    async fn persistence_failure_prefers_store_message() {
        let response =
            ConstantFailure(DomainError::persistence("Access denied for user 'calc'")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Access denied for user 'calc'"})
        );
    }

    #[tokio::test]
    async fn persistence_failure_without_message_is_generic() {
        let response = ArithmeticFailure(DomainError::persistence("")).into_response();
        assert_eq!(body_json(response).await, json!("database error"));
    }

    #[traced_test]
    #[tokio::test]
    async fn persistence_failures_are_logged_as_errors() {
        let _ = ConstantFailure(DomainError::persistence("disk full")).into_response();
        assert!(logs_contain("request failed in the store"));
        assert!(logs_contain("disk full"));
    }
}
