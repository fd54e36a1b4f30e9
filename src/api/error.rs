use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::DomainError;

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            DomainError::NotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            DomainError::Database(_) | DomainError::External(_) => {
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
