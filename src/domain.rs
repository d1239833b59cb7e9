use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Domain entities

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i64,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Partial input for PATCH: only the fields present in the request change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub genres: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn not_found(id: i64) -> Self {
        ApiError::NotFound(format!("Movie with ID: {}", id))
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({
            "error": error_message,
        });

        (status, axum::Json(body)).into_response()
    }
}
