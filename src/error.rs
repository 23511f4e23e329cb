use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No route for path: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(path) => {
                tracing::debug!(%path, "No matching route");
                StatusCode::NOT_FOUND
            }
        };

        let body = status
            .canonical_reason()
            .unwrap_or("Error")
            .to_string();

        (status, body).into_response()
    }
}
