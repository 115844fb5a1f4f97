// File: src/error.rs
// Purpose: Request-level errors and their HTTP responses

use crate::response::Error;
use crate::store::StoreError;
use crate::views::error_page;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that end a request early
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Store(StoreError::NotFound(id)) => Error()
                .status(StatusCode::NOT_FOUND)
                .html(error_page(404, "Not Found", &format!("Item {} not found", id)))
                .into_response(),
            AppError::Store(err) => {
                tracing::error!(error = %err, "request failed");
                Error()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .html(error_page(500, "Internal Server Error", "The item could not be processed"))
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = AppError::from(StoreError::NotFound(3)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let resp = AppError::from(StoreError::Corrupt("bad row".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_failure_maps_to_500() {
        let resp = AppError::from(StoreError::Database(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
