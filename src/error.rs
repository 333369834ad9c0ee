use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Pessoa não encontrada")]
    PersonNotFound,
    #[error("invalid request body")]
    InvalidBody(#[from] JsonRejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PersonNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Pessoa não encontrada" })),
            )
                .into_response(),
            // 422 for a body that parsed but had the wrong shape, 400 for
            // malformed JSON; the rejection text carries the serde field path.
            ApiError::InvalidBody(rejection) => {
                let status = rejection.status();
                let body = Json(json!({
                    "detail": [{ "loc": ["body"], "msg": rejection.body_text() }]
                }));
                (status, body).into_response()
            }
            ApiError::Store(error) => {
                tracing::error!("storage failure: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
