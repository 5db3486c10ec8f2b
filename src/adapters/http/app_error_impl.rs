use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The three authentication failures are logged distinctly but the
        // response never reveals which check rejected the token.
        match self {
            AppError::MissingToken => {
                tracing::info!("No token provided");
                unauthenticated()
            }
            AppError::InvalidToken => {
                tracing::info!("Invalid token");
                unauthenticated()
            }
            AppError::TokenExpired => {
                tracing::info!("Token expired");
                unauthenticated()
            }
            AppError::PaymentRequired => (
                StatusCode::PAYMENT_REQUIRED,
                Json(serde_json::json!({"message": "Payment required"})),
            )
                .into_response(),
            AppError::Internal(ref msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"message": "Unauthenticated"})),
    )
        .into_response()
}
