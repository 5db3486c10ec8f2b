use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::token::{self, TokenError},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/validate", get(validate))
}

/// auth_request target for the reverse proxy. The proxy extracts the session
/// cookie from the client request and forwards its value in the configured
/// header; this handler never reads cookies itself.
async fn validate(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let token = headers
        .get(app_state.config.token_header.as_str())
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AppError::MissingToken);
    }

    token::verify(token, &app_state.config.jwt_secret).map_err(|e| match e {
        TokenError::Expired => AppError::TokenExpired,
        TokenError::Invalid => AppError::InvalidToken,
    })?;

    Ok(Json(serde_json::json!({"status": "valid"})))
}
