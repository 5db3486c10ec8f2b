use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{adapters::http::app_state::AppState, app_error::AppError};

/// Gate composed in front of the issuance route. The payment check itself is
/// an external collaborator; this layer only enforces its allow/deny answer.
pub async fn payment_gate_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    if !app_state.payment_gate.allow(&parts).await {
        tracing::info!(uri = %parts.uri, "Payment gate denied request");
        return Err(AppError::PaymentRequired);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
