use axum::{Router, http, middleware};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, middleware::payment_gate_middleware, routes},
    infra::setup::init_tracing,
};

pub fn create_app(app_state: AppState) -> Router {
    init_tracing();

    // Only issuance sits behind the payment gate; validation must stay
    // reachable for the proxy's subrequests.
    let auth_routes = routes::auth::router().route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        payment_gate_middleware,
    ));

    Router::new()
        .merge(auth_routes)
        .merge(routes::validate::router())
        .nest_service(
            "/x402static",
            ServeDir::new(&app_state.config.static_dir),
        )
        .with_state(app_state)
        .layer(SetResponseHeaderLayer::if_not_present(
            http::header::X_CONTENT_TYPE_OPTIONS,
            http::HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http-request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                    request_id = %request_id
                )
            }),
        )
}
