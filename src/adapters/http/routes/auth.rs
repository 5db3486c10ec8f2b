use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    application::token::{self, ANONYMOUS_SUBJECT},
};

/// Shown after the payment gate lets the request through; meta-refreshes
/// back to the protected origin with the session cookie already set.
const PAYMENT_COMPLETE_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta http-equiv="refresh" content="1;url=/" />
    <title>Loading…</title>
  </head>
  <body style="margin:0;display:flex;align-items:center;justify-content:center;height:100vh;font-family:sans-serif;background:#111827;color:#e5e7eb;text-align:center;">
    <div>
      <div style="font-size:1.1rem;font-weight:600;">Payment complete</div>
      <div style="margin-top:4px;">Loading…</div>
      <div style="margin-top:6px;font-size:0.9rem;">If nothing happens, <a href="/" style="color:#93c5fd;">click here</a>.</div>
    </div>
  </body>
</html>
"#;

pub fn router() -> Router<AppState> {
    Router::new().route("/auth", get(authenticate))
}

/// Mints a session token and hands it to the browser as a cookie. Reached
/// only through the payment-gate middleware; issuance itself trusts that
/// gate completely and performs no payment logic.
async fn authenticate(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = &app_state.config;

    let token = token::issue(ANONYMOUS_SUBJECT, &config.jwt_secret, config.token_ttl)?;
    tracing::info!("Session token issued");

    let cookie = Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(config.token_ttl)
        .build();

    Ok((CookieJar::new().add(cookie), Html(PAYMENT_COMPLETE_PAGE)))
}
