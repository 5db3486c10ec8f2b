use std::{env, net::SocketAddr};

use secrecy::SecretString;
use time::Duration;

pub struct AppConfig {
    pub jwt_secret: SecretString,
    pub cookie_name: String,
    pub token_ttl: Duration,
    pub token_header: String,
    pub cookie_secure: bool,
    pub bind_addr: SocketAddr,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret: SecretString = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set")
            .into();

        let cookie_name = env::var("COOKIE_NAME").unwrap_or("x402_auth_token".to_string());

        let token_ttl_seconds: i64 = env::var("TOKEN_TTL_SECONDS")
            .unwrap_or((24 * 3600).to_string())
            .parse()
            .expect("TOKEN_TTL_SECONDS must be a valid number");

        let token_header = env::var("TOKEN_HEADER").unwrap_or("X-Token".to_string());

        let cookie_secure: bool = env::var("COOKIE_SECURE")
            .unwrap_or("false".to_string())
            .parse()
            .expect("COOKIE_SECURE must be true or false");

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("0.0.0.0:4021".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let static_dir = env::var("STATIC_DIR").unwrap_or("x402static".to_string());

        Self {
            jwt_secret,
            cookie_name,
            token_ttl: Duration::seconds(token_ttl_seconds),
            token_header,
            cookie_secure,
            bind_addr,
            static_dir,
        }
    }
}
