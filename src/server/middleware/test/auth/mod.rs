use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, token::TokenError},
    middleware::auth::{AuthGate, Principal},
    service::token::TokenCodec,
};

mod authenticate;

const SECRET: &[u8] = b"middleware-test-secret";

fn codec() -> TokenCodec {
    TokenCodec::new(SECRET).unwrap()
}

fn cookie_headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
    headers
}
