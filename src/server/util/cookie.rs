//! Access cookie formatting and parsing.

use axum::http::{header::COOKIE, header::InvalidHeaderValue, HeaderMap, HeaderValue};

use crate::server::service::token::ACCESS_TOKEN_TTL_SECONDS;

/// Name of the cookie that carries the access token.
pub const ACCESS_COOKIE_NAME: &str = "rider-access";

/// Cookie headers larger than this are ignored.
const MAX_COOKIE_HEADER_SIZE: usize = 16 * 1024;

/// Builds the `Set-Cookie` value carrying an access token.
///
/// The cookie is scoped to the whole site, sent only over HTTPS, and lives as long as
/// the token it carries.
pub fn access_cookie(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; Secure; SameSite=Lax; Partitioned; Max-Age={}",
        ACCESS_COOKIE_NAME, token, ACCESS_TOKEN_TTL_SECONDS
    ))
}

/// Reads a cookie value by name from every `Cookie` header on the request.
///
/// Empty values are skipped and surrounding double quotes are stripped.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter(|header| header.len() <= MAX_COOKIE_HEADER_SIZE)
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
