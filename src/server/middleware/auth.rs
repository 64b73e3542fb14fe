//! Request authentication.
//!
//! `AuthGate` resolves the access cookie on a request to a `Principal`. The
//! `require_principal` middleware runs the gate in front of protected routes and stores
//! the principal in the request extensions, where handlers pick it up through the
//! `Principal` extractor. The principal lives only as long as the request.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::{
    error::auth::AuthError,
    service::token::TokenCodec,
    state::AppState,
    util::cookie::{read_cookie, ACCESS_COOKIE_NAME},
};

/// The authenticated account behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub account_id: i32,
}

pub struct AuthGate<'a> {
    tokens: &'a TokenCodec,
}

impl<'a> AuthGate<'a> {
    pub fn new(tokens: &'a TokenCodec) -> Self {
        Self { tokens }
    }

    /// Authenticates a request from its headers.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the `rider-access` cookie
    ///
    /// # Returns
    /// - `Ok(Principal)` - The cookie holds a valid token
    /// - `Err(AuthError::MissingCredential)` - No access cookie
    /// - `Err(AuthError::InvalidCredential)` - The token failed validation
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthError> {
        let Some(token) = read_cookie(headers, ACCESS_COOKIE_NAME) else {
            return Err(AuthError::MissingCredential);
        };

        let account_id = self.tokens.validate(&token)?;

        Ok(Principal { account_id })
    }
}

/// Middleware rejecting requests without a valid access cookie.
///
/// On success the `Principal` is inserted into the request extensions before the
/// request continues down the stack.
pub async fn require_principal(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match AuthGate::new(&state.tokens).authenticate(request.headers()) {
        Ok(principal) => {
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Principal {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .copied()
            .ok_or(AuthError::MissingCredential)
    }
}
