use thiserror::Error;

/// Failures issuing or validating access tokens.
///
/// Validation failures are distinguished here for logging only. Callers at the request
/// boundary collapse all of them into a single "unauthenticated" outcome.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token is malformed, is signed with a different key, or uses an algorithm
    /// outside the HMAC allow-list.
    #[error("Access token signature is invalid: {0}")]
    SignatureInvalid(#[source] jsonwebtoken::errors::Error),

    /// The token verified but was not minted as a rider access token.
    #[error("Access token issuer does not match")]
    IssuerMismatch,

    /// The subject claim is not an integer account id.
    #[error("Access token subject '{0}' is not an account id")]
    SubjectMalformed(String),

    /// The embedded expiry has passed.
    #[error("Access token has expired")]
    Expired,

    /// Encoding the claim set failed while issuing a token.
    #[error("Failed to sign access token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
