//! Access token issuing and validation.
//!
//! Tokens are HMAC-signed JWTs carrying the account id as the subject and a fixed issuer
//! that marks them as rider access tokens. Issuance always signs with HS256; validation
//! accepts any HMAC-SHA2 variant and rejects every other algorithm, including `none`.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{config::ConfigError, token::TokenError};

/// Issuer claim stamped on every access token.
pub const ACCESS_TOKEN_ISSUER: &str = "rider-access";

/// Lifetime of an access token in seconds.
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Claim set carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    pub iss: String,
    /// Decimal account id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies access tokens with a single shared secret.
///
/// Constructed once at startup and shared through application state. The secret is
/// never exposed after construction.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("issuer", &ACCESS_TOKEN_ISSUER)
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from the HMAC signing secret.
    ///
    /// # Arguments
    /// - `secret` - Raw secret bytes used for both signing and verification
    ///
    /// # Returns
    /// - `Ok(TokenCodec)` - Codec ready to issue and validate tokens
    /// - `Err(ConfigError::EmptySecret)` - The secret was empty
    pub fn new(secret: &[u8]) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.set_issuer(&[ACCESS_TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issues a token for the account, valid for 24 hours from now.
    pub fn issue(&self, account_id: i32) -> Result<String, TokenError> {
        self.issue_at(account_id, Utc::now())
    }

    /// Issues a token for the account as if the current time were `now`.
    ///
    /// # Arguments
    /// - `account_id` - Account the token authenticates
    /// - `now` - Issue instant; expiry is 24 hours later
    ///
    /// # Returns
    /// - `Ok(String)` - Compact serialized JWT
    /// - `Err(TokenError::Signing)` - Claim encoding or signing failed
    pub fn issue_at(&self, account_id: i32, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AccessClaims {
            iss: ACCESS_TOKEN_ISSUER.to_string(),
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + ACCESS_TOKEN_TTL_SECONDS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verifies a token and returns the account id it was issued for.
    ///
    /// # Arguments
    /// - `token` - Compact serialized JWT
    ///
    /// # Returns
    /// - `Ok(i32)` - Account id from the subject claim
    /// - `Err(TokenError::Expired)` - The expiry has passed
    /// - `Err(TokenError::IssuerMismatch)` - The issuer is missing or not `rider-access`
    /// - `Err(TokenError::SubjectMalformed)` - The subject is missing or not an integer
    /// - `Err(TokenError::SignatureInvalid)` - Malformed token, wrong key, or an
    ///   algorithm outside the HMAC family
    pub fn validate(&self, token: &str) -> Result<i32, TokenError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(
            |err| {
                let classified = match err.kind() {
                    ErrorKind::ExpiredSignature => Some(TokenError::Expired),
                    ErrorKind::InvalidIssuer => Some(TokenError::IssuerMismatch),
                    ErrorKind::MissingRequiredClaim(claim) if claim == "iss" => {
                        Some(TokenError::IssuerMismatch)
                    }
                    ErrorKind::MissingRequiredClaim(claim) if claim == "sub" => {
                        Some(TokenError::SubjectMalformed(String::new()))
                    }
                    _ => None,
                };
                classified.unwrap_or_else(|| TokenError::SignatureInvalid(err))
            },
        )?;

        let claims = data.claims;
        if claims.iss != ACCESS_TOKEN_ISSUER {
            return Err(TokenError::IssuerMismatch);
        }

        claims
            .sub
            .parse::<i32>()
            .map_err(|_| TokenError::SubjectMalformed(claims.sub))
    }
}
