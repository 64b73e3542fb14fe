use super::*;

/// Tests a request carrying a valid access cookie.
///
/// Expected: Ok(Principal) with the token's account id
#[test]
fn resolves_principal_from_cookie() {
    let codec = codec();
    let token = codec.issue(12).unwrap();
    let headers = cookie_headers(&format!("rider-access={}", token));

    let principal = AuthGate::new(&codec).authenticate(&headers).unwrap();

    assert_eq!(principal, Principal { account_id: 12 });
}

/// Tests a request without any cookie.
///
/// Expected: Err(AuthError::MissingCredential)
#[test]
fn rejects_missing_cookie() {
    let codec = codec();

    let result = AuthGate::new(&codec).authenticate(&HeaderMap::new());

    assert!(matches!(result, Err(AuthError::MissingCredential)));
}

/// Tests a request whose cookies do not include the access cookie.
///
/// Expected: Err(AuthError::MissingCredential)
#[test]
fn rejects_unrelated_cookies() {
    let codec = codec();
    let headers = cookie_headers("session=abc; theme=dark");

    let result = AuthGate::new(&codec).authenticate(&headers);

    assert!(matches!(result, Err(AuthError::MissingCredential)));
}

/// Tests a token signed by another secret.
///
/// Expected: Err(AuthError::InvalidCredential(TokenError::SignatureInvalid))
#[test]
fn rejects_foreign_token() {
    let other = TokenCodec::new(b"some-other-secret").unwrap();
    let token = other.issue(12).unwrap();
    let headers = cookie_headers(&format!("rider-access={}", token));

    let result = AuthGate::new(&codec()).authenticate(&headers);

    assert!(matches!(
        result,
        Err(AuthError::InvalidCredential(TokenError::SignatureInvalid(_)))
    ));
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidCredential(TokenError::Expired))
#[test]
fn rejects_expired_token() {
    let codec = codec();
    let token = codec
        .issue_at(12, Utc::now() - Duration::days(2))
        .unwrap();
    let headers = cookie_headers(&format!("rider-access={}", token));

    let result = AuthGate::new(&codec).authenticate(&headers);

    assert!(matches!(
        result,
        Err(AuthError::InvalidCredential(TokenError::Expired))
    ));
}
