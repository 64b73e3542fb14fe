use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenCodec, state::AppState};

async fn app() -> Router {
    let mut test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.take().unwrap();
    let tokens = TokenCodec::new(b"router-test-secret").unwrap();

    router(AppState::new(db, tokens, CancellationToken::new()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn access_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set the access cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

/// Registers an account and returns its id and access cookie.
async fn register(app: &Router, email: &str) -> (i64, String) {
    let response = send(
        app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({
            "email": email,
            "password": "hunter22",
            "givenName": "Test",
            "familyName": "Account",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cookie = access_cookie(&response);
    let body = json_body(response).await;

    (body["id"].as_i64().unwrap(), cookie)
}

async fn create_band(app: &Router, cookie: &str, name: &str) -> i64 {
    let response = send(
        app,
        Method::POST,
        "/api/bands",
        Some(cookie),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    json_body(response).await["id"].as_i64().unwrap()
}

async fn create_invitation(app: &Router, cookie: &str, band_id: i64) -> Value {
    let response = send(
        app,
        Method::POST,
        &format!("/api/bands/{}/invitations", band_id),
        Some(cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    json_body(response).await
}

/// Tests registration sets a usable access cookie.
///
/// Expected: 201 with Set-Cookie, then 200 from /api/me with the same account
#[tokio::test]
async fn registration_sets_access_cookie() {
    let app = app().await;

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({
            "email": "ada@example.com",
            "password": "hunter22",
            "givenName": "Ada",
            "familyName": "Lovelace",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("rider-access="));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Secure"));
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    let created = json_body(response).await;
    assert!(created.get("password").is_none());

    let me = send(&app, Method::GET, "/api/me", Some(&cookie), None).await;
    assert_eq!(me.status(), StatusCode::OK);
    let me = json_body(me).await;
    assert_eq!(me["id"], created["id"]);
    assert_eq!(me["email"], "ada@example.com");
    assert_eq!(me["givenName"], "Ada");
}

/// Tests protected routes without credentials.
///
/// Expected: 401 for a missing cookie and for a garbage token
#[tokio::test]
async fn protected_routes_require_cookie() {
    let app = app().await;

    let missing = send(&app, Method::GET, "/api/bands", None, None).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = send(
        &app,
        Method::GET,
        "/api/me",
        Some("rider-access=not-a-token"),
        None,
    )
    .await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(garbage).await["error"], "Not authenticated");
}

/// Tests login with good and bad credentials.
///
/// Expected: 200 with cookie for the right password, 401 otherwise
#[tokio::test]
async fn login_checks_password() {
    let app = app().await;
    register(&app, "login@example.com").await;

    let ok = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "login@example.com", "password": "hunter22" })),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert!(access_cookie(&ok).starts_with("rider-access="));

    let bad = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "login@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
}

/// Tests registering the same email twice.
///
/// Expected: 409 Conflict
#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = app().await;
    register(&app, "dup@example.com").await;

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({
            "email": "dup@example.com",
            "password": "hunter22",
            "givenName": "Dup",
            "familyName": "Licate",
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Tests the full invitation flow between two accounts.
///
/// The owner creates a band and an invitation; the second account joins with the code
/// and then sees the band as a regular member. Joining again conflicts.
///
/// Expected: 201 on join, band listed with accountIsAdmin false, 409 on second join
#[tokio::test]
async fn invitation_grants_membership() {
    let app = app().await;
    let (_, owner) = register(&app, "owner@example.com").await;
    let (joiner_id, joiner) = register(&app, "joiner@example.com").await;

    let band_id = create_band(&app, &owner, "The Invitations").await;
    let invitation = create_invitation(&app, &owner, band_id).await;
    let code = invitation["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 10);
    assert!(code.bytes().all(|b| b.is_ascii_uppercase()));

    let joined = send(
        &app,
        Method::POST,
        "/api/bands/join",
        Some(&joiner),
        Some(json!({ "code": code })),
    )
    .await;
    assert_eq!(joined.status(), StatusCode::CREATED);
    let membership = json_body(joined).await;
    assert_eq!(membership["account_id"].as_i64(), Some(joiner_id));
    assert_eq!(membership["band_id"].as_i64(), Some(band_id));
    assert_eq!(membership["account_is_admin"], false);

    let bands = send(&app, Method::GET, "/api/bands", Some(&joiner), None).await;
    assert_eq!(bands.status(), StatusCode::OK);
    let bands = json_body(bands).await;
    assert_eq!(bands.as_array().unwrap().len(), 1);
    assert_eq!(bands[0]["id"].as_i64(), Some(band_id));
    assert_eq!(bands[0]["account_is_admin"], false);

    let again = send(
        &app,
        Method::POST,
        "/api/bands/join",
        Some(&joiner),
        Some(json!({ "code": code })),
    )
    .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);
}

/// Tests invitation creation edge cases.
///
/// Expected: 400 for band 0, 404 for a band that does not exist
#[tokio::test]
async fn invitation_requires_existing_band() {
    let app = app().await;
    let (_, cookie) = register(&app, "edge@example.com").await;

    let zero = send(
        &app,
        Method::POST,
        "/api/bands/0/invitations",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(zero.status(), StatusCode::BAD_REQUEST);

    let missing = send(
        &app,
        Method::POST,
        "/api/bands/9999/invitations",
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

/// Tests the expire query parameter.
///
/// Expected: expires_at is 60 seconds after created_at
#[tokio::test]
async fn invitation_honours_expire_parameter() {
    let app = app().await;
    let (_, cookie) = register(&app, "expire@example.com").await;
    let band_id = create_band(&app, &cookie, "Short Lived").await;

    let response = send(
        &app,
        Method::POST,
        &format!("/api/bands/{}/invitations?expire=60", band_id),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let invitation = json_body(response).await;
    let created_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(invitation["created_at"].clone()).unwrap();
    let expires_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(invitation["expires_at"].clone()).unwrap();
    assert_eq!(expires_at - created_at, chrono::Duration::seconds(60));
}

/// Tests redeeming unknown and malformed codes.
///
/// Expected: 404 for an unknown code, 400 for a malformed one
#[tokio::test]
async fn redeem_rejects_bad_codes() {
    let app = app().await;
    let (_, cookie) = register(&app, "codes@example.com").await;

    let unknown = send(
        &app,
        Method::POST,
        "/api/bands/join",
        Some(&cookie),
        Some(json!({ "code": "QQQQQQQQQQ" })),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let malformed = send(
        &app,
        Method::POST,
        "/api/bands/join",
        Some(&cookie),
        Some(json!({ "code": "short" })),
    )
    .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}

/// Tests that only the creator can keep an invitation.
///
/// Expected: 404 for another account, 204 for the creator
#[tokio::test]
async fn keep_is_limited_to_creator() {
    let app = app().await;
    let (_, owner) = register(&app, "keeper@example.com").await;
    let (_, other) = register(&app, "other@example.com").await;
    let band_id = create_band(&app, &owner, "Keepers").await;
    let invitation = create_invitation(&app, &owner, band_id).await;
    let uri = format!("/api/invitations/{}/keep", invitation["id"]);

    let forbidden = send(&app, Method::POST, &uri, Some(&other), None).await;
    assert_eq!(forbidden.status(), StatusCode::NOT_FOUND);

    let kept = send(&app, Method::POST, &uri, Some(&owner), None).await;
    assert_eq!(kept.status(), StatusCode::NO_CONTENT);
}

/// Tests fetching a single band.
///
/// Expected: 200 for an existing band, 404 otherwise
#[tokio::test]
async fn get_band_by_id() {
    let app = app().await;
    let (_, cookie) = register(&app, "single@example.com").await;
    let band_id = create_band(&app, &cookie, "Solo").await;

    let found = send(
        &app,
        Method::GET,
        &format!("/api/bands/{}", band_id),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(json_body(found).await["name"], "Solo");

    let missing = send(&app, Method::GET, "/api/bands/9999", Some(&cookie), None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the invitation route documented
#[tokio::test]
async fn serves_openapi_document() {
    let app = app().await;

    let response = send(&app, Method::GET, "/api/docs/openapi.json", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = json_body(response).await;
    assert!(doc["paths"]["/api/bands/{band_id}/invitations"].is_object());
}
