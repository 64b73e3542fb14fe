//! HTTP route table.
//!
//! Public routes handle registration and login. Every other API route sits behind
//! `require_principal`, which rejects requests without a valid access cookie. The
//! OpenAPI document is assembled from the handler annotations and served through
//! Swagger UI at `/api/docs`.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, band, invitation},
    middleware::auth::require_principal,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "rider", description = "Accounts, bands and band invitations"),
    tags(
        (name = "account", description = "Registration, login and the current account"),
        (name = "band", description = "Bands and memberships"),
        (name = "invitation", description = "Band invitation codes")
    )
)]
struct ApiDoc;

/// Builds the application router with all routes, documentation and request tracing.
///
/// # Arguments
/// - `state` - Shared application state handed to every handler
///
/// # Returns
/// - `Router` - Ready to be served
pub fn router(state: AppState) -> Router {
    let (public, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(account::register))
        .routes(routes!(account::login))
        .split_for_parts();

    let (protected, protected_api) = OpenApiRouter::new()
        .routes(routes!(account::get_me))
        .routes(routes!(band::get_bands, band::create_band))
        .routes(routes!(band::get_band))
        .routes(routes!(invitation::create_invitation))
        .routes(routes!(invitation::keep_invitation))
        .routes(routes!(invitation::redeem_invitation))
        .split_for_parts();
    api.merge(protected_api);

    let protected =
        protected.route_layer(middleware::from_fn_with_state(state.clone(), require_principal));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod test;
