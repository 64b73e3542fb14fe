mod model;
mod server;

use tokio_util::sync::CancellationToken;

use crate::server::{
    config::Config, error::AppError, router, scheduler::invitation_cull::InvitationCuller,
    service::token::TokenCodec, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenCodec::new(config.jwt_secret.as_bytes())?;
    let shutdown = CancellationToken::new();

    let culler = InvitationCuller::start(db.clone(), config.invitation_cull_interval).await?;

    let app = router::router(AppState::new(db, tokens, shutdown.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal(shutdown))
        .await?;

    culler.shutdown().await?;

    tracing::info!("Server stopped");

    Ok(())
}
