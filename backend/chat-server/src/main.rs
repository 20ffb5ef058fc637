use chat_server::{
    AppState, build_router, database,
    error::{Result as ServerErrorResult, ServerError},
    logger,
};

use chat_config::Config;
use chat_relay::ChatbotRelay;

use log::{info, warn};
use tokio::net::TcpListener;
use url::Url;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting chat-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_url = config.database_url()?;
    let pool = database::open_pool(&database_url).await?;

    // Signing secret
    let jwt_secret = match config.auth.jwt_secret {
        Some(ref secret) => secret.as_bytes().to_vec(),
        None => {
            warn!("No auth.jwt_secret configured, using an ephemeral secret; tokens will not survive a restart");
            chat_auth::generate_ephemeral_secret()
        }
    };

    // Chatbot relay
    let endpoint =
        Url::parse(&config.relay.endpoint).map_err(|source| ServerError::InvalidEndpoint {
            endpoint: config.relay.endpoint.clone(),
            source,
        })?;
    let relay = ChatbotRelay::new(endpoint)?;
    info!("Chatbot relay targeting {}", relay.endpoint());

    let app_state = AppState::new(pool.clone(), relay, &jwt_secret, config.auth.token_ttl_secs);
    let shutdown = app_state.shutdown.clone();
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let mut shutdown_guard = shutdown.subscribe_guard();
    shutdown.listen_for_signals();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
