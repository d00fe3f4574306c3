mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let google_oauth_client = startup::setup_google_oauth_client(&config)?;
    let facebook_oauth_client = startup::setup_facebook_oauth_client(&config)?;

    tracing::info!("Starting server");

    let router = server::router::router(&config.media_dir)
        .with_state(AppState::new(
            db,
            http_client,
            google_oauth_client,
            facebook_oauth_client,
            config.app_url.clone(),
            config.media_dir.clone(),
            config.media_base_url.clone(),
        ))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
    )
    .await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
