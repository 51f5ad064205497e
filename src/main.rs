use std::net::SocketAddr;

use axum::http::HeaderValue;
use courseboard::config::AppConfig;
use courseboard::routes;
use courseboard::services::livingapps::LivingAppsClient;
use courseboard::AppState;
use mimalloc::MiMalloc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courseboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");
    let client = LivingAppsClient::new(&config)?;

    let cors = CorsLayer::new().allow_origin(
        config
            .frontend_url
            .parse::<HeaderValue>()
            .expect("FRONTEND_URL is not a valid origin"),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(host = %addr, "Starting Courseboard API server");

    let app = routes::router(AppState { client, config })
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
