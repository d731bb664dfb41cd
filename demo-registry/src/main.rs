use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_registry_axum::{
    BootstrapPolicy, StoreConfig, UserService, UserStore, user_registry_router,
};

/// Bind address from `SERVER_HOST` and `SERVER_PORT`, defaulting to
/// 127.0.0.1:3000
fn bind_addr() -> Result<SocketAddr, std::net::AddrParseError> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    format!("{}:{}", host, port).parse()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect the store and prepare the table before serving
    let config = StoreConfig::from_env()?;
    let store = UserStore::connect(&config)?;
    let service = UserService::new(store);
    service.bootstrap(BootstrapPolicy::from_env()).await?;

    // The demo frontend is served from another origin
    let app = user_registry_router(service).layer(CorsLayer::permissive());

    let addr = bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Backend app listening at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
