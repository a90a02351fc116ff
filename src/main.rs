use std::net::{IpAddr, SocketAddr};

use edumentor::{
    AppState, build_router,
    config::Config,
    database::{create_pool, create_schema},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        "Generation mode: {:?} (fallback: {})",
        config.generation_mode,
        config.generation_fallback
    );

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to open SQLite database");
    create_schema(&pool)
        .await
        .expect("Failed to create database schema");

    let state = AppState::new(pool, config.clone()).expect("Failed to build HTTP client");
    let app = build_router(state);

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
