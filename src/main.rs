use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ticket_marketplace::config::Config;
use ticket_marketplace::handlers::AppState;
use ticket_marketplace::routes::create_routes;
use ticket_marketplace::storage::FileStorage;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ticket_marketplace=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "Loading marketplace data");

    let state = AppState::hydrate(FileStorage::new(config.data_dir.clone()));
    let app = create_routes(state, config.production);

    tracing::info!("🚀 Marketplace running at http://{}", config.addr);

    let listener = TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
