mod api;
mod config;
mod db;
mod extractor;
mod middleware;
mod view;

use config::Config;
use db::Store;
use poem::{listener::TcpListener, Server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = Config::load()?;

    let store = Store::open(&config.database_path).await?;
    info!("database ready at {}", config.database_path.display());

    let app = api::build_app(store.clone(), &config.static_dir);

    info!("listening on {}", config.bind_addr);
    Server::new(TcpListener::bind(config.bind_addr.clone()))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!("failed to listen for ctrl-c: {:?}", e);
                }
                info!("shutting down");
            },
            None,
        )
        .await?;

    store.close().await?;

    Ok(())
}
