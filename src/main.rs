#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "udaipur failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "udaipur listening");
    axum::serve(listener, app).await?;
    Ok(())
}
