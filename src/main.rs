//! Construction Chatbot - Binary Entry Point
//!
//! Loads the glossary, then serves the HTTP API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use construction_chatbot::api::{self, AppState};
use construction_chatbot::{ServerConfig, TopicResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting {} v{}",
        construction_chatbot::NAME,
        construction_chatbot::VERSION
    );

    let config = ServerConfig::from_env()?;
    let glossary = config.load_glossary()?;

    match &config.glossary_path {
        Some(path) => info!("Loaded glossary from {}", path.display()),
        None => info!("Using built-in glossary"),
    }
    info!(
        "Glossary ready: {} topics, {} synonym phrases",
        glossary.len(),
        glossary.variant_count()
    );
    for issue in glossary.validate() {
        warn!("Glossary: {}", issue);
    }

    let state = Arc::new(AppState::new(Arc::new(TopicResolver::new(glossary))));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    api::serve(listener, state).await?;

    info!("Server stopped");
    Ok(())
}
