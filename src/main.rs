use std::net::TcpListener;
use std::sync::Arc;

use chrono::Utc;

use provexi_backend::run;
use provexi_backend::config::settings::get_config;
use provexi_backend::db::seed::generate_mock_matches;
use provexi_backend::db::InMemoryMatchRepository;
use provexi_backend::matches::MatchService;
use provexi_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "provexi-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    // The snapshot is generated once and never written again
    let matches = match generate_mock_matches(Utc::now(), &config.store.seed_options()) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("❌ Failed to generate match data: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("✅ Match store ready with {} matches", matches.len());

    let repository = Arc::new(InMemoryMatchRepository::new(matches));
    let match_service = MatchService::new(repository)
        .with_store_timeout(config.store.timeout());

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("🚀 Server starting on {}", address);

    run(
        listener,
        match_service,
        config.application.cors_allowed_origins.clone(),
    )?.await
}
