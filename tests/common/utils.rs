use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use once_cell::sync::Lazy;

use provexi_backend::run;
use provexi_backend::config::settings::get_config;
use provexi_backend::db::seed::generate_mock_matches;
use provexi_backend::db::{InMemoryMatchRepository, MatchRepository};
use provexi_backend::matches::MatchService;
use provexi_backend::models::matches::Match;
use provexi_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

/// Spawn the app over the configured, generated dataset
pub async fn spawn_app() -> TestApp {
    let configuration = get_config().expect("Failed to read configuration.");
    let matches = generate_mock_matches(Utc::now(), &configuration.store.seed_options())
        .expect("Failed to generate matches");

    spawn_app_with_repository(
        Arc::new(InMemoryMatchRepository::new(matches)),
        configuration.store.timeout(),
    )
    .await
}

/// Spawn the app over a fixed set of matches
pub async fn spawn_app_with_matches(matches: Vec<Match>) -> TestApp {
    spawn_app_with_repository(
        Arc::new(InMemoryMatchRepository::new(matches)),
        Duration::from_secs(2),
    )
    .await
}

pub async fn spawn_app_with_repository(
    repository: Arc<dyn MatchRepository>,
    store_timeout: Duration,
) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let match_service = MatchService::new(repository).with_store_timeout(store_timeout);
    let server = run(listener, match_service, vec!["http://localhost:3000".to_string()])
        .expect("Failed to bind address");
    // Launch the server as a background task
    // tokio::spawn returns a handle to the spawned future,
    // but we have no use for it here, hence the non-binding let
    let _ = tokio::spawn(server);
    TestApp { address }
}
