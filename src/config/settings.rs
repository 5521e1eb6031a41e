use std::env;
use std::time::Duration;
use config::{Config, File, ConfigError};
use dotenv::dotenv;

use crate::db::seed::SeedOptions;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub store: StoreSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings{
    pub port: u16,
    pub host: String,
    pub log_level: String,
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shape of the generated match snapshot and the deadline for reading it
#[derive(serde::Deserialize, Debug, Clone)]
pub struct StoreSettings{
    pub seed: u64,
    pub match_count: usize,
    pub season: String,
    pub timeout_milliseconds: u64,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            seed: self.seed,
            match_count: self.match_count,
            season: self.season.clone(),
        }
    }
}

pub fn get_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let env_filename = format!("{}.yml", environment.as_str());
    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base.yml")))
        .add_source(File::from(configuration_directory.join(env_filename)))
        .add_source(
            config::Environment::default()
                .prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("application.cors_allowed_origins")
        )
        .build()?;

    let mut settings = config.try_deserialize::<Settings>()?;

    // Hosting platforms hand the port over as a bare PORT variable
    if let Ok(port) = env::var("PORT") {
        settings.application.port = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT must be a number, got {}", port)))?;
    }

    Ok(settings)
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local` or `production`.",
                other
            )),
        }
    }
}
