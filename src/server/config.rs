use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5555";

pub struct Config {
    pub database_url: String,

    /// The single origin allowed to make credentialed cross-origin requests.
    pub frontend_origin: String,

    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}
