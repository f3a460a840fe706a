pub mod app_config;
pub mod config;
pub mod products;
pub mod run_config;

pub use app_config::{AppConfig, DEFAULT_SERP_BASE_URL, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{ItemProducts, ProductRecord};
pub use run_config::{load_run_config, RunConfig, Stages, DEFAULT_KEYWORDS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read run config {path}: {source}")]
    RunFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse run config: {0}")]
    RunFileParse(#[from] serde_yaml::Error),

    #[error("run config validation failed: {0}")]
    Validation(String),
}
