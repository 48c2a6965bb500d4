use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutgraphError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tutorial not found: {0}")]
    NotFound(i32),

    #[error("Failed to execute GraphQL operation: {0}")]
    Execution(String),

    #[error("Failed to open log file: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TutgraphError>;
