use thiserror::Error;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to listen on {addr}: {source}")]
    Startup {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a stream registry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{0}")]
    Marshal(#[from] serde_json::Error),

    #[error("{0}")]
    Unavailable(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GatewayError>;
