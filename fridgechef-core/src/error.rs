use std::time::Duration;
use thiserror::Error;

/// Data crossing a contract boundary did not match its declared shape.
#[derive(Debug, Error)]
#[error("schema validation failed at `{path}`: {message}")]
pub struct SchemaError {
    /// Path to the offending field (e.g. `recipes[0].name`).
    pub path: String,
    pub message: String,
}

impl SchemaError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Transport-level failure of an external call (generative, calorie, image).
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("API error: {0}")]
    Api(String),

    #[error("call timed out after {0:?}")]
    Timeout(Duration),

    #[error("not configured: {0}")]
    NotConfigured(String),
}

/// Missing or invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("unknown AI provider: {0}")]
    UnknownProvider(String),
}

/// Pipeline-level failure of `RecipePipeline::generate`.
///
/// Per-candidate enrichment failures are not represented here: they degrade
/// gracefully, leaving the affected field absent.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The inbound request was malformed. Never retried.
    #[error("invalid request: {0}")]
    InvalidRequest(SchemaError),

    /// The generative capability returned data that does not match the
    /// declared output shape. Never retried.
    #[error("generative output failed validation: {0}")]
    InvalidModelOutput(SchemaError),

    /// The top-level generative call failed at the transport level.
    #[error("generative call failed: {0}")]
    Upstream(#[from] UpstreamError),
}
