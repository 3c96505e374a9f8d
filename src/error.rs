//! Host errors.
//!
//! Only configuration and startup failures end the process. Everything else
//! (a bad command line, a failed image fetch) is logged and the session
//! carries on.

/// Errors produced by the host process.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the image service failed.
    #[error("image request failed: {0}")]
    ApiRequest(String),

    /// The image service returned a non-success HTTP status.
    #[error("image service error: status {status}: {body}")]
    ApiResponse { status: u16, body: String },

    /// The image service response body could not be deserialized.
    #[error("image response parse failed: {0}")]
    ApiParse(String),

    /// Container extents were negative or not finite.
    #[error("invalid container size {width}x{height}: must be a non-negative number")]
    InvalidContainer { width: f64, height: f64 },

    /// A line on the command stream was not a valid command.
    #[error("command parse failed: {0}")]
    CommandParse(String),

    /// Reading commands or writing scenes failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
