//! Server configuration.

/// Runtime configuration for the extraction service.
///
/// The extraction rules themselves are statically defined; the listening
/// port is the only knob.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port.
    pub port: u16,
}

impl ServerConfig {
    /// Create configuration from the environment: `PORT` selects the
    /// listening port, defaulting to 5000 when unset or unparsable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        Self { port }
    }
}
