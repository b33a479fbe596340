use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a response (connection, TLS, timeout).
    /// Distinct from a non-success response, which is "no data".
    #[error("request to the release-monitoring service failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to decode release-monitoring response")]
    Decode(#[from] serde_json::Error),
}
