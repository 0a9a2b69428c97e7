use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseStoreError {
    /// The gateway payload does not have the shape the store relies on.
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),

    #[error("Failed to persist gateway response")]
    Persistence(#[source] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GatewayCommunicationError {
    #[error("Gateway request failed: {0}")]
    Transport(String),

    #[error("Gateway responded with status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Gateway response could not be decoded: {0}")]
    Decode(String),
}
