use thiserror::Error;

/// Internal gateway failures. These never cross the gateway boundary —
/// every variant is mapped to a fail-closed [`crate::Verdict`] before
/// reaching a caller.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {0} from inference endpoint")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
