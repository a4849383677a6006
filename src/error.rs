//! Admin UI Errors

use thiserror::Error;

/// Prefix of the alert shown when the server answers `success: false`
pub const REJECTED_PREFIX: &str = "Erro ao atualizar status: ";

/// Fallback for a rejection that carries no `error` string
pub const UNKNOWN_ERROR: &str = "Desconhecido";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    /// Fetch failed before a response arrived
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("invalid request: {0}")]
    Encode(String),
    /// Server answered with `success: false`
    #[error("rejected: {}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Rejected { message: Option<String> },
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl AdminError {
    /// Whether the failure happened below the application layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, AdminError::Network(_) | AdminError::Decode(_) | AdminError::Encode(_))
    }

    /// Text for the blocking alert.
    ///
    /// Rejections echo the server message; everything else gets `generic`.
    pub fn alert_text(&self, generic: &str) -> String {
        match self {
            AdminError::Rejected { message } => {
                format!("{}{}", REJECTED_PREFIX, message.as_deref().unwrap_or(UNKNOWN_ERROR))
            }
            _ => generic.to_string(),
        }
    }
}
