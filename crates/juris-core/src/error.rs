//! Error types shared by the webhook client and the front ends.
//!
//! A missing process is not an error; it is [`crate::ProcessOutcome::NotFound`].

use thiserror::Error;

/// A single form-field rule violation. Blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Form field the message belongs to (`numeroProcesso`, `estado`, ...).
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Transport and decoding failures of a webhook call.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Non-2xx response. `message` is already user-facing.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Tempo limite da requisição excedido. Tente novamente.")]
    Timeout { seconds: u64 },

    /// Connection could not be established; carries the transport detail
    /// for the log.
    #[error("Erro de conexão. Verifique sua internet e tente novamente.")]
    Connection(String),

    #[error("Resposta vazia do servidor")]
    EmptyResponse,

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    /// The webhook URL for this operation is empty in the configuration.
    #[error("Webhook de {0} não configurado")]
    NotConfigured(&'static str),
}

impl QueryError {
    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            QueryError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
