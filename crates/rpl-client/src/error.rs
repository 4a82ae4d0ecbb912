use thiserror::Error;

use rpl_protocol::{CommandError, ProtocolError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("command failed: {0}")]
    Command(#[from] CommandError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// The command-level error, if the failure reached a command.
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            Self::Command(e) => Some(e),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
