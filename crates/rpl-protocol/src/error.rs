use thiserror::Error;

use rpl_data::DataError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Data(#[from] DataError),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
