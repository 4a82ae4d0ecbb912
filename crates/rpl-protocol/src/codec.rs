//! JSON framing for requests and responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::{CommandError, Reply, CLIENT_ERROR_CODE};
use crate::error::{ProtocolError, ProtocolResult};
use crate::sequence::CommandId;

/// Largest inbound frame accepted, in bytes.
pub const MAX_FRAME_SIZE: usize = 64 * 1024 * 1024;

/// `type` of a frame answering a command.
pub const RESPONSE: &str = "response";

/// `status` of a successful response.
pub const SUCCESS: &str = "success";

#[derive(Serialize)]
struct RequestFrame<'a, R> {
    id: CommandId,
    command: &'a str,
    #[serde(flatten)]
    params: &'a R,
}

/// Encode a request as `{"id": .., "command": .., <params>}`.
pub fn encode_request<R: Serialize>(id: CommandId, command: &str, params: &R) -> ProtocolResult<String> {
    serde_json::to_string(&RequestFrame { id, command, params })
        .map_err(|e| ProtocolError::Serialization(e.to_string()))
}

/// An inbound frame, before it is matched to a command.
///
/// Stream messages (ledger closes, transaction notifications) carry no `id`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct ResponseFrame {
    #[serde(default)]
    pub id: Option<CommandId>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_exception: Option<String>,
}

impl ResponseFrame {
    pub fn decode(text: &str) -> ProtocolResult<Self> {
        if text.len() > MAX_FRAME_SIZE {
            return Err(ProtocolError::FrameTooLarge {
                size: text.len(),
                max: MAX_FRAME_SIZE,
            });
        }
        serde_json::from_str(text).map_err(|e| ProtocolError::Deserialization(e.to_string()))
    }

    /// `true` for frames answering a command, as opposed to stream messages.
    pub fn is_response(&self) -> bool {
        self.id.is_some() && self.kind.as_deref().map_or(true, |kind| kind == RESPONSE)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.status.as_deref() == Some("error")
    }

    /// The server-reported failure, if this frame carries one. A missing
    /// `error_code` becomes the client code.
    pub fn command_error(&self) -> Option<CommandError> {
        if !self.is_error() {
            return None;
        }
        Some(CommandError {
            name: self.error.clone().unwrap_or_else(|| "error".to_string()),
            code: self.error_code.unwrap_or(CLIENT_ERROR_CODE),
            message: self.error_message.clone().unwrap_or_default(),
            exception: self.error_exception.clone().unwrap_or_default(),
        })
    }

    /// Decode this frame into the outcome of the command named `command`.
    ///
    /// Error frames become the server's error; a success without `result` or
    /// with a result that does not decode (including unknown record types)
    /// becomes a client error. A partially decoded result is never returned.
    pub fn into_outcome<T: DeserializeOwned>(self, command: &str) -> Result<Reply<T>, CommandError> {
        if let Some(error) = self.command_error() {
            return Err(error);
        }
        let Some(result) = self.result else {
            return Err(CommandError::client(format!("{command}: missing result")));
        };
        let result = serde_json::from_value(result)
            .map_err(|e| CommandError::client(format!("{command}: cannot decode result: {e}")))?;
        Ok(Reply {
            id: self.id.unwrap_or(CommandId(0)),
            kind: self.kind.unwrap_or_else(|| RESPONSE.to_string()),
            status: self.status.unwrap_or_else(|| SUCCESS.to_string()),
            result,
        })
    }
}
