//! Command bookkeeping: the error record, the one-shot completion pair, and
//! the type-erased pending handle a dispatcher routes responses to.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::debug;

use crate::codec::{self, ResponseFrame};
use crate::error::ProtocolResult;
use crate::sequence::{CommandId, IdSequence};

/// Category of every locally synthesized failure.
pub const CLIENT_ERROR: &str = "Client Error";

/// Code of every locally synthesized failure.
pub const CLIENT_ERROR_CODE: i64 = -1;

/// Message delivered when a command's signalling side disappears without a
/// terminal event.
pub const ABANDONED: &str = "command abandoned before completion";

/// Terminal failure of one command, either reported by the server or
/// synthesized by the client.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{name} {code} {message} {exception}")]
pub struct CommandError {
    #[serde(rename = "error")]
    pub name: String,
    #[serde(rename = "error_code", default = "client_error_code")]
    pub code: i64,
    #[serde(rename = "error_message", default)]
    pub message: String,
    #[serde(rename = "error_exception", default, skip_serializing_if = "String::is_empty")]
    pub exception: String,
}

fn client_error_code() -> i64 {
    CLIENT_ERROR_CODE
}

impl CommandError {
    /// A local failure: connection loss, decode failure, or misuse.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            name: CLIENT_ERROR.to_string(),
            code: CLIENT_ERROR_CODE,
            message: message.into(),
            exception: String::new(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.name == CLIENT_ERROR && self.code == CLIENT_ERROR_CODE
    }
}

/// A successful response with the envelope fields the server echoed.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply<T> {
    pub id: CommandId,
    /// The frame's `type`, `"response"` for command replies.
    pub kind: String,
    pub status: String,
    pub result: T,
}

impl<T> Reply<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}

/// What a caller eventually observes for one command.
pub type Outcome<T> = Result<Reply<T>, CommandError>;

/// An RPC operation: the request payload plus the type its result decodes to.
pub trait Request: Serialize + Send + Sync + 'static {
    /// Wire name of the operation (the frame's `command` field).
    const COMMAND: &'static str;

    type Result: DeserializeOwned + Send + 'static;
}

/// Create a linked signal/completion pair for one command.
pub fn completion<T>(id: CommandId, command: &'static str) -> (Signal<T>, Completion<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Signal { id, command, tx },
        Completion { id, command, rx },
    )
}

/// The signalling half. Every terminal operation consumes it, so a command
/// can see at most one terminal event.
#[derive(Debug)]
pub struct Signal<T> {
    id: CommandId,
    command: &'static str,
    tx: oneshot::Sender<Outcome<T>>,
}

impl<T> Signal<T> {
    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn command(&self) -> &'static str {
        self.command
    }

    pub fn succeed(self, reply: Reply<T>) {
        self.finish(Ok(reply));
    }

    pub fn fail(self, error: CommandError) {
        self.finish(Err(error));
    }

    /// Fail with a client error carrying `message`.
    pub fn fail_local(self, message: impl Into<String>) {
        self.finish(Err(CommandError::client(message)));
    }

    fn finish(self, outcome: Outcome<T>) {
        if self.tx.send(outcome).is_err() {
            // The caller stopped waiting; the outcome is dropped, not redelivered.
            debug!(id = %self.id, command = self.command, "completion discarded by caller");
        }
    }
}

/// The caller's half: resolves once the command reaches its terminal event.
#[derive(Debug)]
pub struct Completion<T> {
    id: CommandId,
    command: &'static str,
    rx: oneshot::Receiver<Outcome<T>>,
}

impl<T> Completion<T> {
    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Wait for the outcome.
    pub async fn wait(self) -> Outcome<T> {
        self.rx
            .await
            .unwrap_or_else(|_| Err(CommandError::client(ABANDONED)))
    }

    /// Wait at most `deadline`. On expiry the command is abandoned and a
    /// client error is returned; a later signal is silently dropped.
    pub async fn wait_for(self, deadline: Duration) -> Outcome<T> {
        let (id, command) = (self.id, self.command);
        match tokio::time::timeout(deadline, self.wait()).await {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(id = %id, command, ?deadline, "command timed out");
                Err(CommandError::client(format!(
                    "{command} timed out after {}ms",
                    deadline.as_millis()
                )))
            }
        }
    }

    /// Block the current thread until the outcome arrives. Must not be
    /// called from within an async runtime.
    pub fn blocking_wait(self) -> Outcome<T> {
        self.rx
            .blocking_recv()
            .unwrap_or_else(|_| Err(CommandError::client(ABANDONED)))
    }
}

/// A pending command with its result type erased, as held by a dispatcher.
pub trait Pending: Send + Sync {
    fn id(&self) -> CommandId;

    fn command(&self) -> &'static str;

    /// Decode `frame` into this command's result and deliver the outcome.
    fn complete(self: Box<Self>, frame: ResponseFrame);

    /// Deliver a client error.
    fn fail(self: Box<Self>, message: &str);
}

impl<T: DeserializeOwned + Send + 'static> Pending for Signal<T> {
    fn id(&self) -> CommandId {
        self.id
    }

    fn command(&self) -> &'static str {
        self.command
    }

    fn complete(self: Box<Self>, frame: ResponseFrame) {
        let signal = *self;
        match frame.into_outcome::<T>(signal.command) {
            Ok(reply) => signal.succeed(reply),
            Err(error) => Signal::fail(signal, error),
        }
    }

    fn fail(self: Box<Self>, message: &str) {
        let signal = *self;
        signal.fail_local(message);
    }
}

/// One outstanding request: identifier, payload, and the signalling half of
/// its completion.
pub struct Command<R: Request> {
    id: CommandId,
    request: R,
    signal: Signal<R::Result>,
}

impl<R: Request> Command<R> {
    /// Issue a fresh identifier from `ids` and create the command together
    /// with the completion its caller waits on.
    pub fn new(ids: &IdSequence, request: R) -> (Self, Completion<R::Result>) {
        let id = ids.next_id();
        let (signal, completion) = completion(id, R::COMMAND);
        let command = Self {
            id,
            request,
            signal,
        };
        (command, completion)
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        R::COMMAND
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    /// The JSON request frame: `id`, `command`, then the payload's fields.
    pub fn encode(&self) -> ProtocolResult<String> {
        codec::encode_request(self.id, R::COMMAND, &self.request)
    }

    /// Hand over the signalling half for routing.
    pub fn into_pending(self) -> Box<dyn Pending> {
        Box::new(self.signal)
    }

    /// Fail before the command was ever sent.
    pub fn fail_local(self, message: impl Into<String>) {
        self.signal.fail_local(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Echo {
        text: String,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct EchoResult {
        text: String,
    }

    impl Request for Echo {
        const COMMAND: &'static str = "echo";
        type Result = EchoResult;
    }

    fn echo(ids: &IdSequence) -> (Command<Echo>, Completion<EchoResult>) {
        Command::new(ids, Echo { text: "hi".into() })
    }

    fn frame(value: serde_json::Value) -> ResponseFrame {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn command_error_display() {
        let err = CommandError {
            name: "actNotFound".into(),
            code: 19,
            message: "Account not found.".into(),
            exception: String::new(),
        };
        assert_eq!(err.to_string(), "actNotFound 19 Account not found. ");
        let local = CommandError::client("connection lost");
        assert_eq!(local.to_string(), "Client Error -1 connection lost ");
        assert!(local.is_client_error());
        assert!(!err.is_client_error());
    }

    #[test]
    fn commands_take_fresh_identifiers() {
        let ids = IdSequence::new();
        let (a, _) = echo(&ids);
        let (b, _) = echo(&ids);
        assert!(b.id() > a.id());
        assert_eq!(a.name(), "echo");
    }

    #[test]
    fn encode_carries_id_and_command() {
        let ids = IdSequence::starting_at(7);
        let (cmd, _) = echo(&ids);
        let value: serde_json::Value = serde_json::from_str(&cmd.encode().unwrap()).unwrap();
        assert_eq!(value, json!({ "id": 7, "command": "echo", "text": "hi" }));
    }

    #[tokio::test]
    async fn success_is_delivered() {
        let ids = IdSequence::new();
        let (cmd, done) = echo(&ids);
        let id = cmd.id();
        cmd.into_pending().complete(frame(json!({
            "id": id,
            "type": "response",
            "status": "success",
            "result": { "text": "hi" }
        })));
        let reply = done.wait().await.unwrap();
        assert_eq!(reply.id, id);
        assert_eq!(reply.kind, "response");
        assert_eq!(reply.status, "success");
        assert_eq!(reply.result, EchoResult { text: "hi".into() });
    }

    #[tokio::test]
    async fn server_error_is_delivered_verbatim() {
        let ids = IdSequence::new();
        let (cmd, done) = echo(&ids);
        cmd.into_pending().complete(frame(json!({
            "id": 1,
            "type": "response",
            "status": "error",
            "error": "actNotFound",
            "error_code": 19,
            "error_message": "Account not found.",
            "error_exception": "boom"
        })));
        let err = done.wait().await.unwrap_err();
        assert_eq!(err.name, "actNotFound");
        assert_eq!(err.code, 19);
        assert_eq!(err.message, "Account not found.");
        assert_eq!(err.exception, "boom");
    }

    #[tokio::test]
    async fn local_failure_is_a_client_error() {
        let ids = IdSequence::new();
        let (cmd, done) = echo(&ids);
        cmd.into_pending().fail("connection lost");
        let err = done.wait().await.unwrap_err();
        assert_eq!(err.name, CLIENT_ERROR);
        assert_eq!(err.code, -1);
        assert_eq!(err.message, "connection lost");
    }

    #[tokio::test]
    async fn dropped_signal_yields_abandoned_error() {
        let ids = IdSequence::new();
        let (cmd, done) = echo(&ids);
        drop(cmd);
        let err = done.wait().await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.message, ABANDONED);
    }

    #[tokio::test]
    async fn wait_for_times_out() {
        let ids = IdSequence::new();
        let (cmd, done) = echo(&ids);
        let err = done.wait_for(Duration::from_millis(10)).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(err.message.contains("timed out"));
        // Signalling the abandoned command is harmless.
        cmd.fail_local("late");
    }

    #[test]
    fn blocking_wait_outside_runtime() {
        let (signal, done) = completion::<u32>(CommandId(3), "probe");
        let handle = std::thread::spawn(move || {
            signal.succeed(Reply {
                id: CommandId(3),
                kind: "response".into(),
                status: "success".into(),
                result: 9,
            })
        });
        let reply = done.blocking_wait().unwrap();
        handle.join().unwrap();
        assert_eq!(reply.into_result(), 9);
    }

    #[tokio::test]
    async fn first_terminal_event_wins() {
        // Terminal operations consume the signal, so nothing can follow the first.
        let (signal, done) = completion::<u32>(CommandId(1), "probe");
        signal.fail_local("first");
        let err = done.wait().await.unwrap_err();
        assert_eq!(err.message, "first");
    }
}
