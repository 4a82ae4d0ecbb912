use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use rpl_protocol::{Command, CommandId, Completion, IdSequence, Request, ResponseFrame};

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::pending::PendingTable;
use crate::transport::Transport;

const CONNECTION_CLOSED: &str = "connection closed";

/// What [`Dispatcher::handle_frame`] did with an inbound frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameDisposition {
    /// Routed to the pending command with this identifier.
    Delivered(CommandId),
    /// A response whose identifier has no pending command (duplicate,
    /// late, or never issued). Discarded.
    Stale(CommandId),
    /// A stream message without an identifier. Ignored.
    Notification,
    /// Not a decodable frame. Ignored.
    Malformed,
}

/// Routes responses from the shared connection to the commands awaiting them.
///
/// Owns the identifier sequence and the pending table for one connection.
/// Once the connection is lost the dispatcher stays closed and every later
/// command fails locally.
pub struct Dispatcher<T: Transport> {
    ids: IdSequence,
    pending: PendingTable,
    transport: T,
    config: ClientConfig,
    closed: AtomicBool,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            ids: IdSequence::starting_at(config.first_id),
            pending: PendingTable::new(config.max_pending),
            transport,
            config,
            closed: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Send `request` and return the completion its outcome arrives on.
    ///
    /// The command is registered before its frame is sent. Every local
    /// failure (encoding, a full pending table, a failed send) is delivered
    /// through the returned completion as a client error.
    pub async fn issue<R: Request>(&self, request: R) -> Completion<R::Result> {
        let (command, completion) = Command::new(&self.ids, request);
        let id = command.id();
        let name = command.name();

        let frame = match command.encode() {
            Ok(frame) => frame,
            Err(e) => {
                warn!(id = %id, command = name, error = %e, "cannot encode request");
                command.fail_local(e.to_string());
                return completion;
            }
        };

        if let Err(rejected) = self.pending.insert(command.into_pending()) {
            warn!(id = %id, command = name, max = self.pending.capacity(), "too many pending commands");
            rejected.fail(&format!(
                "too many pending commands (max {})",
                self.pending.capacity()
            ));
            return completion;
        }

        // Checked after registering: either this sees the flag or the drain
        // in `connection_lost` sees the entry.
        if self.is_closed() {
            if let Some(pending) = self.pending.remove(id) {
                debug!(id = %id, command = name, "connection already closed");
                pending.fail(CONNECTION_CLOSED);
            }
            return completion;
        }

        debug!(id = %id, command = name, "sending command");
        if let Err(e) = self.transport.send(frame).await {
            warn!(id = %id, command = name, error = %e, "send failed");
            // The response may have raced us; only fail what is still pending.
            if let Some(pending) = self.pending.remove(id) {
                pending.fail(&e.to_string());
            }
        }
        completion
    }

    /// Send `request` and wait for its result, bounded by the configured
    /// request timeout. A command that times out is dropped from the pending
    /// table; a late response for it is discarded as stale.
    pub async fn call<R: Request>(&self, request: R) -> ClientResult<R::Result> {
        let completion = self.issue(request).await;
        let id = completion.id();
        match completion.wait_for(self.config.request_timeout()).await {
            Ok(reply) => Ok(reply.into_result()),
            Err(e) => {
                if self.pending.remove(id).is_some() {
                    debug!(id = %id, command = R::COMMAND, "abandoned command removed");
                }
                Err(e.into())
            }
        }
    }

    /// Route one inbound frame.
    pub fn handle_frame(&self, text: &str) -> FrameDisposition {
        let frame = match ResponseFrame::decode(text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(error = %e, "discarding malformed frame");
                return FrameDisposition::Malformed;
            }
        };

        let Some(id) = frame.id.filter(|_| frame.is_response()) else {
            debug!(kind = frame.kind.as_deref().unwrap_or("unknown"), "ignoring stream message");
            return FrameDisposition::Notification;
        };

        match self.pending.remove(id) {
            Some(pending) => {
                debug!(id = %id, command = pending.command(), status = frame.status.as_deref().unwrap_or(""), "response received");
                pending.complete(frame);
                FrameDisposition::Delivered(id)
            }
            None => {
                warn!(id = %id, "response for unknown command discarded");
                FrameDisposition::Stale(id)
            }
        }
    }

    /// Close the dispatcher and fail every pending command with a client
    /// error carrying `reason`. Returns how many were failed.
    pub fn connection_lost(&self, reason: &str) -> usize {
        self.closed.store(true, Ordering::SeqCst);
        let drained = self.pending.drain();
        let count = drained.len();
        info!(pending = count, reason, "connection lost");
        for pending in drained {
            pending.fail(reason);
        }
        count
    }

    /// Drain inbound frames until the connection closes, then fail whatever
    /// is still pending.
    pub async fn run(self: Arc<Self>, mut inbound: mpsc::Receiver<String>) {
        while let Some(text) = inbound.recv().await {
            self.handle_frame(&text);
        }
        self.connection_lost(CONNECTION_CLOSED);
    }
}
