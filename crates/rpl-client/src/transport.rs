use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{ClientError, ClientResult};

/// Outbound half of the shared connection.
///
/// Establishing, framing and re-establishing the connection is the
/// implementor's business; the dispatcher only hands it complete JSON frames.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, frame: String) -> ClientResult<()>;
}

/// A transport backed by a tokio channel. The receiving end is whatever task
/// owns the real connection, or a test.
#[derive(Clone, Debug)]
pub struct ChannelTransport {
    tx: mpsc::Sender<String>,
}

impl ChannelTransport {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, frame: String) -> ClientResult<()> {
        self.tx
            .send(frame)
            .await
            .map_err(|_| ClientError::Transport("connection closed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn frames_pass_through() {
        let (transport, mut outbound) = ChannelTransport::new(4);
        transport.send("{\"id\":1}".into()).await.unwrap();
        assert_eq!(outbound.recv().await.unwrap(), "{\"id\":1}");
    }

    #[tokio::test]
    async fn closed_receiver_is_transport_error() {
        let (transport, outbound) = ChannelTransport::new(1);
        drop(outbound);
        let err = transport.send("{}".into()).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
