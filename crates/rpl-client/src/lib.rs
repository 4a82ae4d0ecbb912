//! Reference dispatcher for the ledger client.
//!
//! Issues typed commands over one shared connection and routes each response
//! back to the command that asked for it. The connection itself is behind the
//! [`Transport`] seam; inbound frames are fed to [`Dispatcher::run`] or
//! [`Dispatcher::handle_frame`].

mod calls;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod pending;
pub mod transport;

pub use config::ClientConfig;
pub use dispatcher::{Dispatcher, FrameDisposition};
pub use error::{ClientError, ClientResult};
pub use pending::PendingTable;
pub use transport::{ChannelTransport, Transport};
