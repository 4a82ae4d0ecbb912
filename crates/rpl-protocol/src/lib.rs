//! Command correlation for the ledger client.
//!
//! Every request sent over the shared connection is a [`Command`]: a fresh
//! identifier from an [`IdSequence`], a typed [`Request`] payload, and a
//! one-shot completion. The dispatcher keeps the signalling half as a
//! type-erased [`Pending`] until the matching [`ResponseFrame`] arrives; the
//! caller waits on the [`Completion`] and observes exactly one [`Outcome`].
//!
//! Request/result pairs for every supported operation live in [`account`],
//! [`ledger`], [`tx`], [`path`] and [`server`].

pub mod account;
pub mod codec;
pub mod command;
pub mod error;
pub mod ledger;
pub mod method;
pub mod path;
pub mod sequence;
pub mod server;
pub mod tx;

pub use account::{
    AccountInfoRequest, AccountInfoResult, AccountLinesRequest, AccountLinesResult,
    AccountOffersRequest, AccountOffersResult, AccountTxRequest, AccountTxResult,
    DepositAuthorizedRequest, DepositAuthorizedResult,
};
pub use codec::ResponseFrame;
pub use command::{
    completion, Command, CommandError, Completion, Outcome, Pending, Reply, Request, Signal,
    CLIENT_ERROR, CLIENT_ERROR_CODE,
};
pub use error::{ProtocolError, ProtocolResult};
pub use ledger::{
    BinaryLedgerDataRequest, BinaryLedgerDataResult, LedgerDataRequest, LedgerDataResult,
    LedgerHeaderRequest, LedgerHeaderResult, LedgerRequest, LedgerResult,
};
pub use method::methods;
pub use path::{BookOffersRequest, BookOffersResult, RipplePathFindRequest, RipplePathFindResult};
pub use sequence::{CommandId, IdSequence};
pub use server::{FeeRequest, FeeResult, ServerInfoRequest, ServerInfoResult};
pub use tx::{SubmitRequest, SubmitResult, TxRequest, TxResult};
