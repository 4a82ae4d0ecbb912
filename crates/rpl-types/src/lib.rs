//! Primitive wire values for the ledger client.
//!
//! Every other client crate depends on `rpl-types`. The types here only
//! describe how values look on the JSON wire; they carry no ledger semantics.
//!
//! # Key Types
//!
//! - [`Hash256`]: 256-bit identifier (ledger hashes, transaction hashes, entry indexes)
//! - [`Account`]: classic base58 account address
//! - [`Amount`]: native drops or an issued-currency amount
//! - [`LedgerIndex`]: ledger selector used by requests
//! - [`RippleTime`]: seconds since the network epoch (2000-01-01)

pub mod account;
pub mod amount;
pub mod error;
pub mod hash;
pub mod ledger_index;
pub mod serde_helpers;
pub mod time;

pub use account::Account;
pub use amount::{Amount, Asset, Currency};
pub use error::TypeError;
pub use hash::Hash256;
pub use ledger_index::LedgerIndex;
pub use time::RippleTime;
