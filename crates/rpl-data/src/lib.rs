//! Type registry and record model for the ledger client.
//!
//! Ledger entries and transactions are closed families of record types, each
//! identified on the wire by a numeric code or its canonical name. This crate
//! owns the two code spaces (plus the node-store names), the registry that
//! maps between codes, names and tagged record constructors, and the records
//! that embed them: transaction metadata and ledgers.
//!
//! # Key Types
//!
//! - [`TypeRegistry`]: process-wide code ↔ name tables, built once
//! - [`LedgerEntry`] / [`LedgerEntryType`]: ledger state records
//! - [`Transaction`] / [`TransactionType`]: transactions
//! - [`TransactionWithMetaData`]: an applied transaction with its outcome
//! - [`Ledger`]: a ledger header and optional transaction list

#[macro_use]
mod macros;

pub mod entry;
pub mod error;
pub mod ledger;
pub mod meta;
pub mod node;
pub mod record;
pub mod registry;
pub mod transaction;

pub use entry::{EntryBase, LedgerEntry, LedgerEntryType};
pub use error::{DataError, DataResult};
pub use ledger::{Ledger, LedgerTransaction};
pub use meta::{AffectedNode, MetaData, NodeEffect, TransactionResult, TransactionWithMetaData};
pub use node::NodeType;
pub use record::{Family, Hashable, Record};
pub use registry::{known_type_names, registry, CodeSpace, TypeCode, TypeRegistry};
pub use transaction::{Transaction, TransactionType, TxBase};
