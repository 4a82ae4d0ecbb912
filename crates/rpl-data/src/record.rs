use std::fmt;

use serde::{Deserialize, Serialize};

use rpl_types::Hash256;

/// The independent numbering domains of the protocol.
///
/// A numeric type code is only meaningful paired with its family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Ledger state records (`LedgerEntryType`).
    LedgerEntry,
    /// Transactions (`TransactionType`).
    Transaction,
    /// Node-store object kinds.
    Node,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LedgerEntry => write!(f, "ledger entry"),
            Self::Transaction => write!(f, "transaction"),
            Self::Node => write!(f, "node"),
        }
    }
}

/// Capability shared by every polymorphic record.
pub trait Record {
    /// The family this record's type code belongs to.
    fn family(&self) -> Family;

    /// The record's own numeric type code.
    fn type_code(&self) -> u16;

    /// The canonical name for [`Record::type_code`].
    fn type_name(&self) -> &'static str;

    /// The identity hash: entry index for ledger entries, transaction hash
    /// for transactions. `None` until the decoder has populated it.
    fn identity(&self) -> Option<Hash256>;
}

/// Top-level objects that carry a hash over their whole content.
pub trait Hashable {
    fn content_hash(&self) -> Option<Hash256>;
}
