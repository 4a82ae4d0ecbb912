use serde::{Deserialize, Serialize};

use rpl_types::serde_helpers::{u32_lenient, u64_lenient};
use rpl_types::{Hash256, RippleTime};

use crate::entry::LedgerEntry;
use crate::meta::TransactionWithMetaData;
use crate::record::Hashable;

/// A transaction listed in a ledger: just its hash unless the ledger was
/// requested expanded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LedgerTransaction {
    Hash(Hash256),
    Expanded(Box<TransactionWithMetaData>),
}

impl LedgerTransaction {
    pub fn hash(&self) -> Option<Hash256> {
        match self {
            Self::Hash(hash) => Some(*hash),
            Self::Expanded(tx) => tx.content_hash(),
        }
    }
}

/// A ledger header, optionally with its transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(deserialize_with = "u32_lenient")]
    pub ledger_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<Hash256>,
    pub parent_hash: Hash256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash256>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_coins: u64,
    #[serde(default)]
    pub close_time: RippleTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time_human: Option<String>,
    #[serde(default)]
    pub close_time_resolution: u32,
    #[serde(default)]
    pub close_flags: u32,
    #[serde(default)]
    pub parent_close_time: RippleTime,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<LedgerTransaction>>,
    /// State entries, present when the ledger was requested with accounts.
    #[serde(rename = "accountState", default, skip_serializing_if = "Option::is_none")]
    pub account_state: Option<Vec<LedgerEntry>>,
}

impl Hashable for Ledger {
    fn content_hash(&self) -> Option<Hash256> {
        self.ledger_hash.or(self.hash)
    }
}
