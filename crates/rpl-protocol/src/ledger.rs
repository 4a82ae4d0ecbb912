//! Ledger retrieval: headers, full ledgers, and state pages.

use serde::{Deserialize, Serialize};

use rpl_data::{Hashable, Ledger, LedgerEntry};
use rpl_types::serde_helpers::{opt_u32_lenient, u32_lenient};
use rpl_types::{Hash256, LedgerIndex};

use crate::command::Request;
use crate::error::ProtocolResult;
use crate::method::methods;

/// Fetch a ledger, optionally with its transactions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerRequest {
    pub ledger_index: LedgerIndex,
    pub accounts: bool,
    pub transactions: bool,
    /// Return full transactions with metadata instead of hashes.
    pub expand: bool,
}

impl LedgerRequest {
    pub fn header(ledger_index: LedgerIndex) -> Self {
        Self {
            ledger_index,
            accounts: false,
            transactions: false,
            expand: false,
        }
    }

    /// The ledger with every transaction expanded.
    pub fn with_transactions(ledger_index: LedgerIndex) -> Self {
        Self {
            ledger_index,
            accounts: false,
            transactions: true,
            expand: true,
        }
    }

    /// The ledger with its full state tree as typed entries.
    pub fn with_state(ledger_index: LedgerIndex) -> Self {
        Self {
            ledger_index,
            accounts: true,
            transactions: false,
            expand: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LedgerResult {
    pub ledger: Ledger,
    #[serde(default)]
    pub ledger_hash: Option<Hash256>,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_index: Option<u32>,
    #[serde(default)]
    pub validated: bool,
}

impl Request for LedgerRequest {
    const COMMAND: &'static str = methods::LEDGER;
    type Result = LedgerResult;
}

/// Fetch a ledger header together with its binary serialization.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerHeaderRequest {
    pub ledger: LedgerIndex,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LedgerHeaderResult {
    pub ledger: Ledger,
    #[serde(deserialize_with = "u32_lenient")]
    pub ledger_index: u32,
    #[serde(default)]
    pub ledger_hash: Option<Hash256>,
    /// Hex of the serialized header.
    #[serde(default)]
    pub ledger_data: String,
}

impl LedgerHeaderResult {
    pub fn ledger_data_bytes(&self) -> ProtocolResult<Vec<u8>> {
        Ok(hex::decode(&self.ledger_data)?)
    }

    pub fn hash(&self) -> Option<Hash256> {
        self.ledger_hash.or_else(|| self.ledger.content_hash())
    }
}

impl Request for LedgerHeaderRequest {
    const COMMAND: &'static str = methods::LEDGER_HEADER;
    type Result = LedgerHeaderResult;
}

/// Fetch one page of a ledger's state as typed entries.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerDataRequest {
    pub ledger: LedgerIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Hash256>,
}

impl LedgerDataRequest {
    pub fn new(ledger: LedgerIndex, marker: Option<Hash256>) -> Self {
        Self { ledger, limit: None, marker }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LedgerDataResult {
    #[serde(deserialize_with = "u32_lenient")]
    pub ledger_index: u32,
    pub ledger_hash: Hash256,
    /// Resume point; absent on the last page.
    #[serde(default)]
    pub marker: Option<Hash256>,
    /// Each element is resolved through the registry by its
    /// `LedgerEntryType`.
    pub state: Vec<LedgerEntry>,
}

impl Request for LedgerDataRequest {
    const COMMAND: &'static str = methods::LEDGER_DATA;
    type Result = LedgerDataResult;
}

/// Fetch one page of a ledger's state as raw serialized blobs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinaryLedgerDataRequest {
    pub ledger: LedgerIndex,
    binary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Hash256>,
}

impl BinaryLedgerDataRequest {
    pub fn new(ledger: LedgerIndex, marker: Option<Hash256>) -> Self {
        Self {
            ledger,
            binary: true,
            limit: None,
            marker,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BinaryStateObject {
    /// Hex of the serialized entry.
    pub data: String,
    pub index: Hash256,
}

impl BinaryStateObject {
    pub fn bytes(&self) -> ProtocolResult<Vec<u8>> {
        Ok(hex::decode(&self.data)?)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BinaryLedgerDataResult {
    #[serde(deserialize_with = "u32_lenient")]
    pub ledger_index: u32,
    pub ledger_hash: Hash256,
    #[serde(default)]
    pub marker: Option<Hash256>,
    pub state: Vec<BinaryStateObject>,
}

impl Request for BinaryLedgerDataRequest {
    const COMMAND: &'static str = methods::LEDGER_DATA;
    type Result = BinaryLedgerDataResult;
}
