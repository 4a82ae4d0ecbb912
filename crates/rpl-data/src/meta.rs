//! Transaction metadata: the outcome of applying a transaction to a ledger.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use rpl_types::serde_helpers::opt_u32_lenient;
use rpl_types::{Amount, Hash256, RippleTime};

use crate::entry::{LedgerEntry, LedgerEntryType};
use crate::error::DataResult;
use crate::record::{Family, Hashable, Record};
use crate::transaction::Transaction;

/// Engine result code such as `tesSUCCESS` or `tecUNFUNDED_OFFER`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionResult(pub String);

impl TransactionResult {
    pub fn is_success(&self) -> bool {
        self.0 == "tesSUCCESS"
    }

    /// `tec` codes: the transaction failed but still claimed a fee.
    pub fn claimed_fee_only(&self) -> bool {
        self.0.starts_with("tec")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happened to one ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeEffect {
    #[serde(rename = "LedgerEntryType")]
    pub ledger_entry_type: LedgerEntryType,
    #[serde(rename = "LedgerIndex")]
    pub ledger_index: Hash256,
    #[serde(rename = "FinalFields", default, skip_serializing_if = "Option::is_none")]
    pub final_fields: Option<Map<String, Value>>,
    #[serde(rename = "PreviousFields", default, skip_serializing_if = "Option::is_none")]
    pub previous_fields: Option<Map<String, Value>>,
    #[serde(rename = "NewFields", default, skip_serializing_if = "Option::is_none")]
    pub new_fields: Option<Map<String, Value>>,
    #[serde(rename = "PreviousTxnID", default, skip_serializing_if = "Option::is_none")]
    pub previous_txn_id: Option<Hash256>,
    #[serde(rename = "PreviousTxnLgrSeq", default, skip_serializing_if = "Option::is_none")]
    pub previous_txn_lgr_seq: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AffectedNode {
    CreatedNode(NodeEffect),
    ModifiedNode(NodeEffect),
    DeletedNode(NodeEffect),
}

impl AffectedNode {
    pub fn effect(&self) -> &NodeEffect {
        match self {
            Self::CreatedNode(e) | Self::ModifiedNode(e) | Self::DeletedNode(e) => e,
        }
    }

    pub fn entry_type(&self) -> LedgerEntryType {
        self.effect().ledger_entry_type
    }

    /// The entry as it stands after the transaction, decoded into its typed
    /// variant. Created nodes report their new fields, the others their final
    /// fields; `None` when the node carries neither.
    pub fn final_entry(&self) -> DataResult<Option<LedgerEntry>> {
        let effect = self.effect();
        let fields = match self {
            Self::CreatedNode(_) => effect.new_fields.as_ref(),
            Self::ModifiedNode(_) | Self::DeletedNode(_) => effect.final_fields.as_ref(),
        };
        let Some(fields) = fields else {
            return Ok(None);
        };
        let mut fields = fields.clone();
        fields.insert(
            "LedgerEntryType".to_string(),
            Value::String(effect.ledger_entry_type.name().to_string()),
        );
        fields.insert("index".to_string(), Value::String(effect.ledger_index.to_hex()));
        LedgerEntry::from_fields(fields).map(Some)
    }
}

/// `delivered_amount` is the literal string `"unavailable"` for payments
/// applied before the field existed.
fn delivered_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Amount>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(s)) if s == "unavailable" => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    #[serde(rename = "AffectedNodes", default)]
    pub affected_nodes: Vec<AffectedNode>,
    #[serde(rename = "TransactionIndex")]
    pub transaction_index: u32,
    #[serde(rename = "TransactionResult")]
    pub transaction_result: TransactionResult,
    #[serde(
        default,
        deserialize_with = "delivered_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivered_amount: Option<Amount>,
}

/// A transaction as it was applied in a particular ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionWithMetaData {
    #[serde(rename = "meta", alias = "metaData", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaData>,
    /// Close time of the containing ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<RippleTime>,
    #[serde(
        default,
        deserialize_with = "opt_u32_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub ledger_index: Option<u32>,
    #[serde(flatten)]
    pub transaction: Transaction,
}

impl TransactionWithMetaData {
    pub fn result(&self) -> Option<&TransactionResult> {
        self.meta.as_ref().map(|m| &m.transaction_result)
    }
}

impl Record for TransactionWithMetaData {
    fn family(&self) -> Family {
        Family::Transaction
    }

    fn type_code(&self) -> u16 {
        self.transaction.type_code()
    }

    fn type_name(&self) -> &'static str {
        self.transaction.type_name()
    }

    fn identity(&self) -> Option<Hash256> {
        self.transaction.identity()
    }
}

impl Hashable for TransactionWithMetaData {
    fn content_hash(&self) -> Option<Hash256> {
        self.transaction.hash()
    }
}
