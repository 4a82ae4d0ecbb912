//! Single-transaction lookup and submission.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rpl_data::{DataResult, Transaction, TransactionResult, TransactionWithMetaData};
use rpl_types::Hash256;

use crate::command::Request;
use crate::method::methods;

/// Look up one transaction by hash.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TxRequest {
    pub transaction: Hash256,
}

/// A looked-up transaction. `validated` is absent from provisional replies
/// and then reads as `false`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxResult {
    #[serde(default)]
    pub validated: bool,
    #[serde(flatten)]
    pub transaction: TransactionWithMetaData,
}

impl Request for TxRequest {
    const COMMAND: &'static str = methods::TX;
    type Result = TxResult;
}

/// Submit a signed transaction blob.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmitRequest {
    /// Upper-case hex of the signed, serialized transaction.
    pub tx_blob: String,
}

impl SubmitRequest {
    pub fn from_bytes(blob: &[u8]) -> Self {
        Self {
            tx_blob: hex::encode_upper(blob),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubmitResult {
    pub engine_result: TransactionResult,
    pub engine_result_code: i32,
    #[serde(default)]
    pub engine_result_message: String,
    #[serde(default)]
    pub tx_blob: String,
    /// The submitted transaction as the server parsed it.
    #[serde(default)]
    pub tx_json: Value,
    #[serde(default)]
    pub accepted: Option<bool>,
}

impl SubmitResult {
    /// Decode `tx_json` through the registry.
    pub fn transaction(&self) -> DataResult<Transaction> {
        match &self.tx_json {
            Value::Object(fields) => Transaction::from_fields(fields.clone()),
            _ => Transaction::from_fields(serde_json::Map::new()),
        }
    }
}

impl Request for SubmitRequest {
    const COMMAND: &'static str = methods::SUBMIT;
    type Result = SubmitResult;
}
