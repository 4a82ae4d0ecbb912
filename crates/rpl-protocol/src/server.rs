//! Server status: fee schedule and node information.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use rpl_types::serde_helpers::{opt_u32_lenient, u32_lenient, u64_lenient};
use rpl_types::Hash256;

use crate::command::Request;
use crate::method::methods;

/// Current transaction cost and queue state.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeeRequest {}

/// Fee levels in drops.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeeDrops {
    #[serde(deserialize_with = "u64_lenient")]
    pub base_fee: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub median_fee: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub minimum_fee: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub open_ledger_fee: u64,
}

/// Fee levels relative to the reference transaction cost.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeeLevels {
    #[serde(deserialize_with = "u64_lenient")]
    pub median_level: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub minimum_level: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub open_ledger_level: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub reference_level: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeeResult {
    #[serde(deserialize_with = "u32_lenient")]
    pub current_ledger_size: u32,
    #[serde(deserialize_with = "u32_lenient")]
    pub current_queue_size: u32,
    pub drops: FeeDrops,
    #[serde(deserialize_with = "u32_lenient")]
    pub expected_ledger_size: u32,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_current_index: Option<u32>,
    pub levels: FeeLevels,
    #[serde(deserialize_with = "u32_lenient")]
    pub max_queue_size: u32,
    #[serde(default)]
    pub status: Option<String>,
}

impl Request for FeeRequest {
    const COMMAND: &'static str = methods::FEE;
    type Result = FeeResult;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ServerInfoRequest {}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LastClose {
    pub converge_time_s: f64,
    pub proposers: u32,
}

/// Time spent in, and transitions into, one server state.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StateAccounting {
    #[serde(deserialize_with = "u64_lenient")]
    pub duration_us: u64,
    #[serde(deserialize_with = "u64_lenient")]
    pub transitions: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidatedLedger {
    pub age: u32,
    pub base_fee_xrp: f64,
    pub hash: Hash256,
    pub reserve_base_xrp: f64,
    pub reserve_inc_xrp: f64,
    pub seq: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServerInfo {
    pub build_version: String,
    /// Ranges such as `"32570-6595042"`, or `"empty"`.
    pub complete_ledgers: String,
    #[serde(default)]
    pub hostid: Option<String>,
    #[serde(default)]
    pub io_latency_ms: u32,
    #[serde(default)]
    pub last_close: Option<LastClose>,
    #[serde(default)]
    pub load_factor: f64,
    #[serde(default)]
    pub pubkey_node: Option<String>,
    pub server_state: String,
    #[serde(default)]
    pub server_state_duration_us: Option<String>,
    #[serde(default)]
    pub state_accounting: BTreeMap<String, StateAccounting>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub uptime: u64,
    #[serde(default)]
    pub validated_ledger: Option<ValidatedLedger>,
    #[serde(default)]
    pub validation_quorum: u32,
    /// Fields not modelled above, such as `reporting` on reporting-mode servers.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerInfo {
    /// `true` when the server is fully synced with the network.
    pub fn is_full(&self) -> bool {
        matches!(self.server_state.as_str(), "full" | "validating" | "proposing")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServerInfoResult {
    pub info: ServerInfo,
    #[serde(default)]
    pub status: Option<String>,
}

impl Request for ServerInfoRequest {
    const COMMAND: &'static str = methods::SERVER_INFO;
    type Result = ServerInfoResult;
}
