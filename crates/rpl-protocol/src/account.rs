//! Account-scoped operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rpl_data::entry::AccountRoot;
use rpl_data::{LedgerEntry, MetaData, TransactionWithMetaData};
use rpl_types::serde_helpers::opt_u32_lenient;
use rpl_types::{Account, Amount, Currency, Hash256, LedgerIndex, RippleTime};

use crate::command::Request;
use crate::method::methods;

/// Page through the transactions that affected an account.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountTxRequest {
    pub account: Account,
    /// `-1` means the earliest ledger available.
    pub ledger_index_min: i64,
    /// `-1` means the most recent validated ledger.
    pub ledger_index_max: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub forward: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Opaque resume point from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl AccountTxRequest {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            ledger_index_min: -1,
            ledger_index_max: -1,
            forward: false,
            limit: None,
            marker: None,
        }
    }

    pub fn page(mut self, limit: u32, marker: Option<Value>) -> Self {
        self.limit = Some(limit);
        self.marker = marker;
        self
    }

    pub fn ledger_range(mut self, min: i64, max: i64) -> Self {
        self.ledger_index_min = min;
        self.ledger_index_max = max;
        self
    }
}

/// One transaction in an `account_tx` page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountTransaction {
    #[serde(default)]
    pub meta: Option<MetaData>,
    pub tx: TransactionWithMetaData,
    #[serde(default)]
    pub validated: bool,
}

impl AccountTransaction {
    /// The transaction with its metadata attached.
    pub fn into_applied(self) -> TransactionWithMetaData {
        let mut tx = self.tx;
        if tx.meta.is_none() {
            tx.meta = self.meta;
        }
        tx
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountTxResult {
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub marker: Option<Value>,
    #[serde(default)]
    pub transactions: Vec<AccountTransaction>,
}

impl Request for AccountTxRequest {
    const COMMAND: &'static str = methods::ACCOUNT_TX;
    type Result = AccountTxResult;
}

/// Fetch an account's root entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountInfoRequest {
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
}

impl AccountInfoRequest {
    pub fn new(account: Account) -> Self {
        Self { account, ledger_index: None }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountInfoResult {
    /// Decoded through the registry like any other ledger entry.
    pub account_data: LedgerEntry,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_current_index: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_index: Option<u32>,
    #[serde(default)]
    pub validated: bool,
}

impl AccountInfoResult {
    pub fn account_root(&self) -> Option<&AccountRoot> {
        match &self.account_data {
            LedgerEntry::AccountRoot(root) => Some(root),
            _ => None,
        }
    }

    /// The ledger the data was read from, validated or current.
    pub fn ledger_sequence(&self) -> Option<u32> {
        self.ledger_index.or(self.ledger_current_index)
    }
}

impl Request for AccountInfoRequest {
    const COMMAND: &'static str = methods::ACCOUNT_INFO;
    type Result = AccountInfoResult;
}

/// List an account's trust lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountLinesRequest {
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl AccountLinesRequest {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            peer: None,
            limit: None,
            ledger_index: None,
            marker: None,
        }
    }
}

/// A trust line from the perspective of the requesting account.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrustLine {
    /// The counterparty.
    pub account: Account,
    pub balance: String,
    pub currency: Currency,
    pub limit: String,
    pub limit_peer: String,
    #[serde(default)]
    pub quality_in: u32,
    #[serde(default)]
    pub quality_out: u32,
    #[serde(default)]
    pub no_ripple: bool,
    #[serde(default)]
    pub no_ripple_peer: bool,
    #[serde(default)]
    pub authorized: bool,
    #[serde(default)]
    pub peer_authorized: bool,
    #[serde(default)]
    pub freeze: bool,
    #[serde(default)]
    pub freeze_peer: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountLinesResult {
    pub account: Account,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_index: Option<u32>,
    #[serde(default)]
    pub marker: Option<Value>,
    #[serde(default)]
    pub lines: Vec<TrustLine>,
}

impl Request for AccountLinesRequest {
    const COMMAND: &'static str = methods::ACCOUNT_LINES;
    type Result = AccountLinesResult;
}

/// List an account's open offers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccountOffersRequest {
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Value>,
}

impl AccountOffersRequest {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            limit: None,
            ledger_index: None,
            marker: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountOffer {
    #[serde(default)]
    pub flags: u32,
    pub seq: u32,
    pub taker_gets: Amount,
    pub taker_pays: Amount,
    pub quality: String,
    #[serde(default)]
    pub expiration: Option<RippleTime>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AccountOffersResult {
    pub account: Account,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_index: Option<u32>,
    #[serde(default)]
    pub marker: Option<Value>,
    #[serde(default)]
    pub offers: Vec<AccountOffer>,
}

impl Request for AccountOffersRequest {
    const COMMAND: &'static str = methods::ACCOUNT_OFFERS;
    type Result = AccountOffersResult;
}

/// Ask whether `source_account` may deliver funds to `destination_account`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepositAuthorizedRequest {
    pub source_account: Account,
    pub destination_account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Warning {
    pub id: i64,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DepositAuthorizedResult {
    pub deposit_authorized: bool,
    pub source_account: Account,
    pub destination_account: Account,
    #[serde(default)]
    pub ledger_hash: Option<Hash256>,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_index: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_current_index: Option<u32>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl Request for DepositAuthorizedRequest {
    const COMMAND: &'static str = methods::DEPOSIT_AUTHORIZED;
    type Result = DepositAuthorizedResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ResponseFrame;
    use rpl_data::{Record, TransactionType};
    use serde_json::json;

    const ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const PEER: &str = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B";

    fn account() -> Account {
        Account::parse(ACCOUNT).unwrap()
    }

    fn decode<T: serde::de::DeserializeOwned>(result: Value) -> T {
        ResponseFrame {
            id: Some(crate::CommandId(1)),
            kind: Some("response".into()),
            status: Some("success".into()),
            result: Some(result),
            ..Default::default()
        }
        .into_outcome::<T>("test")
        .unwrap()
        .result
    }

    #[test]
    fn account_tx_request_shape() {
        let req = AccountTxRequest::new(account()).page(20, Some(json!({ "ledger": 5, "seq": 1 })));
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "account": ACCOUNT,
                "ledger_index_min": -1,
                "ledger_index_max": -1,
                "limit": 20,
                "marker": { "ledger": 5, "seq": 1 }
            })
        );
    }

    #[test]
    fn account_tx_result_decodes_typed_transactions() {
        let result: AccountTxResult = decode(json!({
            "account": ACCOUNT,
            "marker": { "ledger": 7, "seq": 0 },
            "transactions": [{
                "meta": {
                    "AffectedNodes": [],
                    "TransactionIndex": 3,
                    "TransactionResult": "tesSUCCESS"
                },
                "tx": {
                    "TransactionType": "OfferCreate",
                    "Account": ACCOUNT,
                    "Fee": "10",
                    "Sequence": 1681497,
                    "TakerGets": "1000",
                    "TakerPays": { "currency": "USD", "issuer": PEER, "value": "1" },
                    "date": 456502480,
                    "hash": "2D0CE11154B655A2BFE7F3F857AAC344622EC7DAB11B1EBD920DCDB00E8646FF",
                    "ledger_index": 7200000
                },
                "validated": true
            }]
        }));
        assert_eq!(result.transactions.len(), 1);
        let entry = result.transactions[0].clone();
        assert!(entry.validated);
        let applied = entry.into_applied();
        assert_eq!(applied.transaction.code(), TransactionType::OfferCreate);
        assert_eq!(applied.date.unwrap().to_string(), "2014-Jun-19 14:14:40 UTC");
        assert_eq!(applied.meta.unwrap().transaction_index, 3);
    }

    #[test]
    fn account_info_decodes_account_root() {
        let result: AccountInfoResult = decode(json!({
            "account_data": {
                "Account": ACCOUNT,
                "Balance": "27389517749",
                "Flags": 0,
                "LedgerEntryType": "AccountRoot",
                "OwnerCount": 18,
                "PreviousTxnID": "B6B410172C0B65575D89E464AF5B99937CC568822929ABF87DA75CBD11911932",
                "PreviousTxnLgrSeq": 6592159,
                "Sequence": 1400,
                "index": "13F1A95D7AAB7108D5CE7EEAF504B2894B8C674E6D68499076441C4837282BF8"
            },
            "ledger_current_index": 6595280,
            "validated": false
        }));
        assert_eq!(result.ledger_sequence(), Some(6595280));
        assert_eq!(result.account_data.type_name(), "AccountRoot");
        let root = result.account_root().unwrap();
        assert_eq!(root.sequence, Some(1400));
        assert_eq!(root.owner_count, Some(18));
        assert_eq!(root.balance, Some(Amount::Drops(27_389_517_749)));
    }

    #[test]
    fn account_info_with_unknown_entry_type_fails() {
        let frame = ResponseFrame {
            id: Some(crate::CommandId(1)),
            result: Some(json!({ "account_data": { "LedgerEntryType": "Mystery" } })),
            ..Default::default()
        };
        let err = frame.into_outcome::<AccountInfoResult>(methods::ACCOUNT_INFO).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.message.contains("Mystery"));
    }

    #[test]
    fn account_lines_decode() {
        let result: AccountLinesResult = decode(json!({
            "account": ACCOUNT,
            "ledger_index": "6595280",
            "lines": [{
                "account": PEER,
                "balance": "0.5",
                "currency": "USD",
                "limit": "100",
                "limit_peer": "0",
                "quality_in": 0,
                "quality_out": 0,
                "no_ripple": true
            }]
        }));
        assert_eq!(result.ledger_index, Some(6595280));
        assert_eq!(result.lines[0].currency.as_str(), "USD");
        assert!(result.lines[0].no_ripple);
        assert!(!result.lines[0].freeze);
        assert!(result.marker.is_none());
    }

    #[test]
    fn account_offers_decode() {
        let result: AccountOffersResult = decode(json!({
            "account": ACCOUNT,
            "offers": [{
                "flags": 0,
                "seq": 12,
                "taker_gets": "1000000",
                "taker_pays": { "currency": "USD", "issuer": PEER, "value": "1.1" },
                "quality": "0.0000011"
            }]
        }));
        assert_eq!(result.offers[0].seq, 12);
        assert_eq!(result.offers[0].taker_gets, Amount::Drops(1_000_000));
        assert!(result.offers[0].expiration.is_none());
    }

    #[test]
    fn deposit_authorized_round() {
        let req = DepositAuthorizedRequest {
            source_account: account(),
            destination_account: Account::parse(PEER).unwrap(),
            ledger_index: Some(LedgerIndex::Validated),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "source_account": ACCOUNT,
                "destination_account": PEER,
                "ledger_index": "validated"
            })
        );

        let result: DepositAuthorizedResult = decode(json!({
            "deposit_authorized": true,
            "destination_account": PEER,
            "ledger_hash": "BD03A10653ED9D77DCA859B7A735BF0580088A8F287FA2C5403E0A19C58EF322",
            "ledger_index": 8,
            "source_account": ACCOUNT,
            "validated": true
        }));
        assert!(result.deposit_authorized);
        assert!(result.validated);
        assert!(result.warnings.is_empty());
    }
}
