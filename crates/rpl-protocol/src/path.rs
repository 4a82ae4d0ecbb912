//! Payment path finding and order books.

use serde::{Deserialize, Serialize};

use rpl_data::entry::Offer;
use rpl_data::LedgerEntry;
use rpl_types::serde_helpers::opt_u32_lenient;
use rpl_types::{Account, Amount, Asset, Currency, LedgerIndex};

use crate::command::Request;
use crate::method::methods;

/// One hop of a payment path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Account>,
}

pub type Path = Vec<PathStep>;

/// Find ways for `source_account` to deliver `destination_amount`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RipplePathFindRequest {
    pub source_account: Account,
    pub destination_account: Account,
    pub destination_amount: Amount,
    /// Restrict the search to these source assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_currencies: Option<Vec<Asset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
}

impl RipplePathFindRequest {
    pub fn new(source: Account, destination: Account, amount: Amount) -> Self {
        Self {
            source_account: source,
            destination_account: destination,
            destination_amount: amount,
            source_currencies: None,
            ledger_index: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathAlternative {
    /// What the source would spend along these paths.
    pub source_amount: Amount,
    #[serde(default)]
    pub paths_computed: Vec<Path>,
    #[serde(default)]
    pub paths_canonical: Vec<Path>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RipplePathFindResult {
    #[serde(default)]
    pub alternatives: Vec<PathAlternative>,
    pub destination_account: Account,
    #[serde(default)]
    pub destination_currencies: Vec<Currency>,
}

impl Request for RipplePathFindRequest {
    const COMMAND: &'static str = methods::RIPPLE_PATH_FIND;
    type Result = RipplePathFindResult;
}

/// Read one side of an order book.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookOffersRequest {
    pub taker_pays: Asset,
    pub taker_gets: Asset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
}

impl BookOffersRequest {
    pub fn new(taker_pays: Asset, taker_gets: Asset) -> Self {
        Self {
            taker_pays,
            taker_gets,
            taker: None,
            limit: None,
            ledger_index: None,
        }
    }
}

/// An offer entry plus the funding annotations the book adds to it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookOffer {
    #[serde(default)]
    pub owner_funds: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub taker_gets_funded: Option<Amount>,
    #[serde(default)]
    pub taker_pays_funded: Option<Amount>,
    #[serde(flatten)]
    pub entry: LedgerEntry,
}

impl BookOffer {
    pub fn offer(&self) -> Option<&Offer> {
        match &self.entry {
            LedgerEntry::Offer(offer) => Some(offer),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookOffersResult {
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_index: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub ledger_current_index: Option<u32>,
    #[serde(default)]
    pub offers: Vec<BookOffer>,
}

impl Request for BookOffersRequest {
    const COMMAND: &'static str = methods::BOOK_OFFERS;
    type Result = BookOffersResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpl_data::{LedgerEntryType, Record};
    use serde_json::json;

    const SOURCE: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const GATEWAY: &str = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B";

    fn usd() -> Asset {
        Asset::issued(Currency::parse("USD").unwrap(), Account::parse(GATEWAY).unwrap())
    }

    #[test]
    fn path_find_request_shape() {
        let mut req = RipplePathFindRequest::new(
            Account::parse(SOURCE).unwrap(),
            Account::parse(GATEWAY).unwrap(),
            Amount::Drops(25),
        );
        req.source_currencies = Some(vec![Asset::native(), usd()]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "source_account": SOURCE,
                "destination_account": GATEWAY,
                "destination_amount": "25",
                "source_currencies": [
                    { "currency": "XRP" },
                    { "currency": "USD", "issuer": GATEWAY }
                ]
            })
        );
    }

    #[test]
    fn path_find_result() {
        let result: RipplePathFindResult = serde_json::from_value(json!({
            "alternatives": [{
                "paths_canonical": [],
                "paths_computed": [[
                    { "currency": "USD", "issuer": GATEWAY, "type": 48, "type_hex": "0000000000000030" },
                    { "account": GATEWAY, "type": 1, "type_hex": "0000000000000001" }
                ]],
                "source_amount": { "currency": "USD", "issuer": SOURCE, "value": "0.25" }
            }],
            "destination_account": GATEWAY,
            "destination_currencies": ["USD", "XRP"]
        }))
        .unwrap();
        let alt = &result.alternatives[0];
        assert_eq!(alt.paths_computed[0].len(), 2);
        assert_eq!(alt.paths_computed[0][1].account.as_ref().unwrap().as_str(), GATEWAY);
        assert!(alt.paths_canonical.is_empty());
        assert_eq!(result.destination_currencies.len(), 2);
    }

    #[test]
    fn book_offers_request_shape() {
        let mut req = BookOffersRequest::new(usd(), Asset::native());
        req.limit = Some(10);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "taker_pays": { "currency": "USD", "issuer": GATEWAY },
                "taker_gets": { "currency": "XRP" },
                "limit": 10
            })
        );
    }

    #[test]
    fn book_offers_are_typed_offers() {
        let result: BookOffersResult = serde_json::from_value(json!({
            "ledger_current_index": 8696243,
            "offers": [{
                "Account": SOURCE,
                "BookDirectory": "7E5F614417C2D0A7CEFEB73C4AA773ED5B078DE2B5771F6D55055E4C405218EB",
                "BookNode": "0000000000000000",
                "Flags": 0,
                "LedgerEntryType": "Offer",
                "OwnerNode": "0000000000000000",
                "PreviousTxnID": "F0AB71E777B2DA54B86231E19B82554EF1F8211F92ECA473121C655BFC5329BF",
                "PreviousTxnLgrSeq": 14524914,
                "Sequence": 434,
                "TakerGets": "5000000",
                "TakerPays": { "currency": "USD", "issuer": GATEWAY, "value": "9" },
                "index": "AB7AF3AB3DD4E00451CC4A2C8A1C6E0D0D9F2A6E0B7E31A6C2B3E68C9D4E0F11",
                "owner_funds": "1134908386",
                "quality": "0.0000018"
            }]
        }))
        .unwrap();
        assert_eq!(result.ledger_current_index, Some(8696243));
        let book = &result.offers[0];
        assert_eq!(book.entry.code(), LedgerEntryType::Offer);
        assert_eq!(book.owner_funds.as_deref(), Some("1134908386"));
        assert!(!book.entry.extra().contains_key("quality"));
        let offer = book.offer().unwrap();
        assert_eq!(offer.sequence, Some(434));
        assert_eq!(offer.taker_gets, Some(Amount::Drops(5_000_000)));
        assert_eq!(book.entry.identity().unwrap().to_hex().len(), 64);
    }
}
