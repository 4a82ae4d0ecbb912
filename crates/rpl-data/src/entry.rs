//! Ledger state records.

use serde::{Deserialize, Serialize};

use rpl_types::{Account, Amount, Hash256, RippleTime};

use crate::record::Family;

/// Fields every ledger entry carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryBase {
    #[serde(rename = "LedgerEntryType")]
    pub ledger_entry_type: LedgerEntryType,
    #[serde(rename = "Flags", default)]
    pub flags: u32,
    /// The entry's key in the state tree.
    #[serde(rename = "index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Hash256>,
    #[serde(rename = "PreviousTxnID", default, skip_serializing_if = "Option::is_none")]
    pub previous_txn_id: Option<Hash256>,
    #[serde(rename = "PreviousTxnLgrSeq", default, skip_serializing_if = "Option::is_none")]
    pub previous_txn_lgr_seq: Option<u32>,
}

impl EntryBase {
    pub fn tagged(code: LedgerEntryType) -> Self {
        Self {
            ledger_entry_type: code,
            flags: 0,
            index: None,
            previous_txn_id: None,
            previous_txn_lgr_seq: None,
        }
    }

    pub fn tag(&self) -> LedgerEntryType {
        self.ledger_entry_type
    }

    pub fn identity(&self) -> Option<Hash256> {
        self.index
    }
}

record_family! {
    /// A ledger state record of any type.
    pub enum LedgerEntry: LedgerEntryType in Family::LedgerEntry, via ledger_entries,
        tag "LedgerEntryType", base EntryBase {
        NfTokenOffer = 0x37 => "NFTokenOffer" {
            owner: Account => "Owner",
            amount: Amount => "Amount",
            nftoken_id: Hash256 => "NFTokenID",
            destination: Account => "Destination",
        }
        Check = 0x43 => "Check" {
            account: Account => "Account",
            destination: Account => "Destination",
            send_max: Amount => "SendMax",
            sequence: u32 => "Sequence",
            expiration: RippleTime => "Expiration",
        }
        Did = 0x49 => "DID" {
            account: Account => "Account",
            uri: String => "URI",
        }
        NegativeUnl = 0x4e => "NegativeUNL" {}
        NfTokenPage = 0x50 => "NFTokenPage" {}
        SignerList = 0x53 => "SignerList" {
            signer_quorum: u32 => "SignerQuorum",
        }
        Ticket = 0x54 => "Ticket" {
            account: Account => "Account",
            ticket_sequence: u32 => "TicketSequence",
        }
        /// An account's native balance and settings.
        AccountRoot = 0x61 => "AccountRoot" {
            account: Account => "Account",
            balance: Amount => "Balance",
            sequence: u32 => "Sequence",
            owner_count: u32 => "OwnerCount",
            transfer_rate: u32 => "TransferRate",
            regular_key: Account => "RegularKey",
            domain: String => "Domain",
            ticket_count: u32 => "TicketCount",
        }
        /// One page of an owner or order book directory.
        DirectoryNode = 0x64 => "DirectoryNode" {
            owner: Account => "Owner",
            root_index: Hash256 => "RootIndex",
            indexes: Vec<Hash256> => "Indexes",
        }
        Amendments = 0x66 => "Amendments" {
            amendments: Vec<Hash256> => "Amendments",
        }
        LedgerHashes = 0x68 => "LedgerHashes" {
            hashes: Vec<Hash256> => "Hashes",
            last_ledger_sequence: u32 => "LastLedgerSequence",
        }
        Bridge = 0x69 => "Bridge" {
            account: Account => "Account",
        }
        /// A standing order in an order book.
        Offer = 0x6f => "Offer" {
            account: Account => "Account",
            sequence: u32 => "Sequence",
            taker_pays: Amount => "TakerPays",
            taker_gets: Amount => "TakerGets",
            book_directory: Hash256 => "BookDirectory",
            expiration: RippleTime => "Expiration",
        }
        DepositPreauth = 0x70 => "DepositPreauth" {
            account: Account => "Account",
            authorize: Account => "Authorize",
        }
        XChainOwnedClaimId = 0x71 => "XChainOwnedClaimID" {}
        /// Trust line state between two accounts.
        RippleState = 0x72 => "RippleState" {
            balance: Amount => "Balance",
            low_limit: Amount => "LowLimit",
            high_limit: Amount => "HighLimit",
        }
        FeeSettings = 0x73 => "FeeSettings" {
            base_fee: String => "BaseFee",
            reference_fee_units: u32 => "ReferenceFeeUnits",
            reserve_base: u32 => "ReserveBase",
            reserve_increment: u32 => "ReserveIncrement",
        }
        XChainOwnedCreateAccountClaimId = 0x74 => "XChainOwnedCreateAccountClaimID" {}
        /// Native funds held until a time or condition.
        Escrow = 0x75 => "Escrow" {
            account: Account => "Account",
            destination: Account => "Destination",
            amount: Amount => "Amount",
            finish_after: RippleTime => "FinishAfter",
            cancel_after: RippleTime => "CancelAfter",
        }
        PayChannel = 0x78 => "PayChannel" {
            account: Account => "Account",
            destination: Account => "Destination",
            amount: Amount => "Amount",
            balance: Amount => "Balance",
            settle_delay: u32 => "SettleDelay",
        }
        Amm = 0x79 => "AMM" {
            account: Account => "Account",
            lp_token_balance: Amount => "LPTokenBalance",
            trading_fee: u16 => "TradingFee",
        }
        Oracle = 0x80 => "Oracle" {
            owner: Account => "Owner",
            provider: String => "Provider",
        }
        Credential = 0x89 => "Credential" {
            subject: Account => "Subject",
            issuer: Account => "Issuer",
            credential_type: String => "CredentialType",
        }
    }
}
