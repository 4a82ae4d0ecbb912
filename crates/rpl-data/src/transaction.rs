//! Transactions.

use serde::{Deserialize, Serialize};

use rpl_types::{Account, Amount, Asset, Hash256, RippleTime};

use crate::record::Family;

/// Fields common to every transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxBase {
    #[serde(rename = "TransactionType")]
    pub transaction_type: TransactionType,
    #[serde(rename = "Account", default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(rename = "Fee", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Amount>,
    #[serde(rename = "Sequence", default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    #[serde(rename = "Flags", default)]
    pub flags: u32,
    #[serde(rename = "SigningPubKey", default, skip_serializing_if = "Option::is_none")]
    pub signing_pub_key: Option<String>,
    #[serde(rename = "TxnSignature", default, skip_serializing_if = "Option::is_none")]
    pub txn_signature: Option<String>,
    #[serde(rename = "LastLedgerSequence", default, skip_serializing_if = "Option::is_none")]
    pub last_ledger_sequence: Option<u32>,
    #[serde(rename = "SourceTag", default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(rename = "TicketSequence", default, skip_serializing_if = "Option::is_none")]
    pub ticket_sequence: Option<u32>,
    #[serde(rename = "Memos", default, skip_serializing_if = "Option::is_none")]
    pub memos: Option<serde_json::Value>,
    /// Transaction hash, present once the transaction has been applied or
    /// looked up.
    #[serde(rename = "hash", default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<Hash256>,
}

impl TxBase {
    pub fn tagged(code: TransactionType) -> Self {
        Self {
            transaction_type: code,
            account: None,
            fee: None,
            sequence: None,
            flags: 0,
            signing_pub_key: None,
            txn_signature: None,
            last_ledger_sequence: None,
            source_tag: None,
            ticket_sequence: None,
            memos: None,
            hash: None,
        }
    }

    pub fn tag(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn identity(&self) -> Option<Hash256> {
        self.hash
    }
}

record_family! {
    /// A transaction of any type.
    pub enum Transaction: TransactionType in Family::Transaction, via transactions,
        tag "TransactionType", base TxBase {
        /// Moves value from the sending account to a destination.
        Payment = 0 => "Payment" {
            destination: Account => "Destination",
            amount: Amount => "Amount",
            send_max: Amount => "SendMax",
            deliver_min: Amount => "DeliverMin",
            destination_tag: u32 => "DestinationTag",
            invoice_id: Hash256 => "InvoiceID",
            paths: serde_json::Value => "Paths",
        }
        EscrowCreate = 1 => "EscrowCreate" {
            destination: Account => "Destination",
            amount: Amount => "Amount",
            finish_after: RippleTime => "FinishAfter",
            cancel_after: RippleTime => "CancelAfter",
            condition: String => "Condition",
        }
        EscrowFinish = 2 => "EscrowFinish" {
            owner: Account => "Owner",
            offer_sequence: u32 => "OfferSequence",
        }
        AccountSet = 3 => "AccountSet" {
            set_flag: u32 => "SetFlag",
            clear_flag: u32 => "ClearFlag",
            domain: String => "Domain",
            email_hash: String => "EmailHash",
            transfer_rate: u32 => "TransferRate",
        }
        EscrowCancel = 4 => "EscrowCancel" {
            owner: Account => "Owner",
            offer_sequence: u32 => "OfferSequence",
        }
        SetRegularKey = 5 => "SetRegularKey" {
            regular_key: Account => "RegularKey",
        }
        /// Places an order in an order book.
        OfferCreate = 7 => "OfferCreate" {
            taker_pays: Amount => "TakerPays",
            taker_gets: Amount => "TakerGets",
            expiration: RippleTime => "Expiration",
            offer_sequence: u32 => "OfferSequence",
        }
        OfferCancel = 8 => "OfferCancel" {
            offer_sequence: u32 => "OfferSequence",
        }
        TicketCreate = 10 => "TicketCreate" {
            ticket_count: u32 => "TicketCount",
        }
        SignerListSet = 12 => "SignerListSet" {
            signer_quorum: u32 => "SignerQuorum",
        }
        PaymentChannelCreate = 13 => "PaymentChannelCreate" {
            destination: Account => "Destination",
            amount: Amount => "Amount",
            settle_delay: u32 => "SettleDelay",
            public_key: String => "PublicKey",
        }
        PaymentChannelFund = 14 => "PaymentChannelFund" {
            channel: Hash256 => "Channel",
            amount: Amount => "Amount",
        }
        PaymentChannelClaim = 15 => "PaymentChannelClaim" {
            channel: Hash256 => "Channel",
            balance: Amount => "Balance",
            amount: Amount => "Amount",
        }
        CheckCreate = 16 => "CheckCreate" {
            destination: Account => "Destination",
            send_max: Amount => "SendMax",
            expiration: RippleTime => "Expiration",
        }
        CheckCash = 17 => "CheckCash" {
            check_id: Hash256 => "CheckID",
            amount: Amount => "Amount",
            deliver_min: Amount => "DeliverMin",
        }
        CheckCancel = 18 => "CheckCancel" {
            check_id: Hash256 => "CheckID",
        }
        DepositPreauth = 19 => "DepositPreauth" {
            authorize: Account => "Authorize",
            unauthorize: Account => "Unauthorize",
        }
        /// Creates or modifies a trust line.
        TrustSet = 20 => "TrustSet" {
            limit_amount: Amount => "LimitAmount",
            quality_in: u32 => "QualityIn",
            quality_out: u32 => "QualityOut",
        }
        AccountDelete = 21 => "AccountDelete" {
            destination: Account => "Destination",
            destination_tag: u32 => "DestinationTag",
        }
        NfTokenMint = 25 => "NFTokenMint" {
            nftoken_taxon: u32 => "NFTokenTaxon",
            transfer_fee: u16 => "TransferFee",
            uri: String => "URI",
        }
        NfTokenBurn = 26 => "NFTokenBurn" {
            nftoken_id: Hash256 => "NFTokenID",
        }
        NfTokenCreateOffer = 27 => "NFTokenCreateOffer" {
            nftoken_id: Hash256 => "NFTokenID",
            amount: Amount => "Amount",
            owner: Account => "Owner",
            destination: Account => "Destination",
        }
        NfTokenCancelOffer = 28 => "NFTokenCancelOffer" {
            nftoken_offers: Vec<Hash256> => "NFTokenOffers",
        }
        NfTokenAcceptOffer = 29 => "NFTokenAcceptOffer" {
            nftoken_sell_offer: Hash256 => "NFTokenSellOffer",
            nftoken_buy_offer: Hash256 => "NFTokenBuyOffer",
            nftoken_broker_fee: Amount => "NFTokenBrokerFee",
        }
        Clawback = 30 => "Clawback" {
            amount: Amount => "Amount",
        }
        NfTokenModify = 31 => "NFTokenModify" {
            nftoken_id: Hash256 => "NFTokenID",
            owner: Account => "Owner",
            uri: String => "URI",
        }
        AmmCreate = 35 => "AMMCreate" {
            amount: Amount => "Amount",
            amount2: Amount => "Amount2",
            trading_fee: u16 => "TradingFee",
        }
        AmmDeposit = 36 => "AMMDeposit" {
            asset: Asset => "Asset",
            asset2: Asset => "Asset2",
            amount: Amount => "Amount",
            amount2: Amount => "Amount2",
            lp_token_out: Amount => "LPTokenOut",
        }
        AmmWithdraw = 37 => "AMMWithdraw" {
            asset: Asset => "Asset",
            asset2: Asset => "Asset2",
            amount: Amount => "Amount",
            lp_token_in: Amount => "LPTokenIn",
        }
        AmmVote = 38 => "AMMVote" {
            asset: Asset => "Asset",
            asset2: Asset => "Asset2",
            trading_fee: u16 => "TradingFee",
        }
        AmmBid = 39 => "AMMBid" {
            asset: Asset => "Asset",
            asset2: Asset => "Asset2",
            bid_min: Amount => "BidMin",
            bid_max: Amount => "BidMax",
        }
        AmmDelete = 40 => "AMMDelete" {
            asset: Asset => "Asset",
            asset2: Asset => "Asset2",
        }
        DidSet = 41 => "DIDSet" {
            uri: String => "URI",
            did_document: String => "DIDDocument",
            data: String => "Data",
        }
        DidDelete = 42 => "DIDDelete" {}
        OracleSet = 43 => "OracleSet" {
            oracle_document_id: u32 => "OracleDocumentID",
            provider: String => "Provider",
            last_update_time: u32 => "LastUpdateTime",
        }
        OracleDelete = 44 => "OracleDelete" {
            oracle_document_id: u32 => "OracleDocumentID",
        }
        XChainAccountCreateCommit = 45 => "XChainAccountCreateCommit" {
            destination: Account => "Destination",
            amount: Amount => "Amount",
        }
        XChainAddAccountCreateAttestation = 46 => "XChainAddAccountCreateAttestation" {}
        XChainAddClaimAttestation = 47 => "XChainAddClaimAttestation" {}
        XChainClaim = 48 => "XChainClaim" {
            destination: Account => "Destination",
            amount: Amount => "Amount",
        }
        XChainCommit = 49 => "XChainCommit" {
            amount: Amount => "Amount",
            xchain_claim_id: String => "XChainClaimID",
        }
        XChainCreateBridge = 50 => "XChainCreateBridge" {}
        XChainCreateClaimId = 51 => "XChainCreateClaimID" {}
        XChainModifyBridge = 52 => "XChainModifyBridge" {}
        CredentialCreate = 53 => "CredentialCreate" {
            subject: Account => "Subject",
            credential_type: String => "CredentialType",
            expiration: RippleTime => "Expiration",
            uri: String => "URI",
        }
        /// Pseudo-transaction recording an amendment vote outcome.
        EnableAmendment = 100 => "EnableAmendment" {
            amendment: Hash256 => "Amendment",
            ledger_sequence: u32 => "LedgerSequence",
        }
        SetFee = 101 => "SetFee" {
            base_fee: String => "BaseFee",
            reference_fee_units: u32 => "ReferenceFeeUnits",
            reserve_base: u32 => "ReserveBase",
            reserve_increment: u32 => "ReserveIncrement",
        }
        UnlModify = 102 => "UNLModify" {
            unl_modify_disabling: u8 => "UNLModifyDisabling",
            ledger_sequence: u32 => "LedgerSequence",
            unl_modify_validator: String => "UNLModifyValidator",
        }
    }
}

impl Transaction {
    /// The sending account, if set.
    pub fn account(&self) -> Option<&Account> {
        self.base().account.as_ref()
    }

    pub fn fee(&self) -> Option<&Amount> {
        self.base().fee.as_ref()
    }

    pub fn sequence(&self) -> Option<u32> {
        self.base().sequence
    }

    pub fn hash(&self) -> Option<Hash256> {
        self.base().hash
    }
}
