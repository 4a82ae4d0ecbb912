//! Typed shortcuts over [`Dispatcher::call`] for the common operations.

use rpl_protocol::{
    AccountInfoRequest, AccountInfoResult, DepositAuthorizedRequest, DepositAuthorizedResult,
    FeeRequest, FeeResult, LedgerDataRequest, LedgerDataResult, LedgerRequest, LedgerResult,
    RipplePathFindRequest, RipplePathFindResult, ServerInfoRequest, ServerInfoResult,
    SubmitRequest, SubmitResult, TxRequest, TxResult,
};
use rpl_types::{Account, Amount, Hash256, LedgerIndex};

use crate::dispatcher::Dispatcher;
use crate::error::ClientResult;
use crate::transport::Transport;

impl<T: Transport> Dispatcher<T> {
    /// Fetch a ledger header; with `expand` the transactions come back as
    /// full records.
    pub async fn ledger(&self, index: LedgerIndex, expand: bool) -> ClientResult<LedgerResult> {
        let request = if expand {
            LedgerRequest::with_transactions(index)
        } else {
            LedgerRequest::header(index)
        };
        self.call(request).await
    }

    /// Fetch a ledger together with its full state as typed entries.
    pub async fn ledger_state(&self, index: LedgerIndex) -> ClientResult<LedgerResult> {
        self.call(LedgerRequest::with_state(index)).await
    }

    pub async fn tx(&self, hash: Hash256) -> ClientResult<TxResult> {
        self.call(TxRequest { transaction: hash }).await
    }

    /// Submit an already signed, serialized transaction.
    pub async fn submit(&self, blob: &[u8]) -> ClientResult<SubmitResult> {
        self.call(SubmitRequest::from_bytes(blob)).await
    }

    pub async fn account_info(&self, account: Account) -> ClientResult<AccountInfoResult> {
        self.call(AccountInfoRequest::new(account)).await
    }

    pub async fn fee(&self) -> ClientResult<FeeResult> {
        self.call(FeeRequest::default()).await
    }

    pub async fn server_info(&self) -> ClientResult<ServerInfoResult> {
        self.call(ServerInfoRequest::default()).await
    }

    pub async fn deposit_authorized(
        &self,
        source: Account,
        destination: Account,
    ) -> ClientResult<DepositAuthorizedResult> {
        self.call(DepositAuthorizedRequest {
            source_account: source,
            destination_account: destination,
            ledger_index: None,
        })
        .await
    }

    pub async fn ripple_path_find(
        &self,
        source: Account,
        destination: Account,
        amount: Amount,
    ) -> ClientResult<RipplePathFindResult> {
        self.call(RipplePathFindRequest::new(source, destination, amount)).await
    }

    /// One page of ledger state. Pass the previous page's marker to continue.
    pub async fn ledger_data(
        &self,
        ledger: LedgerIndex,
        marker: Option<Hash256>,
    ) -> ClientResult<LedgerDataResult> {
        self.call(LedgerDataRequest::new(ledger, marker)).await
    }
}
