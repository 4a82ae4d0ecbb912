/// Wire names of the supported operations.
pub mod methods {
    pub const ACCOUNT_TX: &str = "account_tx";
    pub const TX: &str = "tx";
    pub const SUBMIT: &str = "submit";
    pub const LEDGER: &str = "ledger";
    pub const LEDGER_HEADER: &str = "ledger_header";
    pub const LEDGER_DATA: &str = "ledger_data";
    pub const RIPPLE_PATH_FIND: &str = "ripple_path_find";
    pub const ACCOUNT_INFO: &str = "account_info";
    pub const ACCOUNT_LINES: &str = "account_lines";
    pub const ACCOUNT_OFFERS: &str = "account_offers";
    pub const BOOK_OFFERS: &str = "book_offers";
    pub const FEE: &str = "fee";
    pub const SERVER_INFO: &str = "server_info";
    pub const DEPOSIT_AUTHORIZED: &str = "deposit_authorized";

    /// Every operation, in declaration order.
    pub const ALL: &[&str] = &[
        ACCOUNT_TX,
        TX,
        SUBMIT,
        LEDGER,
        LEDGER_HEADER,
        LEDGER_DATA,
        RIPPLE_PATH_FIND,
        ACCOUNT_INFO,
        ACCOUNT_LINES,
        ACCOUNT_OFFERS,
        BOOK_OFFERS,
        FEE,
        SERVER_INFO,
        DEPOSIT_AUTHORIZED,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        assert_eq!(methods::LEDGER_DATA, "ledger_data");
        assert_eq!(methods::DEPOSIT_AUTHORIZED, "deposit_authorized");
        assert_eq!(methods::ALL.len(), 14);
    }

    #[test]
    fn method_names_are_distinct() {
        let mut names = methods::ALL.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), methods::ALL.len());
    }
}
