use crate::record::Family;

code_space! {
    /// Kinds of object held in a node store. Only their names matter to the
    /// client: hashing code treats them as known type names.
    pub enum NodeType in Family::Node, via nodes {
        Ledger = 1 => "Ledger",
        Transaction = 2 => "Transaction",
        AccountNode = 3 => "AccountNode",
        TransactionNode = 4 => "TransactionNode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_codes() {
        assert_eq!(NodeType::AccountNode.name(), "AccountNode");
        assert_eq!(NodeType::TransactionNode.code(), 4);
        assert_eq!(NodeType::from_name("Ledger").unwrap(), NodeType::Ledger);
        assert_eq!(NodeType::Transaction.to_string(), "Transaction");
    }

    #[test]
    fn serde_uses_names() {
        assert_eq!(serde_json::to_string(&NodeType::Ledger).unwrap(), "\"Ledger\"");
        let parsed: NodeType = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, NodeType::AccountNode);
    }
}
