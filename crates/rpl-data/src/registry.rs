//! The type registry: bidirectional code ↔ name mappings for each code space,
//! record constructors, and the list of every known type name.
//!
//! The mappings are built once, on first use, from the declarative tables in
//! [`crate::entry`], [`crate::transaction`] and [`crate::node`], and are
//! immutable afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::entry::{LedgerEntry, LedgerEntryType};
use crate::error::{DataError, DataResult};
use crate::node::NodeType;
use crate::record::Family;
use crate::transaction::{Transaction, TransactionType};

/// A member of a closed code space.
pub trait TypeCode: Copy + Eq + Hash + Ord + Debug + Send + Sync + 'static {
    const FAMILY: Family;

    /// Declarative `(value, code, name)` rows for the whole space.
    const TABLE: &'static [(Self, u16, &'static str)];

    fn code(self) -> u16;

    /// The registry's mapping for this space.
    fn space() -> &'static CodeSpace<Self>;
}

/// Finite bidirectional mapping for one code space.
///
/// Codes and non-blank names are each unique within the space. A row with a
/// blank name is reachable by code only and never listed as a known name.
pub struct CodeSpace<T> {
    family: Family,
    by_code: BTreeMap<u16, T>,
    by_name: HashMap<&'static str, T>,
    names: HashMap<T, &'static str>,
}

impl<T: TypeCode> CodeSpace<T> {
    /// Build from table rows, rejecting duplicate codes and names.
    pub fn build(family: Family, rows: &[(T, u16, &'static str)]) -> DataResult<Self> {
        let mut by_code = BTreeMap::new();
        let mut by_name = HashMap::new();
        let mut names = HashMap::new();

        for &(value, code, name) in rows {
            if by_code.insert(code, value).is_some() || names.insert(value, name).is_some() {
                return Err(DataError::DuplicateCode { family, code });
            }
            if name.trim().is_empty() {
                continue;
            }
            if by_name.insert(name, value).is_some() {
                return Err(DataError::DuplicateName { family, name });
            }
        }

        Ok(Self {
            family,
            by_code,
            by_name,
            names,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Canonical name of `value`; blank for a placeholder row.
    pub fn name_of(&self, value: T) -> &'static str {
        self.names.get(&value).copied().unwrap_or_default()
    }

    pub fn lookup_code(&self, code: u16) -> DataResult<T> {
        self.by_code
            .get(&code)
            .copied()
            .ok_or(DataError::UnknownCode {
                family: self.family,
                code,
            })
    }

    pub fn lookup_name(&self, name: &str) -> DataResult<T> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| DataError::UnknownName {
                family: self.family,
                name: name.to_string(),
            })
    }

    pub fn code_of(&self, name: &str) -> DataResult<u16> {
        self.lookup_name(name).map(TypeCode::code)
    }

    /// Rows in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, T, &'static str)> + '_ {
        self.by_code
            .iter()
            .map(|(&code, &value)| (code, value, self.name_of(value)))
    }

    /// Non-blank names in ascending code order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .map(|(_, _, name)| name)
            .filter(|name| !name.trim().is_empty())
    }
}

/// All code spaces of the protocol plus derived metadata.
pub struct TypeRegistry {
    ledger_entries: CodeSpace<LedgerEntryType>,
    transactions: CodeSpace<TransactionType>,
    nodes: CodeSpace<NodeType>,
    known_names: Vec<&'static str>,
}

impl TypeRegistry {
    fn build() -> DataResult<Self> {
        let ledger_entries = CodeSpace::build(Family::LedgerEntry, LedgerEntryType::TABLE)?;
        let transactions = CodeSpace::build(Family::Transaction, TransactionType::TABLE)?;
        let nodes = CodeSpace::build(Family::Node, NodeType::TABLE)?;

        // Hashing and signing code enumerates these in exactly this order.
        let mut known_names = Vec::with_capacity(ledger_entries.len() + transactions.len() + 2);
        known_names.push(nodes.name_of(NodeType::TransactionNode));
        known_names.extend(transactions.names());
        known_names.push(nodes.name_of(NodeType::AccountNode));
        known_names.extend(ledger_entries.names());

        debug!(
            ledger_entries = ledger_entries.len(),
            transactions = transactions.len(),
            known_names = known_names.len(),
            "type registry built"
        );

        Ok(Self {
            ledger_entries,
            transactions,
            nodes,
            known_names,
        })
    }

    pub fn ledger_entries(&self) -> &CodeSpace<LedgerEntryType> {
        &self.ledger_entries
    }

    pub fn transactions(&self) -> &CodeSpace<TransactionType> {
        &self.transactions
    }

    pub fn nodes(&self) -> &CodeSpace<NodeType> {
        &self.nodes
    }

    /// Every known type name: `TransactionNode`, the transaction names,
    /// `AccountNode`, then the ledger entry names, each group by ascending code.
    pub fn known_type_names(&self) -> &[&'static str] {
        &self.known_names
    }

    pub fn is_known_type_name(&self, name: &str) -> bool {
        self.known_names.contains(&name)
    }

    pub fn ledger_entry(&self, code: LedgerEntryType) -> LedgerEntry {
        LedgerEntry::new(code)
    }

    pub fn ledger_entry_for_code(&self, code: u16) -> DataResult<LedgerEntry> {
        self.ledger_entries.lookup_code(code).map(LedgerEntry::new)
    }

    pub fn ledger_entry_for_name(&self, name: &str) -> DataResult<LedgerEntry> {
        self.ledger_entries.lookup_name(name).map(LedgerEntry::new)
    }

    pub fn transaction(&self, code: TransactionType) -> Transaction {
        Transaction::new(code)
    }

    pub fn transaction_for_code(&self, code: u16) -> DataResult<Transaction> {
        self.transactions.lookup_code(code).map(Transaction::new)
    }

    pub fn transaction_for_name(&self, name: &str) -> DataResult<Transaction> {
        self.transactions.lookup_name(name).map(Transaction::new)
    }
}

static REGISTRY: LazyLock<TypeRegistry> =
    LazyLock::new(|| TypeRegistry::build().expect("built-in type tables are consistent"));

/// The process-wide registry.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Shorthand for [`TypeRegistry::known_type_names`].
pub fn known_type_names() -> &'static [&'static str] {
    registry().known_type_names()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Code(u16),
    Name(String),
}

/// Deserialize a type code from its name (JSON form) or its number.
pub(crate) fn deserialize_code<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: TypeCode,
    D: Deserializer<'de>,
{
    let resolved = match RawCode::deserialize(deserializer)? {
        RawCode::Code(code) => T::space().lookup_code(code),
        RawCode::Name(name) => T::space().lookup_name(&name),
    };
    resolved.map_err(serde::de::Error::custom)
}

/// Resolve the declared type of a JSON record from its tag field.
pub(crate) fn resolve_tag<T: TypeCode>(
    fields: &Map<String, Value>,
    tag: &'static str,
) -> DataResult<T> {
    match fields.get(tag) {
        None => Err(DataError::MissingTag {
            family: T::FAMILY,
            tag,
        }),
        Some(Value::String(name)) => T::space().lookup_name(name),
        Some(Value::Number(n)) => {
            let code = n
                .as_u64()
                .and_then(|n| u16::try_from(n).ok())
                .ok_or_else(|| DataError::InvalidTag {
                    family: T::FAMILY,
                    tag,
                    value: n.to_string(),
                })?;
            T::space().lookup_code(code)
        }
        Some(other) => Err(DataError::InvalidTag {
            family: T::FAMILY,
            tag,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn check_bijection<T: TypeCode>() {
        let space = T::space();
        assert_eq!(space.len(), T::TABLE.len());
        for &(value, code, name) in T::TABLE {
            assert_eq!(value.code(), code);
            assert_eq!(space.name_of(value), name);
            assert_eq!(space.lookup_code(code).unwrap(), value);
            assert_eq!(space.code_of(name).unwrap(), code);
            assert_eq!(space.name_of(space.lookup_name(name).unwrap()), name);
        }
    }

    fn check_unique<T: TypeCode>() {
        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for &(_, code, name) in T::TABLE {
            assert!(codes.insert(code), "duplicate code {code} in {}", T::FAMILY);
            assert!(names.insert(name), "duplicate name {name} in {}", T::FAMILY);
        }
    }

    #[test]
    fn ledger_entry_codes_roundtrip() {
        check_bijection::<LedgerEntryType>();
        check_unique::<LedgerEntryType>();
    }

    #[test]
    fn transaction_codes_roundtrip() {
        check_bijection::<TransactionType>();
        check_unique::<TransactionType>();
    }

    #[test]
    fn node_codes_roundtrip() {
        check_bijection::<NodeType>();
        check_unique::<NodeType>();
    }

    #[test]
    fn table_sizes() {
        assert_eq!(registry().ledger_entries().len(), 23);
        assert_eq!(registry().transactions().len(), 48);
    }

    #[test]
    fn constructed_ledger_entries_are_tagged() {
        for &(value, code, name) in LedgerEntryType::TABLE {
            let entry = registry().ledger_entry_for_code(code).unwrap();
            assert_eq!(entry.code(), value);
            assert_eq!(entry.type_code(), code);
            assert_eq!(entry.type_name(), name);
            assert_eq!(entry.family(), Family::LedgerEntry);
            assert!(entry.identity().is_none());
            assert!(entry.extra().is_empty());
        }
    }

    #[test]
    fn constructed_transactions_are_tagged() {
        for &(value, code, name) in TransactionType::TABLE {
            let tx = registry().transaction_for_code(code).unwrap();
            assert_eq!(tx.code(), value);
            assert_eq!(tx.type_code(), code);
            assert_eq!(registry().transaction_for_name(name).unwrap().code(), value);
            assert_eq!(tx.family(), Family::Transaction);
        }
    }

    #[test]
    fn code_spaces_are_independent() {
        // Same name, different meaning and code in each space.
        let entry = LedgerEntryType::from_name("DepositPreauth").unwrap();
        let tx = TransactionType::from_name("DepositPreauth").unwrap();
        assert_eq!(entry.code(), 0x70);
        assert_eq!(tx.code(), 19);

        // Code 0 is a transaction (Payment) but not a ledger entry.
        assert_eq!(TransactionType::from_code(0).unwrap(), TransactionType::Payment);
        assert!(LedgerEntryType::from_code(0).is_err());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = registry().ledger_entry_for_name("NotAThing").unwrap_err();
        assert_eq!(
            err,
            DataError::UnknownName {
                family: Family::LedgerEntry,
                name: "NotAThing".into()
            }
        );
        assert!(registry().transaction_for_name("").is_err());
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = registry().transaction_for_code(6).unwrap_err();
        assert_eq!(
            err,
            DataError::UnknownCode {
                family: Family::Transaction,
                code: 6
            }
        );
    }

    #[test]
    fn known_names_order() {
        let names = known_type_names();
        assert_eq!(names.len(), 1 + 48 + 1 + 23);
        assert_eq!(names[0], "TransactionNode");
        assert_eq!(names[1], "Payment");
        assert_eq!(names[2], "EscrowCreate");
        assert_eq!(names[48], "UNLModify");
        assert_eq!(names[49], "AccountNode");
        // Ascending ledger entry codes: 0x37 NFTokenOffer is the lowest.
        assert_eq!(names[50], "NFTokenOffer");
        assert_eq!(names[names.len() - 1], "Credential");
        assert!(registry().is_known_type_name("AccountRoot"));
        assert!(!registry().is_known_type_name("Ledger"));
    }

    #[test]
    fn known_names_are_stable() {
        assert_eq!(known_type_names().as_ptr(), known_type_names().as_ptr());
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    enum Probe {
        A,
        B,
        C,
    }

    static PROBE_SPACE: LazyLock<CodeSpace<Probe>> =
        LazyLock::new(|| CodeSpace::build(Family::Node, Probe::TABLE).unwrap());

    impl TypeCode for Probe {
        const FAMILY: Family = Family::Node;
        const TABLE: &'static [(Self, u16, &'static str)] =
            &[(Probe::A, 1, "Alpha"), (Probe::B, 2, ""), (Probe::C, 3, "Gamma")];

        fn code(self) -> u16 {
            match self {
                Probe::A => 1,
                Probe::B => 2,
                Probe::C => 3,
            }
        }

        fn space() -> &'static CodeSpace<Self> {
            &PROBE_SPACE
        }
    }

    #[test]
    fn blank_names_are_code_only() {
        let space = Probe::space();
        assert_eq!(space.lookup_code(2).unwrap(), Probe::B);
        assert_eq!(space.name_of(Probe::B), "");
        assert!(space.lookup_name("").is_err());
        assert_eq!(space.names().collect::<Vec<_>>(), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn duplicate_rows_rejected() {
        let dup_code = [(Probe::A, 1, "Alpha"), (Probe::B, 1, "Beta")];
        assert!(matches!(
            CodeSpace::build(Family::Node, &dup_code),
            Err(DataError::DuplicateCode { code: 1, .. })
        ));

        let dup_name = [(Probe::A, 1, "Alpha"), (Probe::B, 2, "Alpha")];
        assert!(matches!(
            CodeSpace::build(Family::Node, &dup_name),
            Err(DataError::DuplicateName { name: "Alpha", .. })
        ));
    }

    #[test]
    fn tag_resolution() {
        let mut fields = Map::new();
        assert!(matches!(
            resolve_tag::<LedgerEntryType>(&fields, "LedgerEntryType"),
            Err(DataError::MissingTag { .. })
        ));
        fields.insert("LedgerEntryType".into(), Value::from(0x61));
        assert_eq!(
            resolve_tag::<LedgerEntryType>(&fields, "LedgerEntryType").unwrap(),
            LedgerEntryType::AccountRoot
        );
        fields.insert("LedgerEntryType".into(), Value::Bool(true));
        assert!(matches!(
            resolve_tag::<LedgerEntryType>(&fields, "LedgerEntryType"),
            Err(DataError::InvalidTag { .. })
        ));
    }

    proptest! {
        #[test]
        fn any_code_lookup_agrees_with_table(code in any::<u16>()) {
            let in_table = TransactionType::TABLE.iter().any(|&(_, c, _)| c == code);
            match TransactionType::from_code(code) {
                Ok(tx) => {
                    prop_assert!(in_table);
                    prop_assert_eq!(TransactionType::from_name(tx.name()).unwrap(), tx);
                }
                Err(_) => prop_assert!(!in_table),
            }
            let in_entries = LedgerEntryType::TABLE.iter().any(|&(_, c, _)| c == code);
            prop_assert_eq!(LedgerEntryType::from_code(code).is_ok(), in_entries);
        }

        #[test]
        fn arbitrary_names_never_panic(name in "\\PC{0,24}") {
            let known = LedgerEntryType::TABLE.iter().any(|&(_, _, n)| n == name);
            prop_assert_eq!(registry().ledger_entry_for_name(&name).is_ok(), known);
        }
    }
}
