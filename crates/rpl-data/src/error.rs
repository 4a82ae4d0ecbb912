use thiserror::Error;

use crate::record::Family;

/// Errors produced by registry lookups and polymorphic decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("unknown {family} type name: {name:?}")]
    UnknownName { family: Family, name: String },

    #[error("unknown {family} type code: {code}")]
    UnknownCode { family: Family, code: u16 },

    #[error("{family} record has no {tag} field")]
    MissingTag { family: Family, tag: &'static str },

    #[error("{family} record has a malformed {tag} field: {value}")]
    InvalidTag {
        family: Family,
        tag: &'static str,
        value: String,
    },

    #[error("duplicate {family} type code in table: {code}")]
    DuplicateCode { family: Family, code: u16 },

    #[error("duplicate {family} type name in table: {name:?}")]
    DuplicateName { family: Family, name: &'static str },

    #[error("failed to decode {family} record {name}: {reason}")]
    Decode {
        family: Family,
        name: &'static str,
        reason: String,
    },
}

pub type DataResult<T> = Result<T, DataError>;
