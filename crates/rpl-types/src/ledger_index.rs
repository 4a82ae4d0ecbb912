use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Which ledger a request targets.
///
/// Serializes as a number for a concrete sequence, or as one of the strings
/// `"validated"`, `"closed"`, `"current"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LedgerIndex {
    Sequence(u32),
    #[default]
    Validated,
    Closed,
    Current,
}

impl fmt::Display for LedgerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(n) => write!(f, "{n}"),
            Self::Validated => f.write_str("validated"),
            Self::Closed => f.write_str("closed"),
            Self::Current => f.write_str("current"),
        }
    }
}

impl FromStr for LedgerIndex {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validated" => Ok(Self::Validated),
            "closed" => Ok(Self::Closed),
            "current" => Ok(Self::Current),
            other => other
                .parse::<u32>()
                .map(Self::Sequence)
                .map_err(|_| TypeError::InvalidLedgerIndex(other.to_string())),
        }
    }
}

impl From<u32> for LedgerIndex {
    fn from(seq: u32) -> Self {
        Self::Sequence(seq)
    }
}

impl Serialize for LedgerIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Sequence(n) => serializer.serialize_u32(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for LedgerIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self::Sequence(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn sequence_serializes_as_number() {
        assert_eq!(serde_json::to_value(LedgerIndex::Sequence(6917762)).unwrap(), json!(6917762));
    }

    #[test]
    fn shortcuts_serialize_as_strings() {
        assert_eq!(serde_json::to_value(LedgerIndex::Validated).unwrap(), json!("validated"));
        assert_eq!(serde_json::to_value(LedgerIndex::Closed).unwrap(), json!("closed"));
        assert_eq!(serde_json::to_value(LedgerIndex::Current).unwrap(), json!("current"));
    }

    #[test]
    fn numeric_string_parses_as_sequence() {
        let idx: LedgerIndex = serde_json::from_value(json!("32570")).unwrap();
        assert_eq!(idx, LedgerIndex::Sequence(32570));
    }

    #[test]
    fn unknown_shortcut_rejected() {
        assert!(serde_json::from_value::<LedgerIndex>(json!("latest")).is_err());
    }

    #[test]
    fn default_is_validated() {
        assert_eq!(LedgerIndex::default(), LedgerIndex::Validated);
    }

    proptest! {
        #[test]
        fn any_sequence_survives_display_and_parse(n in any::<u32>()) {
            let idx = LedgerIndex::Sequence(n);
            prop_assert_eq!(idx.to_string().parse::<LedgerIndex>().unwrap(), idx);
        }
    }
}
