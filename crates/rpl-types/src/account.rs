use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// The network's base58 alphabet (differs from Bitcoin's ordering).
const ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// A classic account address such as `rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh`.
///
/// Only the textual shape is checked (leading `r`, length, alphabet). The
/// checksum is verified by the binary codec, which lives outside this crate.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Account(String);

impl Account {
    /// Parse and validate an address.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if !s.starts_with('r') || !(25..=35).contains(&s.len()) {
            return Err(TypeError::InvalidAccount(s.to_string()));
        }
        if let Some(bad) = s.chars().find(|c| !ALPHABET.contains(*c)) {
            return Err(TypeError::InvalidAccount(format!("{s}: unexpected character {bad:?}")));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self.0)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Account {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Account {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
