use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::account::Account;
use crate::error::TypeError;

/// Drops per native unit.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// A currency code: `XRP`, a three-character ISO-style code, or a 40-character
/// hex code for non-standard currencies.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    pub fn xrp() -> Self {
        Self("XRP".into())
    }

    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let standard = s.len() == 3 && s.chars().all(|c| c.is_ascii_graphic());
        let hex_code = s.len() == 40 && s.chars().all(|c| c.is_ascii_hexdigit());
        if standard || hex_code {
            Ok(Self(s.to_string()))
        } else {
            Err(TypeError::InvalidCurrency(s.to_string()))
        }
    }

    pub fn is_native(&self) -> bool {
        self.0 == "XRP"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.0)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A currency with an optional issuer, as used in order book and path
/// finding requests. Native currency has no issuer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Account>,
}

impl Asset {
    pub fn native() -> Self {
        Self { currency: Currency::xrp(), issuer: None }
    }

    pub fn issued(currency: Currency, issuer: Account) -> Self {
        Self { currency, issuer: Some(issuer) }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.issuer {
            Some(issuer) => write!(f, "{}/{}", self.currency, issuer),
            None => write!(f, "{}", self.currency),
        }
    }
}

/// An amount on the JSON wire.
///
/// Native amounts are a decimal string of drops; issued amounts are an object
/// of `value`, `currency` and `issuer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Amount {
    Drops(u64),
    Issued {
        value: String,
        currency: Currency,
        issuer: Account,
    },
}

impl Amount {
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Drops(_))
    }

    /// Drops for a native amount, `None` for issued amounts.
    pub fn drops(&self) -> Option<u64> {
        match self {
            Self::Drops(d) => Some(*d),
            Self::Issued { .. } => None,
        }
    }

    fn parse_drops(s: &str) -> Result<Self, TypeError> {
        s.parse::<u64>()
            .map(Self::Drops)
            .map_err(|_| TypeError::InvalidAmount(s.to_string()))
    }
}

/// Render drops as a native decimal with trailing zeros removed.
fn drops_to_native(drops: u64) -> String {
    let whole = drops / DROPS_PER_XRP;
    let frac = drops % DROPS_PER_XRP;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:06}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drops(d) => f.write_str(&drops_to_native(*d)),
            Self::Issued { value, currency, issuer } => write!(f, "{value}/{currency}/{issuer}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct IssuedWire {
    value: String,
    currency: Currency,
    issuer: Account,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountWire {
    Drops(String),
    Issued(IssuedWire),
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Drops(d) => serializer.serialize_str(&d.to_string()),
            Self::Issued { value, currency, issuer } => IssuedWire {
                value: value.clone(),
                currency: currency.clone(),
                issuer: issuer.clone(),
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match AmountWire::deserialize(deserializer)? {
            AmountWire::Drops(s) => Self::parse_drops(&s).map_err(serde::de::Error::custom),
            AmountWire::Issued(w) => {
                if w.value.parse::<f64>().map(|v| !v.is_finite()).unwrap_or(true) {
                    return Err(serde::de::Error::custom(TypeError::InvalidAmount(w.value)));
                }
                Ok(Self::Issued {
                    value: w.value,
                    currency: w.currency,
                    issuer: w.issuer,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn native_amount_from_string() {
        let a: Amount = serde_json::from_value(json!("10321199422233")).unwrap();
        assert_eq!(a.drops(), Some(10_321_199_422_233));
        assert_eq!(a.to_string(), "10321199.422233");
    }

    #[test]
    fn small_fee_renders_as_decimal() {
        assert_eq!(Amount::Drops(10).to_string(), "0.00001");
        assert_eq!(Amount::Drops(12).to_string(), "0.000012");
        assert_eq!(Amount::Drops(2_000_000).to_string(), "2");
    }

    #[test]
    fn issued_amount_from_object() {
        let a: Amount = serde_json::from_value(json!({
            "currency": "BTC",
            "issuer": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
            "value": "0.034800328"
        }))
        .unwrap();
        assert!(!a.is_native());
        assert_eq!(a.to_string(), "0.034800328/BTC/rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B");
    }

    #[test]
    fn issued_amount_serializes_as_object() {
        let a = Amount::Issued {
            value: "1.5".into(),
            currency: Currency::parse("USD").unwrap(),
            issuer: Account::parse("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B").unwrap(),
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["value"], "1.5");
        assert_eq!(v["currency"], "USD");
    }

    #[test]
    fn non_numeric_drops_rejected() {
        assert!(serde_json::from_value::<Amount>(json!("12abc")).is_err());
    }

    #[test]
    fn non_numeric_issued_value_rejected() {
        let v = json!({
            "currency": "USD",
            "issuer": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
            "value": "lots"
        });
        assert!(serde_json::from_value::<Amount>(v).is_err());
    }

    #[test]
    fn currency_forms() {
        assert!(Currency::parse("XRP").unwrap().is_native());
        assert!(Currency::parse("0158415500000000C1F76FF6ECB0BAC600000000").is_ok());
        assert!(Currency::parse("TOOLONG").is_err());
    }

    #[test]
    fn asset_display() {
        assert_eq!(Asset::native().to_string(), "XRP");
        let usd = Asset::issued(
            Currency::parse("USD").unwrap(),
            Account::parse("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B").unwrap(),
        );
        assert_eq!(usd.to_string(), "USD/rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B");
        let v = serde_json::to_value(Asset::native()).unwrap();
        assert_eq!(v, json!({ "currency": "XRP" }));
    }
}
