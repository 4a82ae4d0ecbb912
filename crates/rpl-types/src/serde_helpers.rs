//! Field adapters for numbers the network sometimes sends as strings.
//!
//! Use with `#[serde(deserialize_with = "...")]`.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

fn to_u64<E: de::Error>(raw: NumberOrString) -> Result<u64, E> {
    match raw {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .parse()
            .map_err(|_| E::custom(format!("expected an unsigned integer, got {s:?}"))),
    }
}

/// Accept `123` or `"123"`.
pub fn u64_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    to_u64(NumberOrString::deserialize(deserializer)?)
}

/// Accept `123` or `"123"`, range-checked to `u32`.
pub fn u32_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = to_u64(NumberOrString::deserialize(deserializer)?)?;
    u32::try_from(n).map_err(|_| de::Error::custom(format!("{n} does not fit in u32")))
}

/// Optional variant of [`u32_lenient`]; `null` and absence map to `None`.
pub fn opt_u32_lenient<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => {
            let n = to_u64(raw)?;
            u32::try_from(n)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("{n} does not fit in u32")))
        }
    }
}
