use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds between the UNIX epoch and the network epoch (2000-01-01T00:00:00Z).
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// A ledger timestamp: whole seconds since 2000-01-01 UTC.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RippleTime(pub u32);

impl RippleTime {
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Option<Self> {
        let secs = at.timestamp() - RIPPLE_EPOCH_OFFSET;
        u32::try_from(secs).ok().map(Self)
    }

    pub fn secs(&self) -> u32 {
        self.0
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        // Every u32 offset from the network epoch is a representable instant.
        DateTime::from_timestamp(i64::from(self.0) + RIPPLE_EPOCH_OFFSET, 0).unwrap_or_default()
    }
}

impl fmt::Debug for RippleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RippleTime({})", self.0)
    }
}

impl fmt::Display for RippleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y-%b-%d %H:%M:%S UTC"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_year_2000() {
        assert_eq!(RippleTime(0).to_string(), "2000-Jan-01 00:00:00 UTC");
    }

    #[test]
    fn display_matches_network_format() {
        assert_eq!(RippleTime(454_770_710).to_string(), "2014-May-30 13:11:50 UTC");
        assert_eq!(RippleTime(410_325_670).to_string(), "2013-Jan-01 03:21:10 UTC");
    }

    #[test]
    fn datetime_roundtrip() {
        let t = RippleTime(454_770_710);
        assert_eq!(RippleTime::from_datetime(t.to_datetime()), Some(t));
    }

    #[test]
    fn before_epoch_is_unrepresentable() {
        let at = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(RippleTime::from_datetime(at), None);
    }

    #[test]
    fn serde_is_plain_number() {
        let t: RippleTime = serde_json::from_str("454770710").unwrap();
        assert_eq!(t.secs(), 454_770_710);
        assert_eq!(serde_json::to_string(&t).unwrap(), "454770710");
    }
}
