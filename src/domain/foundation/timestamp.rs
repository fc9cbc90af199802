//! UTC timestamp value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC.
///
/// Submissions stamp their creation moment with [`Timestamp::now`]; rows read
/// back from storage are rewrapped with [`Timestamp::from_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Captures the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps an already-known point in time.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_lands_between_surrounding_instants() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn from_datetime_keeps_the_instant() {
        let dt = Utc::now();
        assert_eq!(Timestamp::from_datetime(dt).as_datetime(), &dt);
    }

    #[test]
    fn earlier_timestamps_order_first() {
        let earlier = Timestamp::from_datetime("2025-03-15T10:30:00Z".parse().unwrap());
        let later = Timestamp::from_datetime("2025-03-15T10:30:01Z".parse().unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn serializes_as_plain_rfc3339_string() {
        let ts = Timestamp::from_datetime("2025-03-15T10:30:00Z".parse().unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
