use crate::error::TimestampError;
use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

///
/// Timestamp
/// (in seconds)
///
/// Stored as whole seconds since the Unix epoch; crosses the wire as the
/// RFC 3339 string the review payload carries.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Current wall-clock time, truncated to seconds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn now() -> Self {
        let secs = Utc::now().timestamp();
        Self(secs.max(0) as u64)
    }

    /// Underlying seconds since epoch.
    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0
    }

    /// Parse an RFC 3339 date string, rejecting pre-epoch instants.
    #[allow(clippy::cast_sign_loss)]
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|source| TimestampError::Parse {
            input: s.to_string(),
            source,
        })?;

        let secs = dt.timestamp();
        if secs < 0 {
            return Err(TimestampError::BeforeEpoch {
                input: s.to_string(),
            });
        }

        Ok(Self(secs as u64))
    }

    /// Render as an RFC 3339 string in UTC (`Z` suffix, whole seconds).
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_rfc3339(self) -> String {
        DateTime::<Utc>::from_timestamp(self.0 as i64, 0).map_or_else(
            || self.0.to_string(),
            |dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        Self::parse_rfc3339(&s).map_err(serde::de::Error::custom)
    }
}
