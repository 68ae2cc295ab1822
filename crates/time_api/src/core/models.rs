use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::core::utils::{
    RFC1123_FORMAT, UNIVERSAL_FULL_FORMAT, UNIVERSAL_SORTABLE_FORMAT, to_rfc3339,
};

/// Helper function to serialize an instant with a numeric offset
fn serialize_rfc3339<S>(dt: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_rfc3339(dt))
}

/// Snapshot of a single instant in several textual representations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTime {
    /// The captured instant, offset preserved
    #[serde(serialize_with = "serialize_rfc3339")]
    #[schema(value_type = String, format = DateTime, example = "2024-11-14T17:30:00+00:00")]
    pub timestamp: DateTime<FixedOffset>,
    /// RFC 1123 rendering, always GMT
    #[schema(example = "Thu, 14 Nov 2024 17:30:00 GMT")]
    pub rfc1123: String,
    /// Whole seconds since 1970-01-01T00:00:00Z
    #[schema(example = 1731605400)]
    pub unix_seconds: i64,
    /// Fixed-width sortable UTC rendering
    #[schema(example = "2024-11-14 17:30:00Z")]
    pub universal_sortable: String,
    /// Verbose UTC rendering with full day and month names
    #[schema(example = "Thursday, 14 November 2024 17:30:00")]
    pub universal_full: String,
}

impl CurrentTime {
    /// Build a snapshot from any timezone-aware datetime.
    ///
    /// `timestamp` keeps the offset it was given; every derived field is
    /// rendered in UTC.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> CurrentTime {
        let utc = dt.with_timezone(&Utc);

        CurrentTime {
            timestamp: dt.fixed_offset(),
            rfc1123: utc.format(RFC1123_FORMAT).to_string(),
            // chrono keeps sub-second parts non-negative, so this floors
            unix_seconds: utc.timestamp(),
            universal_sortable: utc.format(UNIVERSAL_SORTABLE_FORMAT).to_string(),
            universal_full: utc.format(UNIVERSAL_FULL_FORMAT).to_string(),
        }
    }
}

/// Body returned alongside 5xx responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code
    #[schema(example = "clock_unavailable")]
    pub error: String,
    /// Human-readable description
    pub message: String,
}
