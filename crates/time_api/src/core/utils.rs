use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::core::error::{TimeApiError, TimeApiResult};

// Constants for format strings
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
pub const UNIVERSAL_SORTABLE_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";
pub const UNIVERSAL_FULL_FORMAT: &str = "%A, %d %B %Y %H:%M:%S";

/// Render an instant as RFC 3339, keeping its offset as `+HH:MM`
///
/// Fractional seconds are emitted only when present, in groups of
/// three digits (milli, micro or nanoseconds).
pub fn to_rfc3339(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Parse an RFC 3339 timestamp supplied on the command line
///
/// # Arguments
///
/// * `value` - The raw timestamp, e.g. `2024-11-14T17:30:00Z`
///
/// # Returns
///
/// The parsed instant with its original offset
pub fn parse_rfc3339(value: &str) -> TimeApiResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|e| TimeApiError::InvalidConfiguration {
        message: format!("'{}' is not an RFC 3339 timestamp: {}", value, e),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_rfc3339, to_rfc3339};

    #[test]
    fn test_to_rfc3339_uses_numeric_offset() {
        let dt = parse_rfc3339("2024-11-14T17:30:00Z").unwrap();
        assert_eq!(to_rfc3339(&dt), "2024-11-14T17:30:00+00:00");
    }

    #[test]
    fn test_to_rfc3339_keeps_sub_second_precision() {
        let dt = parse_rfc3339("2024-11-14T17:30:00.125+05:00").unwrap();
        assert_eq!(to_rfc3339(&dt), "2024-11-14T17:30:00.125+05:00");

        let dt = parse_rfc3339("2024-11-14T17:30:00.000001Z").unwrap();
        assert_eq!(to_rfc3339(&dt), "2024-11-14T17:30:00.000001+00:00");
    }

    #[test]
    fn test_parse_rfc3339_trims_whitespace() {
        assert!(parse_rfc3339("  1970-01-01T00:00:00Z  ").is_ok());
    }

    #[test]
    fn test_parse_rfc3339_rejects_garbage() {
        let err = parse_rfc3339("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));

        // Missing offset
        assert!(parse_rfc3339("2024-11-14T17:30:00").is_err());
    }
}
