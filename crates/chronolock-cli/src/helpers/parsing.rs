//! Unlock date parsing.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::CliError;

/// Parse an unlock date.
///
/// `YYYY-MM-DD` is interpreted at `hour:00:00` in `timezone`. A full RFC 3339
/// timestamp is taken as-is.
pub fn parse_unlock_date(value: &str, timezone: Tz, hour: u32) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input("Invalid date format. Use YYYY-MM-DD (e.g. 2025-04-30)")
    })?;
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| CliError::invalid_input(format!("Invalid unlock hour: {}", hour)))?;

    // Folded hours resolve to the earlier instant; skipped hours are rejected.
    let local = timezone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| {
            CliError::invalid_input(format!(
                "{} {:02}:00 does not exist in {}",
                value, hour, timezone
            ))
        })?;
    Ok(local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Madrid;

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_date_uses_midday_in_timezone() {
        let parsed = parse_unlock_date("2025-06-01", Madrid, 12).unwrap();
        assert_eq!(parsed, utc("2025-06-01T12:00:00+02:00"));
    }

    #[test]
    fn test_date_in_winter_offset() {
        let parsed = parse_unlock_date("2025-01-15", Madrid, 12).unwrap();
        assert_eq!(parsed, utc("2025-01-15T11:00:00Z"));
    }

    #[test]
    fn test_custom_hour_and_timezone() {
        let parsed = parse_unlock_date("2025-06-01", chrono_tz::UTC, 0).unwrap();
        assert_eq!(parsed, utc("2025-06-01T00:00:00Z"));
    }

    #[test]
    fn test_rfc3339_taken_as_is() {
        let parsed = parse_unlock_date("2025-06-01T08:30:00-05:00", Madrid, 12).unwrap();
        assert_eq!(parsed, utc("2025-06-01T13:30:00Z"));
    }

    #[test]
    fn test_invalid_formats_rejected() {
        for value in ["", "tomorrow", "01/06/2025", "2025-13-01", "2025-02-30"] {
            let err = parse_unlock_date(value, Madrid, 12).unwrap_err();
            assert!(
                err.to_string().contains("Invalid date format"),
                "unexpected error for {:?}: {}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_invalid_input_error_is_typed() {
        let err = parse_unlock_date("nope", Madrid, 12).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_dst_gap_hour() {
        // Clocks in Madrid jump from 02:00 to 03:00 on 2025-03-30.
        let err = parse_unlock_date("2025-03-30", Madrid, 2).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
