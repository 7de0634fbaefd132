//! Remaining-time labels for deals.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::error::CatalogError;

/// Remaining time as `"<H>h <M>m"`, floored at each unit.
///
/// A deadline at or before `now` yields `"0h 0m"`.
pub fn time_left(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = deadline - now;
    if remaining <= TimeDelta::zero() {
        return "0h 0m".to_string();
    }

    let total_minutes = remaining.num_minutes();
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Remaining time as a `HH:MM:SS` clock for the section header.
pub fn countdown_clock(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (deadline - now).num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Parse a catalog timestamp. Offset-less timestamps are taken as UTC.
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, CatalogError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CatalogError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        parse_deadline("2026-10-16T12:00:00Z").unwrap()
    }

    #[test]
    fn test_hours_and_minutes_are_floored() {
        let deadline = now() + TimeDelta::minutes(125);
        assert_eq!(time_left(deadline, now()), "2h 5m");

        let deadline = now() + TimeDelta::minutes(125) + TimeDelta::seconds(59);
        assert_eq!(time_left(deadline, now()), "2h 5m");

        let deadline = now() + TimeDelta::seconds(59);
        assert_eq!(time_left(deadline, now()), "0h 0m");
    }

    #[test]
    fn test_past_deadline_is_zero() {
        let deadline = now() - TimeDelta::hours(3);
        assert_eq!(time_left(deadline, now()), "0h 0m");
        assert_eq!(time_left(now(), now()), "0h 0m");
    }

    #[test]
    fn test_long_deals_keep_counting_hours() {
        let deadline = now() + TimeDelta::days(2) + TimeDelta::minutes(3);
        assert_eq!(time_left(deadline, now()), "48h 3m");
    }

    #[test]
    fn test_countdown_clock() {
        let deadline = now() + TimeDelta::seconds(5 * 3600 + 23 * 60 + 47);
        assert_eq!(countdown_clock(deadline, now()), "05:23:47");
        assert_eq!(countdown_clock(now() - TimeDelta::seconds(1), now()), "00:00:00");
    }

    #[test]
    fn test_parse_deadline_formats() {
        let offset = parse_deadline("2026-10-16T14:00:00+02:00").unwrap();
        assert_eq!(offset, now());

        let naive = parse_deadline("2026-10-16T12:00:00.000000").unwrap();
        assert_eq!(naive, now());

        let spaced = parse_deadline("2026-10-16 12:00:00").unwrap();
        assert_eq!(spaced, now());

        assert!(parse_deadline("tomorrow").is_err());
    }
}
