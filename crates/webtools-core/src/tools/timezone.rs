//! Conversion of wall-clock times between IANA timezones.

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimezoneError;

/// Zones offered by default in the converter.
pub const COMMON_ZONES: &[&str] = &[
    "UTC",
    "America/Los_Angeles",
    "America/Denver",
    "America/Chicago",
    "America/New_York",
    "America/Sao_Paulo",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Europe/Moscow",
    "Africa/Cairo",
    "Asia/Dubai",
    "Asia/Kolkata",
    "Asia/Shanghai",
    "Asia/Seoul",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Pacific/Auckland",
];

/// Input formats accepted by [`parse_datetime`], tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// One instant expressed in a particular zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedTime {
    pub zone: String,
    pub local: NaiveDateTime,
    /// Zone abbreviation in effect (e.g., "EST", "CEST").
    pub abbreviation: String,
    pub utc_offset_seconds: i32,
}

impl ZonedTime {
    fn from_datetime(zone: &str, dt: DateTime<Tz>) -> Self {
        Self {
            zone: zone.to_string(),
            local: dt.naive_local(),
            abbreviation: dt.format("%Z").to_string(),
            utc_offset_seconds: dt.offset().fix().local_minus_utc(),
        }
    }

    /// e.g. "2024-01-15 17:00"
    pub fn display_time(&self) -> String {
        self.local.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn display_offset(&self) -> String {
        format_offset(self.utc_offset_seconds)
    }
}

pub fn parse_zone(name: &str) -> Result<Tz, TimezoneError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimezoneError::UnknownZone(name.to_string()))
}

/// Parse the value of an HTML `datetime-local` input or a similar form.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, TimezoneError> {
    let input = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| TimezoneError::InvalidDateTime(input.to_string()))
}

/// Interpret `local` as a wall-clock time in `zone`.
///
/// Times repeated by a backward clock change resolve to the earliest
/// instant. Times skipped by a forward change are rejected.
pub fn localize(local: NaiveDateTime, zone: &str) -> Result<DateTime<Tz>, TimezoneError> {
    let tz = parse_zone(zone)?;
    tz.from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| TimezoneError::NonexistentLocalTime {
            time: local.format("%Y-%m-%d %H:%M").to_string(),
            zone: zone.to_string(),
        })
}

/// Convert a wall-clock time in `from` to each zone in `targets`.
pub fn convert<S: AsRef<str>>(
    local: NaiveDateTime,
    from: &str,
    targets: &[S],
) -> Result<Vec<ZonedTime>, TimezoneError> {
    let instant = localize(local, from)?.with_timezone(&Utc);
    targets
        .iter()
        .map(|zone| {
            let zone = zone.as_ref();
            let tz = parse_zone(zone)?;
            Ok(ZonedTime::from_datetime(zone, instant.with_timezone(&tz)))
        })
        .collect()
}

/// Current time in `zone`.
pub fn now_in(zone: &str) -> Result<ZonedTime, TimezoneError> {
    let tz = parse_zone(zone)?;
    Ok(ZonedTime::from_datetime(zone, Utc::now().with_timezone(&tz)))
}

/// "UTC+05:30", "UTC-08:00", "UTC±00:00"
pub fn format_offset(seconds: i32) -> String {
    if seconds == 0 {
        return "UTC±00:00".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_common_zones_parse() {
        for zone in COMMON_ZONES {
            assert!(parse_zone(zone).is_ok(), "{zone}");
        }
    }

    #[test]
    fn test_unknown_zone() {
        assert_eq!(
            parse_zone("Mars/Olympus"),
            Err(TimezoneError::UnknownZone("Mars/Olympus".to_string()))
        );
    }

    #[test]
    fn test_parse_datetime_forms() {
        let expected = at(2024, 1, 15, 12, 0);
        assert_eq!(parse_datetime("2024-01-15T12:00"), Ok(expected));
        assert_eq!(parse_datetime("2024-01-15 12:00:00"), Ok(expected));
        assert!(parse_datetime("15/01/2024").is_err());
    }

    #[test]
    fn test_convert_winter() {
        let results = convert(
            at(2024, 1, 15, 12, 0),
            "America/New_York",
            &["Europe/London", "Asia/Tokyo", "Asia/Kolkata"],
        )
        .unwrap();

        assert_eq!(results[0].local, at(2024, 1, 15, 17, 0));
        assert_eq!(results[0].abbreviation, "GMT");
        assert_eq!(results[1].local, at(2024, 1, 16, 2, 0));
        assert_eq!(results[1].display_offset(), "UTC+09:00");
        assert_eq!(results[2].local, at(2024, 1, 15, 22, 30));
        assert_eq!(results[2].display_offset(), "UTC+05:30");
    }

    #[test]
    fn test_convert_summer_uses_dst() {
        let results = convert(at(2024, 7, 1, 12, 0), "Europe/Paris", &["UTC"]).unwrap();
        assert_eq!(results[0].local, at(2024, 7, 1, 10, 0));
    }

    #[test]
    fn test_nonexistent_local_time() {
        let err = convert(at(2024, 3, 10, 2, 30), "America/New_York", &["UTC"]).unwrap_err();
        assert!(matches!(err, TimezoneError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn test_ambiguous_local_time_takes_earliest() {
        let results = convert(at(2024, 11, 3, 1, 30), "America/New_York", &["UTC"]).unwrap();
        // 01:30 EDT (UTC-4), not 01:30 EST
        assert_eq!(results[0].local, at(2024, 11, 3, 5, 30));
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0), "UTC±00:00");
        assert_eq!(format_offset(-8 * 3600), "UTC-08:00");
        assert_eq!(format_offset(-(3 * 3600 + 1800)), "UTC-03:30");
    }
}
