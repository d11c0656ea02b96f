//! Date differences and calendar arithmetic.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::error::DateError;

pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateError::InvalidDate(input.to_string()))
}

/// Calendar and absolute distance between two dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDifference {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
    pub total_weeks: i64,
    /// Days left over after `total_weeks`.
    pub remaining_days: i64,
    /// Monday to Friday in the half-open range `[start, end)`.
    pub business_days: i64,
    /// True when `end` precedes `start`; all counts are then magnitudes.
    pub negative: bool,
}

/// Difference from `start` to `end`.
pub fn difference(start: NaiveDate, end: NaiveDate) -> DateDifference {
    let (from, to, negative) = if end < start {
        (end, start, true)
    } else {
        (start, end, false)
    };

    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    let months = months.max(0) as u32;

    // Month addition clamps to month end, so the anchor never passes `to`.
    let anchor = from.checked_add_months(Months::new(months)).unwrap_or(from);
    let days = (to - anchor).num_days().max(0) as u32;

    let total_days = (to - from).num_days();
    DateDifference {
        years: months / 12,
        months: months % 12,
        days,
        total_days,
        total_weeks: total_days / 7,
        remaining_days: total_days % 7,
        business_days: business_days(from, to),
        negative,
    }
}

/// Weekdays in `[start, end)`. Zero when `end <= start`.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> i64 {
    let total = (end - start).num_days();
    if total <= 0 {
        return 0;
    }

    let full_weeks = total / 7;
    let mut count = full_weeks * 5;
    let mut day = start + chrono::Duration::days(full_weeks * 7);
    while day < end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        day = day.succ_opt().unwrap_or(end);
    }
    count
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateUnit {
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl DateUnit {
    pub const ALL: [DateUnit; 4] = [Self::Days, Self::Weeks, Self::Months, Self::Years];

    pub fn label(self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// Add (or with a negative amount, subtract) a span to a date.
///
/// Month and year steps clamp to the last day of the target month.
pub fn add(date: NaiveDate, amount: i64, unit: DateUnit) -> Result<NaiveDate, DateError> {
    match unit {
        DateUnit::Days => chrono::Duration::try_days(amount)
            .and_then(|d| date.checked_add_signed(d))
            .ok_or(DateError::OutOfRange),
        DateUnit::Weeks => amount
            .checked_mul(7)
            .ok_or(DateError::OutOfRange)
            .and_then(|days| add(date, days, DateUnit::Days)),
        DateUnit::Months => add_months(date, amount),
        DateUnit::Years => amount
            .checked_mul(12)
            .ok_or(DateError::OutOfRange)
            .and_then(|months| add_months(date, months)),
    }
}

fn add_months(date: NaiveDate, months: i64) -> Result<NaiveDate, DateError> {
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| DateError::OutOfRange)?;
    let result = if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    };
    result.ok_or(DateError::OutOfRange)
}

/// Calendar facts about one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInfo {
    pub weekday: Weekday,
    pub iso_week: u32,
    pub iso_year: i32,
    pub day_of_year: u32,
    pub leap_year: bool,
}

pub fn info(date: NaiveDate) -> DateInfo {
    let week = date.iso_week();
    DateInfo {
        weekday: date.weekday(),
        iso_week: week.week(),
        iso_year: week.year(),
        day_of_year: date.ordinal(),
        leap_year: NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some(),
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-02-29 "), Ok(d(2024, 2, 29)));
        assert_eq!(
            parse_date("2023-02-29"),
            Err(DateError::InvalidDate("2023-02-29".to_string()))
        );
    }

    #[test]
    fn test_difference_calendar_parts() {
        let diff = difference(d(2020, 1, 15), d(2024, 3, 20));
        assert_eq!((diff.years, diff.months, diff.days), (4, 2, 5));
        assert!(!diff.negative);
    }

    #[test]
    fn test_difference_borrows_month() {
        let diff = difference(d(2024, 1, 31), d(2024, 3, 1));
        // Jan 31 + 1 month clamps to Feb 29, one day short of Mar 1
        assert_eq!((diff.years, diff.months, diff.days), (0, 1, 1));
        assert_eq!(diff.total_days, 30);
    }

    #[test]
    fn test_difference_reversed() {
        let diff = difference(d(2024, 1, 8), d(2024, 1, 1));
        assert!(diff.negative);
        assert_eq!(diff.total_days, 7);
        assert_eq!(diff.total_weeks, 1);
        assert_eq!(diff.remaining_days, 0);
    }

    #[test]
    fn test_business_days() {
        // Monday to the following Monday
        assert_eq!(business_days(d(2024, 1, 1), d(2024, 1, 8)), 5);
        // Saturday to Monday
        assert_eq!(business_days(d(2024, 1, 6), d(2024, 1, 8)), 0);
        assert_eq!(business_days(d(2024, 1, 1), d(2024, 1, 31)), 22);
        assert_eq!(business_days(d(2024, 1, 8), d(2024, 1, 1)), 0);
    }

    #[test]
    fn test_add_clamps_month_end() {
        assert_eq!(add(d(2024, 1, 31), 1, DateUnit::Months), Ok(d(2024, 2, 29)));
        assert_eq!(add(d(2024, 2, 29), 1, DateUnit::Years), Ok(d(2025, 2, 28)));
        assert_eq!(add(d(2024, 3, 31), -1, DateUnit::Months), Ok(d(2024, 2, 29)));
    }

    #[test]
    fn test_add_days_and_weeks() {
        assert_eq!(add(d(2024, 12, 30), 2, DateUnit::Days), Ok(d(2025, 1, 1)));
        assert_eq!(add(d(2024, 1, 15), -2, DateUnit::Weeks), Ok(d(2024, 1, 1)));
        assert_eq!(
            add(d(2024, 1, 1), i64::MAX, DateUnit::Weeks),
            Err(DateError::OutOfRange)
        );
    }

    #[test]
    fn test_info() {
        let facts = info(d(2024, 12, 30));
        assert_eq!(facts.weekday, Weekday::Mon);
        assert_eq!(weekday_name(facts.weekday), "Monday");
        assert_eq!((facts.iso_year, facts.iso_week), (2025, 1));
        assert_eq!(facts.day_of_year, 365);
        assert!(facts.leap_year);
    }
}
