//! Calendar grid math.
//!
//! Pure helpers for laying out the weekly booking grid. Nothing here
//! consults the system clock; callers inject "today" where it matters.
//!
//! No time zone support: the courts are a single venue, and slot times
//! are wall-clock times of day.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// The Monday on or before `date`.
///
/// Returns `date` itself when it already is a Monday, so the function is
/// idempotent.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven consecutive days starting at `start`.
///
/// Pass `monday_of(d)` to get the canonical week containing `d`. The
/// grid needs the whole week up front, so this is a plain array, not an
/// iterator.
pub fn week_of(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Whether `date` is the injected `today`.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Format a time of day for the grid.
///
/// 24-hour mode gives `HH:MM` (seconds truncated). 12-hour mode gives
/// `H:MM AM|PM` with the hour wrapped modulo 12: hour 0 renders as
/// `12 AM` and hour 12 as `12 PM`.
pub fn format_time_of_day(time: NaiveTime, use_24h: bool) -> String {
    if use_24h {
        time.format("%H:%M").to_string()
    } else {
        let suffix = if time.hour() < 12 { "AM" } else { "PM" };
        let hour = match time.hour() % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, time.minute(), suffix)
    }
}

/// Signed elapsed time from `start` to `end`.
///
/// Negative when the pair is reversed; the draft machine refuses to
/// submit any non-positive span.
pub fn duration_between(start: NaiveTime, end: NaiveTime) -> Duration {
    end - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // --- monday_of ---

    #[test]
    fn monday_of_midweek() {
        // 2025-03-20 is a Thursday
        assert_eq!(monday_of(date(2025, 3, 20)), date(2025, 3, 17));
    }

    #[test]
    fn monday_of_monday_is_identity() {
        let monday = date(2025, 3, 17);
        assert_eq!(monday_of(monday), monday);
    }

    #[test]
    fn monday_of_sunday_goes_back_six_days() {
        assert_eq!(monday_of(date(2025, 3, 23)), date(2025, 3, 17));
    }

    #[test]
    fn monday_of_is_a_monday_within_the_week() {
        let mut d = date(2024, 12, 25);
        for _ in 0..30 {
            let monday = monday_of(d);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= d);
            assert!(d - monday < Duration::days(7));
            assert_eq!(monday_of(monday), monday);
            d = d + Duration::days(1);
        }
    }

    // --- week_of ---

    #[test]
    fn week_of_is_seven_consecutive_days() {
        let monday = monday_of(date(2025, 3, 20));
        let week = week_of(monday);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], monday);
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn week_of_crosses_month_boundary() {
        let week = week_of(date(2025, 3, 31));
        assert_eq!(week[0], date(2025, 3, 31));
        assert_eq!(week[6], date(2025, 4, 6));
    }

    // --- is_today ---

    #[test]
    fn is_today_uses_injected_reference() {
        let today = date(2025, 3, 20);
        assert!(is_today(date(2025, 3, 20), today));
        assert!(!is_today(date(2025, 3, 21), today));
    }

    // --- format_time_of_day ---

    #[test]
    fn format_24h_truncates_seconds() {
        assert_eq!(format_time_of_day(time(13, 0), true), "13:00");
        assert_eq!(format_time_of_day(time(9, 5), true), "09:05");
    }

    #[test]
    fn format_12h_afternoon() {
        assert_eq!(format_time_of_day(time(13, 0), false), "1:00 PM");
    }

    #[test]
    fn format_12h_midnight_is_twelve_am() {
        assert_eq!(format_time_of_day(time(0, 5), false), "12:05 AM");
    }

    #[test]
    fn format_12h_noon_is_twelve_pm() {
        assert_eq!(format_time_of_day(time(12, 0), false), "12:00 PM");
    }

    #[test]
    fn format_12h_pads_minutes() {
        assert_eq!(format_time_of_day(time(9, 5), false), "9:05 AM");
    }

    // --- duration_between ---

    #[test]
    fn duration_is_signed() {
        assert_eq!(duration_between(time(9, 0), time(10, 30)), Duration::minutes(90));
        assert_eq!(duration_between(time(10, 0), time(9, 0)), Duration::minutes(-60));
        assert_eq!(duration_between(time(9, 0), time(9, 0)), Duration::zero());
    }
}
