//! Terminal rendering for courtbook types.
//!
//! Extension traits that add colored output to courtbook-core types
//! using owo_colors, plus the week-grid view.

use chrono::{NaiveDate, NaiveTime, Timelike};
use courtbook_core::timegrid::{format_time_of_day, is_today, week_of};
use courtbook_core::{Booking, BookingSlot, Court};
use owo_colors::OwoColorize;

/// Extension trait for rendering with colors.
pub trait Render {
    fn render(&self, use_24h: bool) -> String;
}

impl Render for Court {
    fn render(&self, use_24h: bool) -> String {
        let hours = format!(
            "{} to {}",
            format_time_of_day(self.opening_time, use_24h),
            format_time_of_day(self.closing_time, use_24h)
        );

        let mut limits = vec![format!("min {} min", self.min_booking_length_minutes)];
        if let Some(max) = self.max_booking_length_minutes {
            limits.push(format!("max {max} min"));
        }
        if let Some(days) = self.max_booking_days_in_advance {
            limits.push(format!("up to {days} days ahead"));
        }

        format!(
            "{}  {}  {}  {}",
            self.id.dimmed(),
            self.name.bold(),
            hours,
            format!("({})", limits.join(", ")).dimmed()
        )
    }
}

impl Render for Booking {
    fn render(&self, use_24h: bool) -> String {
        let span = format!(
            "{} {} to {}",
            self.date,
            format_time_of_day(self.start_time, use_24h),
            format_time_of_day(self.end_time, use_24h)
        );
        let what = if self.description.is_empty() {
            String::new()
        } else {
            format!("  {}", self.description.dimmed())
        };

        format!(
            "{}  {}  {}  {}{}",
            self.id.dimmed(),
            self.court.name.bold(),
            span,
            self.user.full_name(),
            what
        )
    }
}

impl Render for BookingSlot {
    fn render(&self, use_24h: bool) -> String {
        format!(
            "{}  {} {} to {}",
            self.court.name.bold(),
            self.date,
            format_time_of_day(self.start_time, use_24h),
            format_time_of_day(self.end_time, use_24h)
        )
    }
}

/// Cell width of one day column in the week grid.
const CELL: usize = 8;

/// Render one court's week as a grid: day columns across, hour rows
/// down, booked cells filled.
pub fn render_week(
    court: &Court,
    monday: NaiveDate,
    bookings: &[Booking],
    today: NaiveDate,
    use_24h: bool,
) -> String {
    let days = week_of(monday);
    let mut lines = Vec::new();

    lines.push(format!("{}  {} to {}", court.name.bold(), days[0], days[6]));

    let mut header = format!("{:>8} ", "");
    for day in &days {
        let cell = format!("{:>CELL$}", day.format("%a %d").to_string());
        if is_today(*day, today) {
            header.push_str(&cell.green().to_string());
        } else {
            header.push_str(&cell);
        }
    }
    lines.push(header);

    // One row per opening hour; a closing time with minutes still gets
    // its last partial hour.
    let open = court.opening_time.hour();
    let close = if court.closing_time.minute() > 0 {
        court.closing_time.hour() + 1
    } else {
        court.closing_time.hour()
    };

    for hour in open..close {
        let label = NaiveTime::from_hms_opt(hour, 0, 0)
            .map(|t| format_time_of_day(t, use_24h))
            .unwrap_or_default();
        let mut row = format!("{label:>8} ");

        for day in &days {
            let booked = bookings.iter().any(|b| {
                b.court.id == court.id
                    && b.date == *day
                    && minutes(b.start_time) < (hour + 1) * 60
                    && minutes(b.end_time) > hour * 60
            });
            row.push_str(&format!("{:>CELL$}", if booked { "####" } else { "." }));
        }

        lines.push(row);
    }

    lines.join("\n")
}

fn minutes(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtbook_core::{CourtRef, User};

    fn make_court() -> Court {
        Court {
            id: "1".to_string(),
            name: "Court One".to_string(),
            opening_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            min_booking_length_minutes: 30,
            max_booking_length_minutes: Some(120),
            max_booking_days_in_advance: Some(14),
        }
    }

    fn make_booking(date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Booking {
        Booking {
            id: "7".to_string(),
            court: CourtRef {
                id: "1".to_string(),
                name: "Court One".to_string(),
            },
            date,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            description: "club night".to_string(),
            user: User {
                id: "3".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn week_grid_has_a_row_per_opening_hour() {
        let court = make_court();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        let grid = render_week(&court, monday, &[], monday, true);

        let lines: Vec<&str> = grid.lines().collect();
        // title + header + one row per hour from 09:00 to 20:00
        assert_eq!(lines.len(), 2 + 12);
        assert!(lines[2].trim_start().starts_with("09:00"));
        assert!(lines.last().unwrap().trim_start().starts_with("20:00"));
    }

    #[test]
    fn week_grid_marks_booked_hours() {
        let court = make_court();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        let booking = make_booking(monday, (10, 0), (11, 30));
        let grid = render_week(&court, monday, &[booking], monday, true);

        let lines: Vec<&str> = grid.lines().collect();
        let row_10 = lines.iter().find(|l| l.contains("10:00")).unwrap();
        let row_11 = lines.iter().find(|l| l.contains("11:00")).unwrap();
        let row_12 = lines.iter().find(|l| l.contains("12:00")).unwrap();
        assert!(row_10.contains("####"));
        assert!(row_11.contains("####"), "partial hour still shows as booked");
        assert!(!row_12.contains("####"));
    }

    #[test]
    fn bookings_for_other_courts_do_not_mark_the_grid() {
        let court = make_court();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        let mut booking = make_booking(monday, (10, 0), (11, 0));
        booking.court.id = "2".to_string();
        let grid = render_week(&court, monday, &[booking], monday, true);

        assert!(!grid.contains("####"));
    }
}
