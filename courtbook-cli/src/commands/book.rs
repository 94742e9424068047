use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use courtbook_client::ops;
use courtbook_core::timegrid::format_time_of_day;
use courtbook_core::{BookingDraft, CourtRef};
use owo_colors::OwoColorize;

use crate::commands::connect;
use crate::config::CourtbookConfig;

pub async fn run(
    config: &CourtbookConfig,
    court_id: &str,
    date: &str,
    start: &str,
    end: &str,
    description: &str,
) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{date}'. Expected YYYY-MM-DD"))?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    let client = connect(config);

    let courts = ops::list_courts::run(&client).await?;
    let court = courts
        .iter()
        .find(|c| c.id == court_id)
        .with_context(|| format!("No court with id {court_id}"))?;

    // The slot goes through the same selection machine the grid uses:
    // press on the start cell, drag to the end cell, release, describe.
    let mut draft = BookingDraft::default();
    draft.press(CourtRef::from(court), date, start);
    draft.drag(date, end)?;
    draft.release()?;
    draft.edit_description(description)?;

    let (slot, description) = {
        let (slot, description) = draft.submittable()?;
        (slot.clone(), description.to_string())
    };

    // Opening hours are the other thing worth catching before the round
    // trip; overlaps and booking limits are the server's call.
    if slot.start < court.opening_time || slot.end > court.closing_time {
        anyhow::bail!(
            "{} is open {} to {}; the requested slot falls outside",
            court.name,
            format_time_of_day(court.opening_time, config.time_format_24h),
            format_time_of_day(court.closing_time, config.time_format_24h),
        );
    }

    let booking = ops::create_booking::run(
        &client,
        &slot.court.id,
        slot.date,
        slot.start,
        slot.end,
        &description,
    )
    .await?;
    draft.reset();

    println!(
        "{}",
        format!(
            "Booked {} on {}, {} to {} (booking {})",
            court.name,
            booking.date,
            format_time_of_day(booking.start_time, config.time_format_24h),
            format_time_of_day(booking.end_time, config.time_format_24h),
            booking.id
        )
        .green()
    );

    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .with_context(|| format!("Invalid time '{s}'. Expected HH:MM"))
}
