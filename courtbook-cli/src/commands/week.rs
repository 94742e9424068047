use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use courtbook_client::ops;
use courtbook_core::timegrid::monday_of;

use crate::commands::connect;
use crate::config::CourtbookConfig;
use crate::render::render_week;

pub async fn run(config: &CourtbookConfig, court_id: &str, date: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{s}'. Expected YYYY-MM-DD"))?,
        None => today,
    };

    let client = connect(config);

    let courts = ops::list_courts::run(&client).await?;
    let court = courts
        .iter()
        .find(|c| c.id == court_id)
        .with_context(|| format!("No court with id {court_id}"))?;

    let bookings = ops::list_bookings::run(&client).await?;

    println!(
        "{}",
        render_week(court, monday_of(date), &bookings, today, config.time_format_24h)
    );

    Ok(())
}
