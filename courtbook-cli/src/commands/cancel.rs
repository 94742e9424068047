use anyhow::Result;
use courtbook_client::ops;
use owo_colors::OwoColorize;

use crate::commands::connect;
use crate::config::CourtbookConfig;

pub async fn run(config: &CourtbookConfig, booking_id: &str) -> Result<()> {
    let client = connect(config);

    if ops::delete_booking::run(&client, booking_id).await? {
        println!("{}", format!("Cancelled booking {booking_id}").green());
    } else {
        println!("{}", format!("Booking {booking_id} was already gone").dimmed());
    }

    Ok(())
}
