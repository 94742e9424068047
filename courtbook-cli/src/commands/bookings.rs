use anyhow::Result;
use courtbook_client::ops;

use crate::commands::connect;
use crate::config::CourtbookConfig;
use crate::render::Render;

pub async fn run(config: &CourtbookConfig, user: Option<&str>) -> Result<()> {
    let client = connect(config);

    match user {
        Some(user_id) => {
            let slots = ops::bookings_by_user::run(&client, Some(user_id)).await?;
            if slots.is_empty() {
                println!("No bookings.");
                return Ok(());
            }
            for slot in &slots {
                println!("{}", slot.render(config.time_format_24h));
            }
        }
        None => {
            let bookings = ops::list_bookings::run(&client).await?;
            if bookings.is_empty() {
                println!("No bookings.");
                return Ok(());
            }
            for booking in &bookings {
                println!("{}", booking.render(config.time_format_24h));
            }
        }
    }

    Ok(())
}
