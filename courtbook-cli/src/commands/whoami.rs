use anyhow::Result;
use courtbook_client::ops;
use owo_colors::OwoColorize;

use crate::commands::connect;
use crate::config::CourtbookConfig;

pub async fn run(config: &CourtbookConfig) -> Result<()> {
    let client = connect(config);
    let session = ops::session_info::run(&client).await?;

    if !session.is_authenticated {
        println!("Not logged in.");
        return Ok(());
    }

    match session.user {
        Some(user) => println!("{} <{}>", user.full_name().green(), user.email),
        None => println!("Logged in (user details unavailable)."),
    }

    if !session.groups.is_empty() {
        println!("Groups: {}", session.groups.join(", "));
    }

    Ok(())
}
