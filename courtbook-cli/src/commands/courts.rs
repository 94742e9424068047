use anyhow::Result;
use courtbook_client::ops;

use crate::commands::connect;
use crate::config::CourtbookConfig;
use crate::render::Render;

pub async fn run(config: &CourtbookConfig) -> Result<()> {
    let client = connect(config);
    let courts = ops::list_courts::run(&client).await?;

    if courts.is_empty() {
        println!("No courts found.");
        return Ok(());
    }

    for court in &courts {
        println!("{}", court.render(config.time_format_24h));
    }

    Ok(())
}
