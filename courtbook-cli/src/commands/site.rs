use anyhow::Result;
use courtbook_client::ops;
use owo_colors::OwoColorize;

use crate::commands::connect;
use crate::config::CourtbookConfig;

pub async fn run(config: &CourtbookConfig) -> Result<()> {
    let client = connect(config);
    let site = ops::site_info::run(&client).await?;

    println!("{}", site.name.bold());
    if !site.description.is_empty() {
        println!("{}", site.description);
    }

    Ok(())
}
