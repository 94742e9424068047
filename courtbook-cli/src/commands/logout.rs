use anyhow::Result;
use courtbook_client::session::StoredSession;

use crate::config::CourtbookConfig;

pub fn run(config: &CourtbookConfig) -> Result<()> {
    StoredSession::delete(&config.endpoint)?;
    println!("Logged out.");
    Ok(())
}
