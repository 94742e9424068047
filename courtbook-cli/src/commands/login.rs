use anyhow::{Context, Result};
use courtbook_client::ops;
use courtbook_client::session::StoredSession;
use owo_colors::OwoColorize;

use crate::commands::connect;
use crate::config::CourtbookConfig;

pub async fn run(config: &CourtbookConfig, token: Option<String>) -> Result<()> {
    let token = match token {
        Some(t) => t,
        None => rpassword::prompt_password("Session token: ").context("Failed to read token")?,
    };
    let token = token.trim();

    if token.is_empty() {
        anyhow::bail!("Token is empty");
    }

    StoredSession::new(&config.endpoint, token).save()?;

    // Round-trip through sessionInfo so a mistyped token is caught now,
    // not on the first booking attempt.
    let client = connect(config);
    let session = ops::session_info::run(&client).await?;

    if session.is_authenticated {
        let name = session
            .user
            .map(|u| u.full_name())
            .unwrap_or_else(|| "unknown user".to_string());
        println!("{}", format!("Logged in as {name}").green());
        if !session.groups.is_empty() {
            println!("Groups: {}", session.groups.join(", "));
        }
    } else {
        println!(
            "{}",
            "The server does not recognize this token. Run `courtbook logout` to discard it."
                .yellow()
        );
    }

    Ok(())
}
