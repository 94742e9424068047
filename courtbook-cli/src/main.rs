mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::CourtbookConfig;

#[derive(Parser)]
#[command(name = "courtbook")]
#[command(about = "Book courts from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a session token for the booking server
    Login {
        /// Token issued by the server (prompted for when omitted)
        #[arg(long)]
        token: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// List courts with opening hours and booking limits
    Courts,
    /// List bookings
    Bookings {
        /// Only slots booked by this user id
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Show a week of bookings for one court
    Week {
        /// Court id
        court: String,

        /// Any date inside the week to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Book a slot on a court
    Book {
        /// Court id
        court: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        /// What the booking is for
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Cancel a booking by id
    Cancel {
        /// Booking id
        booking: String,
    },
    /// Show site information
    Site,
    /// Show who the server thinks you are
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = CourtbookConfig::load()?;

    match cli.command {
        Commands::Login { token } => commands::login::run(&config, token).await,
        Commands::Logout => commands::logout::run(&config),
        Commands::Courts => commands::courts::run(&config).await,
        Commands::Bookings { user } => commands::bookings::run(&config, user.as_deref()).await,
        Commands::Week { court, date } => commands::week::run(&config, &court, date.as_deref()).await,
        Commands::Book {
            court,
            date,
            start,
            end,
            description,
        } => commands::book::run(&config, &court, &date, &start, &end, &description).await,
        Commands::Cancel { booking } => commands::cancel::run(&config, &booking).await,
        Commands::Site => commands::site::run(&config).await,
        Commands::Whoami => commands::whoami::run(&config).await,
    }
}
