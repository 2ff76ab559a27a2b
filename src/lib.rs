pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Currencies,
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    Diff {
        date1: NaiveDate,
        date2: NaiveDate,
        base: String,
        target: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("xrate starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let client = providers::FrankfurterClient::new(config.base_url())?;

    match command {
        AppCommand::Currencies => cli::currencies::run(&client).await,
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&client, &amount, &from, &to).await
        }
        AppCommand::Diff {
            date1,
            date2,
            base,
            target,
        } => cli::diff::run(&client, date1, date2, &base, &target).await,
    }
}
