use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use xrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List supported currencies
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert, e.g. 100 or 12.5
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
    },
    /// Show how a rate changed between two dates (rate on DATE1 minus rate on DATE2)
    Diff {
        /// First date (YYYY-MM-DD)
        date1: NaiveDate,
        /// Second date (YYYY-MM-DD)
        date2: NaiveDate,
        /// Base currency code
        base: String,
        /// Target currency code
        target: String,
    },
}

impl From<Commands> for xrate::AppCommand {
    fn from(cmd: Commands) -> xrate::AppCommand {
        match cmd {
            Commands::Currencies => xrate::AppCommand::Currencies,
            Commands::Convert { amount, from, to } => xrate::AppCommand::Convert { amount, from, to },
            Commands::Diff {
                date1,
                date2,
                base,
                target,
            } => xrate::AppCommand::Diff {
                date1,
                date2,
                base,
                target,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => xrate::cli::setup::setup(),
        Some(cmd) => xrate::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
