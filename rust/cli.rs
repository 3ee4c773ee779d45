use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ready-by deadline calculator.
#[derive(Parser)]
#[command(
    name = "readyby",
    version,
    about = "Compute ready-by deadlines from business opening hours"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a JSON calendar configuration. Defaults to 09:00-17:00 every day.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the deadline for a drop-off.
    Deadline(DeadlineArgs),
    /// Print the opening days of a month.
    Month(MonthArgs),
}

/// Arguments for the `deadline` subcommand.
#[derive(clap::Args)]
pub struct DeadlineArgs {
    /// Required open duration in seconds.
    #[arg(short, long)]
    pub duration: u64,

    /// Drop-off timestamp as "YYYY-MM-DD HH:MM".
    pub drop_off: String,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Calendar year, e.g. 2010.
    pub year: i32,
    /// Month number, 1 to 12.
    pub month: u32,
}
