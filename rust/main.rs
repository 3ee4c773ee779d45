mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use readyby::json::JSON;
use readyby::scheduling::{format_instant, BusinessCalendar, CalendarConfig, DeadlineCalculator};
use tracing::info;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cal = load_calendar(cli.config.as_deref())?;
    match cli.command {
        Command::Deadline(args) => {
            let deadline = DeadlineCalculator::new(&cal)
                .calculate_deadline_str(args.duration, &args.drop_off)
                .with_context(|| format!("computing deadline for '{}'", args.drop_off))?;
            println!("{}", format_instant(&deadline));
        }
        Command::Month(args) => {
            print!("{}", cal.print_month(args.year, args.month)?);
        }
    }
    Ok(())
}

fn load_calendar(path: Option<&Path>) -> Result<BusinessCalendar> {
    let config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            info!(path = %path.display(), "loaded calendar config");
            CalendarConfig::from_json(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CalendarConfig::default(),
    };
    config.build().context("building calendar")
}
