mod cli;
mod error;
mod inspect;
mod logging;
mod ui;

use alleviate::Settings;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::{Result, ResultExt};
use inspect::Outcome;
use std::process;

fn settings_for(cli: &Cli) -> Result<Settings> {
    let mut settings =
        Settings::load(cli.config.as_deref()).with_context(|| "Failed to load settings")?;

    if let Some(cutoff) = cli.cutoff {
        settings.cutoff = cutoff;
    }
    if let Some(limit) = cli.limit {
        settings.max_suggestions = limit;
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }

    settings.validate()?;
    Ok(settings)
}

fn run(cli: &Cli) -> Result<bool> {
    let settings = settings_for(cli)?;
    let color = !cli.no_color;
    if cli.verbose {
        ui::info_message(&format!(
            "Attempting to {} {}",
            cli.command.action(),
            cli.command.path().display()
        ));
    }

    match inspect::execute(&cli.command, &settings, settings.format, color)? {
        Outcome::Succeeded(summary) => {
            if cli.verbose {
                ui::success_message(&format!("{} succeeded", cli.command.action()));
            }
            println!("{}", summary);
            Ok(true)
        }
        Outcome::Reported(report) => {
            println!("{}", report.trim_end());
            if cli.verbose {
                ui::warning_message("The operation failed; see the report above");
            }
            Ok(false)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            if cli.verbose {
                ui::error_message(&err.to_string());
            }
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
            process::exit(1);
        }
    }
}
