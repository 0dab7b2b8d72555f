use crate::cli::Commands;
use crate::error::{Result, ResultExt};
use alleviate::{Failure, OutputFormat, Settings, attempt};
use std::fs::{self, File};
use std::path::Path;

/// What happened to the wrapped operation
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The operation succeeded; carries a summary line
    Succeeded(String),
    /// The operation failed; carries the rendered report
    Reported(String),
}

/// Perform the risky operation named by `command`.
pub fn perform(command: &Commands) -> std::result::Result<String, Failure> {
    let path = command.path();
    match command {
        Commands::Open { .. } => {
            let file = attempt(command.action(), path, |p| File::open(p))?;
            let len = file
                .metadata()
                .map_err(|err| Failure::from_io(&err, path, "stat"))?
                .len();
            Ok(format!("Opened {} ({} bytes)", path.display(), len))
        }
        Commands::Read { .. } => {
            let bytes = attempt(command.action(), path, |p| fs::read(p))?;
            Ok(format!("Read {} bytes from {}", bytes.len(), path.display()))
        }
        Commands::Stat { .. } => {
            let metadata = attempt(command.action(), path, |p| fs::metadata(p))?;
            let kind = if metadata.is_dir() { "directory" } else { "file" };
            Ok(format!("{}: {}, {} bytes", path.display(), kind, metadata.len()))
        }
        Commands::List { .. } => {
            let names = attempt(command.action(), path, list_names)?;
            Ok(names.join("\n"))
        }
    }
}

fn list_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Run `command` and explain its failure, if any, in `format`.
pub fn execute(command: &Commands, settings: &Settings, format: OutputFormat, color: bool) -> Result<Outcome> {
    match perform(command) {
        Ok(summary) => Ok(Outcome::Succeeded(summary)),
        Err(failure) => {
            tracing::debug!(exception = failure.kind_name(), "operation failed, building report");
            let report = alleviate::explain(&failure, settings, format, color)
                .with_context(|| format!("Failed to explain {} failure", command.action()))?;
            Ok(Outcome::Reported(report))
        }
    }
}
