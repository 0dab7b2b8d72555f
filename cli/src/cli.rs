use alleviate::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alleviate")]
#[command(
    author,
    version,
    about = "Explain failed file operations and suggest what to do about them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for the failure report (defaults to the configured format)
    #[clap(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Minimum similarity (0.0 to 1.0, exclusive) for a file to be suggested
    #[clap(long, global = true)]
    pub cutoff: Option<f64>,

    /// Maximum number of similar files to suggest
    #[clap(short, long, global = true)]
    pub limit: Option<usize>,

    /// Settings file path (defaults to alleviate.toml when present)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[clap(long, default_value_t = false, global = true)]
    pub no_color: bool,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Open a file for reading
    Open {
        /// File to open
        path: PathBuf,
    },

    /// Read a file to the end
    Read {
        /// File to read
        path: PathBuf,
    },

    /// Query metadata of a path
    Stat {
        /// Path to inspect
        path: PathBuf,
    },

    /// List the entries of a directory
    List {
        /// Directory to list
        path: PathBuf,
    },
}

impl Commands {
    /// Name of the attempted action, as shown in reports
    pub fn action(&self) -> &'static str {
        match self {
            Commands::Open { .. } => "open",
            Commands::Read { .. } => "read",
            Commands::Stat { .. } => "stat",
            Commands::List { .. } => "list",
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Commands::Open { path }
            | Commands::Read { path }
            | Commands::Stat { path }
            | Commands::List { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "alleviate", "open", "text.py", "--format", "json", "--cutoff", "0.5", "-l", "5",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.cutoff, Some(0.5));
        assert_eq!(cli.limit, Some(5));
        assert_eq!(cli.command.action(), "open");
        assert_eq!(cli.command.path(), &PathBuf::from("text.py"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["alleviate", "--format", "xml", "stat", "x"]).is_err());
    }
}
