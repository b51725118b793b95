//! Shell configuration, derived from command-line flags.

use std::path::PathBuf;

use clap::ArgMatches;
use layerkv_executor::ReadStrategy;
use tracing::Level;

/// Settings for one shell session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Command file; `None` reads stdin
    pub input: Option<PathBuf>,
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Read path for GET
    pub read_strategy: ReadStrategy,
}

impl ShellConfig {
    /// Extract the configuration from parsed flags.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let read_strategy = matches
            .get_one::<String>("read-strategy")
            .map(|s| s.parse::<ReadStrategy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            input: matches.get_one::<String>("file").map(PathBuf::from),
            verbosity: matches.get_count("verbose"),
            read_strategy,
        })
    }

    /// Most verbose level to log at. Warnings and errors are always shown.
    pub fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
