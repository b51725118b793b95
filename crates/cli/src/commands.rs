//! Command-line flag definitions.

use clap::{Arg, ArgAction};

/// Build the clap command for the `layerkv` binary.
pub fn build_cli() -> clap::Command {
    clap::Command::new("layerkv")
        .about("In-memory key-value store with nested transactions")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Read commands from a file instead of stdin"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log to stderr (-v info, -vv debug, -vvv trace)"),
        )
        .arg(
            Arg::new("read-strategy")
                .long("read-strategy")
                .value_name("STRATEGY")
                .default_value("lazy")
                .help("How GET resolves open transactions: lazy or materialized (case-sensitive)"),
        )
}
