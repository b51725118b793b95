//! layerkv CLI — line-oriented shell over the layerkv store.
//!
//! Three modes:
//! - **File mode**: `layerkv -f commands.txt` — line-by-line from a file
//! - **REPL mode**: `layerkv` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `printf 'SET a 1\nGET a\nEND\n' | layerkv` — line-by-line from stdin
//!
//! Every mode stops at `END` or end of input.

mod commands;
mod config;
mod format;
mod parse;
mod repl;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process;

use layerkv_executor::{Executor, StoreOptions};
use tracing::{error, info};

use commands::build_cli;
use config::ShellConfig;

fn main() {
    let matches = build_cli().get_matches();

    let config = match ShellConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    init_logging(&config);

    let mut executor =
        Executor::with_options(StoreOptions::new().read_strategy(config.read_strategy));
    info!(read_strategy = %config.read_strategy, "session started");

    let result = match &config.input {
        Some(path) => match File::open(path) {
            Ok(file) => repl::run_pipe(&mut executor, BufReader::new(file), io::stdout().lock()),
            Err(e) => {
                eprintln!("(error) cannot open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None if io::stdin().is_terminal() => repl::run_repl(&mut executor),
        None => repl::run_pipe(&mut executor, io::stdin().lock(), io::stdout().lock()),
    };

    if let Err(e) = result {
        error!(error = %e, "session aborted");
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

fn init_logging(config: &ShellConfig) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
