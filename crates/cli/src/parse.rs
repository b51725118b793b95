//! Command line → CliAction conversion.
//!
//! A line is split on single spaces (so doubled spaces yield empty tokens)
//! and the first token selects the command, case-sensitively. Tokens past
//! the ones a command needs are ignored.

use layerkv_executor::Command;
use thiserror::Error;

/// The result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// A store command to execute.
    Execute(Command),
    /// `END`: stop reading input.
    End,
}

/// A line that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Known command, wrong arguments
    #[error("Command format is \"{usage}\". Please try again.")]
    Malformed {
        /// Expected form of the command
        usage: &'static str,
    },
    /// First token is not a command
    #[error("Not a valid command, please try again")]
    Unknown,
}

const SET_USAGE: &str = "SET variable value";
const GET_USAGE: &str = "GET variable";
const UNSET_USAGE: &str = "UNSET variable";
const NUMEQUALTO_USAGE: &str = "NUMEQUALTO value";

/// Parse one line of input.
pub fn parse_line(line: &str) -> Result<CliAction, ParseError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut parts = line.split(' ');
    let name = parts.next().unwrap_or_default();

    match name {
        "END" => Ok(CliAction::End),
        "SET" => {
            let key = key_arg(parts.next(), SET_USAGE)?;
            let value = parts
                .next()
                .ok_or(ParseError::Malformed { usage: SET_USAGE })?
                .to_string();
            Ok(CliAction::Execute(Command::Set { key, value }))
        }
        "GET" => {
            let key = key_arg(parts.next(), GET_USAGE)?;
            Ok(CliAction::Execute(Command::Get { key }))
        }
        "UNSET" => {
            let key = key_arg(parts.next(), UNSET_USAGE)?;
            Ok(CliAction::Execute(Command::Unset { key }))
        }
        "NUMEQUALTO" => {
            let value = parts
                .next()
                .ok_or(ParseError::Malformed {
                    usage: NUMEQUALTO_USAGE,
                })?
                .to_string();
            Ok(CliAction::Execute(Command::NumEqualTo { value }))
        }
        "BEGIN" => Ok(CliAction::Execute(Command::Begin)),
        "ROLLBACK" => Ok(CliAction::Execute(Command::Rollback)),
        "COMMIT" => Ok(CliAction::Execute(Command::Commit)),
        _ => Err(ParseError::Unknown),
    }
}

/// Keys must be non-empty; values may be empty.
fn key_arg(token: Option<&str>, usage: &'static str) -> Result<String, ParseError> {
    match token {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(ParseError::Malformed { usage }),
    }
}
