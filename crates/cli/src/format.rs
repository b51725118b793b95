//! Output rendering.

use layerkv_executor::{Error, Output};

/// Printed for a GET of an absent key.
pub const NULL: &str = "NULL";

/// Render an output as a line of text; `None` for outputs that print nothing.
pub fn format_output(output: &Output) -> Option<String> {
    match output {
        Output::Unit => None,
        Output::Maybe(Some(value)) => Some(value.clone()),
        Output::Maybe(None) => Some(NULL.to_string()),
        Output::Count(n) => Some(n.to_string()),
    }
}

/// Render an execution error.
pub fn format_error(err: &Error) -> String {
    err.to_string()
}
