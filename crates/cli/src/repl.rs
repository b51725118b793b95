//! Input loops: pipe mode and interactive REPL mode.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use layerkv_executor::Executor;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use crate::format::{format_error, format_output};
use crate::parse::{parse_line, CliAction};

const PROMPT: &str = "> ";

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Parse and execute one line, writing any response to `out`.
pub fn process_line<W: Write>(
    executor: &mut Executor,
    line: &str,
    out: &mut W,
) -> io::Result<Flow> {
    let cmd = match parse_line(line) {
        Ok(CliAction::End) => return Ok(Flow::Stop),
        Ok(CliAction::Execute(cmd)) => cmd,
        Err(e) => {
            debug!(line, error = %e, "rejected input line");
            writeln!(out, "{}", e)?;
            return Ok(Flow::Continue);
        }
    };

    match executor.execute(cmd) {
        Ok(output) => {
            if let Some(text) = format_output(&output) {
                writeln!(out, "{}", text)?;
            }
        }
        Err(e) => writeln!(out, "{}", format_error(&e))?,
    }
    Ok(Flow::Continue)
}

/// Read commands line-by-line until `END` or end of input.
///
/// Lines are raw bytes; invalid UTF-8 is replaced with U+FFFD so that one
/// bad line never ends the session.
pub fn run_pipe<R: BufRead, W: Write>(
    executor: &mut Executor,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    let mut lines = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            debug!(line = lines, "replaced invalid UTF-8 in input line");
        }
        if process_line(executor, &line, &mut out)? == Flow::Stop {
            break;
        }
    }
    out.flush()?;
    info!(lines, open_transactions = executor.store().depth(), "input finished");
    Ok(())
}

/// Interactive prompt with line editing. Ctrl-D ends the session.
pub fn run_repl(executor: &mut Executor) -> io::Result<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let stdout = io::stdout();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let mut out = stdout.lock();
                let flow = process_line(executor, &line, &mut out)?;
                out.flush()?;
                if flow == Flow::Stop {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }

    info!(open_transactions = executor.store().depth(), "session ended");
    Ok(())
}
