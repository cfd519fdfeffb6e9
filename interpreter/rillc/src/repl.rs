//! The read-eval-print session loop.

use std::io::{self, BufRead, Write};

use rill_eval::Interpreter;
use rill_lexer::Scanner;
use tracing::debug;

const PROMPT: &str = ">> ";

/// Runs one interactive session to end of input.
///
/// Each iteration prompts on `out`, reads one line, tokenizes it, and
/// executes every token. Diagnostics go to `err` one line apiece and never
/// stop the loop. After each line (and after a trailing token flushed at
/// end of input) the stack is printed to `out` as `=> ` followed by the
/// values top first, when non-empty.
///
/// Only I/O failures on the handles themselves are returned as errors.
pub fn run_session(
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
) -> io::Result<()> {
    let mut interpreter = Interpreter::new();
    let mut scanner = Scanner::new();
    let mut line = String::new();

    loop {
        out.write_all(PROMPT.as_bytes())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        debug!(line = line.trim_end(), "read line");

        for value in scanner.feed(&line) {
            if let Err(diagnostic) = interpreter.execute(value) {
                rill_diagnostic::emit(&diagnostic, &mut err)?;
                err.flush()?;
            }
        }

        // A final line without a trailing newline leaves a token pending;
        // end of input terminates it like whitespace would.
        if !line.ends_with('\n') {
            if let Some(value) = scanner.finish() {
                if let Err(diagnostic) = interpreter.execute(value) {
                    rill_diagnostic::emit(&diagnostic, &mut err)?;
                    err.flush()?;
                }
            }
            print_stack(&interpreter, &mut out)?;
            break;
        }

        print_stack(&interpreter, &mut out)?;
    }

    Ok(())
}

/// Prints `=> ` and the stack contents top first, if any.
fn print_stack(interpreter: &Interpreter, out: &mut impl Write) -> io::Result<()> {
    if interpreter.stack().is_empty() {
        return Ok(());
    }
    out.write_all(b"=> ")?;
    let mut first = true;
    for value in interpreter.stack() {
        if first {
            first = false;
        } else {
            out.write_all(b" ")?;
        }
        write!(out, "{value}")?;
    }
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests;
