//! Structured error taxonomy for the Rill interpreter.
//!
//! Every failure the interpreter can report is one [`Diagnostic`] variant
//! with typed payload fields, so dispatch sites match on kinds instead of
//! assembling strings. Diagnostics become text in exactly one place: the
//! [`emit`] reporting boundary, which writes one line per error to the
//! error channel.
//!
//! No diagnostic is fatal — the interpreter state stays valid (unchanged,
//! or restored, per variant) and the session loop continues.

use std::fmt;
use std::io::{self, Write};

use rill_value::ValueKind;

/// A reportable interpreter error.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Diagnostic {
    /// The operand stack is shallower than the word's required argument
    /// count. The operation did not run; the stack is unchanged.
    NotEnoughArguments {
        word: String,
        min_arity: usize,
        actual: usize,
    },
    /// Operands were popped but did not have the required kinds. The
    /// popped operands were restored to the stack in their original
    /// order. Both lists are in stack order: second-from-top first.
    TypeMismatch {
        expected: Vec<ValueKind>,
        actual: Vec<ValueKind>,
    },
    /// The word is not a built-in and is absent from the dictionary. The
    /// word value was discarded.
    UnknownWord { name: String },
    /// An unsupported operation (dictionary deletion) was invoked. No
    /// state was touched.
    NotImplemented { operation: &'static str },
    /// A stack segment or dictionary node could not be allocated. No
    /// partial mutation is visible.
    AllocationFailure,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotEnoughArguments {
                word,
                min_arity,
                actual,
            } => write!(
                f,
                "Not enough arguments to `{word}'. Minimum stack size: {min_arity}; \
                 actual stack size: {actual}."
            ),
            Diagnostic::TypeMismatch { expected, actual } => {
                f.write_str("Type mismatch. In stack order, expected argument types were: ")?;
                write_kinds(f, expected)?;
                f.write_str(", but got: ")?;
                write_kinds(f, actual)?;
                f.write_str(".")
            }
            Diagnostic::UnknownWord { name } => write!(f, "Unknown word: `{name}'."),
            Diagnostic::NotImplemented { operation } => {
                write!(f, "`{operation}' is not implemented.")
            }
            Diagnostic::AllocationFailure => f.write_str("Out of memory."),
        }
    }
}

impl std::error::Error for Diagnostic {}

fn write_kinds(f: &mut fmt::Formatter<'_>, kinds: &[ValueKind]) -> fmt::Result {
    let mut first = true;
    for kind in kinds {
        if first {
            first = false;
        } else {
            f.write_str(", ")?;
        }
        write!(f, "{kind}")?;
    }
    Ok(())
}

/// Reporting boundary: render `diagnostic` as one `Error: …` line on the
/// error channel.
pub fn emit(diagnostic: &Diagnostic, err: &mut impl Write) -> io::Result<()> {
    writeln!(err, "Error: {diagnostic}")
}
