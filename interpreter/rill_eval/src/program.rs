//! Dictionary payloads: what a defined word executes as.

use std::rc::Rc;

use rill_diagnostic::Diagnostic;
use rill_value::Value;

use crate::Interpreter;

/// A built-in word implemented in Rust.
///
/// Natives receive the whole interpreter so they can pop operands, push
/// results, and consult the dictionary. A native reports failure by
/// returning a [`Diagnostic`]; it must leave the interpreter in a
/// consistent state when it does.
pub type NativeFn = fn(&mut Interpreter) -> Result<(), Diagnostic>;

/// The executable payload stored under a dictionary key.
///
/// Bodies are reference-counted so executing a defined word can clone its
/// program out of the dictionary cheaply, leaving the dictionary free to be
/// mutated (redefined) while the body runs.
#[derive(Clone)]
pub enum Program {
    /// A word backed by a Rust function.
    Native(NativeFn),
    /// A word backed by a sequence of values, replayed in order.
    Interpreted(Rc<[Value]>),
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native(_) => f.write_str("Native(..)"),
            Self::Interpreted(body) => f.debug_tuple("Interpreted").field(body).finish(),
        }
    }
}
