//! Rill Eval - value dispatch for the Rill interpreter.
//!
//! The [`Interpreter`] owns the operand stack and the word dictionary and
//! executes one [`Value`](rill_value::Value) at a time: integers are pushed,
//! words are dispatched to a built-in or to their dictionary definition.
//! Errors surface as [`Diagnostic`](rill_diagnostic::Diagnostic) values and
//! are never fatal — the interpreter stays consistent and the caller's loop
//! continues.

mod interpreter;
mod program;

pub use interpreter::Interpreter;
pub use program::{NativeFn, Program};
