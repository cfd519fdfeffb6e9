//! Tagged value model for the Rill interpreter.
//!
//! A [`Value`] is exactly one of two kinds: a [`Word`](Value::Word) — a
//! textual token treated as an operator or identifier — or an
//! [`Int`](Value::Int) — a signed 32-bit integer. No other kind exists, and
//! every consumption site matches exhaustively; an "unknown kind" branch is
//! unrepresentable by construction.
//!
//! # Ownership
//!
//! A `Word` owns its text. Values move by value between the operand stack
//! and interpreter locals; popping transfers ownership out of the stack, and
//! the owned text is released when the value is dropped. The one place a
//! consumed value survives its dispatch is the `+` type-mismatch recovery,
//! which moves the operands back onto the stack instead of dropping them.

use std::fmt;

/// A single interpreter value: a word (identifier/operator) or an integer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    /// A textual token; owns its text.
    Word(String),
    /// A signed integer (32-bit, matching a conventional platform `int`).
    Int(i32),
}

impl Value {
    /// The kind tag of this value, used in diagnostic messages.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Word(_) => ValueKind::Word,
            Value::Int(_) => ValueKind::Int,
        }
    }
}

/// Canonical printable form: a word renders as its raw text, an integer as
/// decimal with a standard sign and no leading zeros.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Word(text) => f.write_str(text),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

/// The kind of a [`Value`], without its payload.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ValueKind {
    Word,
    Int,
}

/// Diagnostic type name: `"word"` or `"int"`.
impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Word => f.write_str("word"),
            ValueKind::Int => f.write_str("int"),
        }
    }
}
