//! Rill CLI - the interactive session loop behind the `rill` binary.
//!
//! The loop lives in [`repl`] as a function over generic reader/writer
//! handles so integration tests can drive a whole session against in-memory
//! buffers.

pub mod repl;
