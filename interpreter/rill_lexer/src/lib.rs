//! Single-pass character-stream tokenizer.
//!
//! The scanner is a three-state machine — idle, reading a word, reading an
//! integer — over whitespace-delimited input. Whitespace is exactly space,
//! tab, and newline. A digit seen while idle starts an integer token, any
//! other non-whitespace character starts a word token, and once a token has
//! started every non-whitespace character continues it regardless of state.
//!
//! # Resuming across buffers
//!
//! Input arrives in chunks of arbitrary size. A token is never emitted
//! until its terminating whitespace (or the end of the final input) has
//! been observed: a token cut off by the end of a chunk is retained as a
//! partial fragment and prefixed onto the next chunk's scan. Splitting the
//! input at any byte boundary therefore yields the identical token
//! sequence.
//!
//! [`Scanner::feed`] returns a lazy iterator over the completed tokens of
//! one chunk; [`Scanner::finish`] flushes the trailing token at the end of
//! the final input.

use std::mem;

use memchr::memchr3;
use rill_value::Value;

/// Kind of the token currently being read. The scanner is idle when no
/// token is in progress ([`Scanner::pending`] is `None`).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Pending {
    Word,
    Int,
}

/// Resumable tokenizer state carried across input chunks.
#[derive(Debug, Default)]
pub struct Scanner {
    /// `None` while idle; otherwise the kind of the in-progress token.
    pending: Option<Pending>,
    /// Fragment of the in-progress token accumulated from earlier chunks.
    partial: String,
}

impl Scanner {
    pub fn new() -> Self {
        Scanner::default()
    }

    /// Scan one chunk, yielding each token completed within it.
    ///
    /// The returned iterator must be driven to exhaustion before the next
    /// chunk is fed; dropping it early loses the unscanned remainder.
    pub fn feed<'s, 'c>(&'s mut self, chunk: &'c str) -> Tokens<'s, 'c> {
        Tokens {
            scanner: self,
            chunk,
            pos: 0,
        }
    }

    /// Flush the trailing token at end of input, if one is in progress.
    ///
    /// End of the final input terminates a token just like whitespace
    /// does. Resets the scanner to idle.
    pub fn finish(&mut self) -> Option<Value> {
        let pending = self.pending.take()?;
        let text = mem::take(&mut self.partial);
        Some(emit(pending, text))
    }

    /// Complete the in-progress token with `tail`, the portion found in
    /// the current chunk (possibly empty).
    fn complete(&mut self, pending: Pending, tail: &str) -> Value {
        self.pending = None;
        if self.partial.is_empty() {
            emit(pending, tail.to_owned())
        } else {
            let mut text = mem::take(&mut self.partial);
            text.push_str(tail);
            emit(pending, text)
        }
    }
}

fn emit(pending: Pending, text: String) -> Value {
    match pending {
        Pending::Word => Value::Word(text),
        Pending::Int => Value::Int(parse_int(&text)),
    }
}

/// Permissive integer parse: the longest leading run of ASCII digits is
/// the value and any non-numeric suffix is ignored. A prefix exceeding
/// `i32` saturates.
fn parse_int(text: &str) -> i32 {
    let digits = text
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let prefix = &text[..digits];
    if prefix.is_empty() {
        return 0;
    }
    prefix.parse::<i32>().unwrap_or(i32::MAX)
}

fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Lazy iterator over the tokens completed within one chunk.
///
/// Token boundaries are ASCII whitespace, so slicing the chunk at them
/// never splits a UTF-8 character inside a word.
#[derive(Debug)]
pub struct Tokens<'s, 'c> {
    scanner: &'s mut Scanner,
    chunk: &'c str,
    pos: usize,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let bytes = self.chunk.as_bytes();
        let pending = match self.scanner.pending {
            // Resuming mid-token: the continuation starts at `pos`.
            Some(pending) => pending,
            None => {
                while self.pos < bytes.len() && is_delimiter(bytes[self.pos]) {
                    self.pos += 1;
                }
                if self.pos >= bytes.len() {
                    return None;
                }
                let pending = if bytes[self.pos].is_ascii_digit() {
                    Pending::Int
                } else {
                    Pending::Word
                };
                self.scanner.pending = Some(pending);
                pending
            }
        };
        let start = self.pos;
        match memchr3(b' ', b'\t', b'\n', &bytes[start..]) {
            Some(offset) => {
                // Leave `pos` on the delimiter; the idle state skips it on
                // the next call.
                self.pos = start + offset;
                Some(self.scanner.complete(pending, &self.chunk[start..start + offset]))
            }
            None => {
                // Chunk exhausted mid-token: retain the fragment and wait
                // for the next chunk (or `finish`).
                self.scanner.partial.push_str(&self.chunk[start..]);
                self.pos = bytes.len();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
