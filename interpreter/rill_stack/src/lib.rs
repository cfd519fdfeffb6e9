//! Chunked operand stack: a conceptually infinite LIFO container realized
//! as a backward-linked chain of fixed-capacity segments.
//!
//! The head segment holds the top of the stack at its highest-index slot.
//! Pushing into a full head links a fresh segment in front of it; popping a
//! drained head unlinks it and falls back to the previous segment. The
//! single outermost segment is never unlinked — popping from it when empty
//! reports [`StackError::Empty`] instead.
//!
//! # Invariants
//!
//! - Every segment holds between 0 and [`SEGMENT_CAPACITY`] values.
//! - Segments below the head are always full: a new head is only linked
//!   once the old head reaches capacity, so a drained head always finds a
//!   full predecessor to fall back to.
//! - No empty segment persists other than the outermost one.
//!
//! # Ownership
//!
//! The stack exclusively owns every value it holds and the whole segment
//! chain. [`Stack::pop`] moves a value out to the caller; [`Stack::clear`]
//! drops every held value and every segment but the outermost.

use std::mem;

use thiserror::Error;

/// Number of value slots per segment.
pub const SEGMENT_CAPACITY: usize = 32;

/// Failure modes of stack operations.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum StackError {
    /// Pop on a stack holding no values.
    #[error("stack is empty")]
    Empty,
    /// Slot storage for a new segment could not be allocated.
    #[error("segment allocation failed")]
    Alloc,
}

/// One fixed-capacity chunk of the stack's backing storage.
///
/// `slots` never reallocates past its initial [`SEGMENT_CAPACITY`]
/// reservation; `prev` owns the next-older segment in the chain.
#[derive(Debug)]
struct Segment<T> {
    slots: Vec<T>,
    prev: Option<Box<Segment<T>>>,
}

impl<T> Segment<T> {
    /// An empty segment with no storage reserved yet.
    fn empty() -> Self {
        Segment {
            slots: Vec::new(),
            prev: None,
        }
    }

    /// Reserve the full slot capacity, surfacing allocation failure.
    fn reserve(&mut self) -> Result<(), StackError> {
        self.slots
            .try_reserve_exact(SEGMENT_CAPACITY - self.slots.len())
            .map_err(|_| StackError::Alloc)
    }

    fn is_full(&self) -> bool {
        self.slots.len() == SEGMENT_CAPACITY
    }
}

/// A LIFO stack of `T` backed by a chain of 32-slot segments.
#[derive(Debug)]
pub struct Stack<T> {
    head: Segment<T>,
}

impl<T> Stack<T> {
    /// An empty stack. The outermost segment allocates on first push.
    pub fn new() -> Self {
        Stack {
            head: Segment::empty(),
        }
    }

    /// Push a value on top of the stack.
    ///
    /// Links a fresh head segment when the current head is full. Returns
    /// [`StackError::Alloc`] if slot storage cannot be reserved, leaving
    /// the stack unchanged.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.head.is_full() {
            let mut fresh = Segment::empty();
            fresh.reserve()?;
            let old = mem::replace(&mut self.head, fresh);
            self.head.prev = Some(Box::new(old));
        } else if self.head.slots.capacity() < SEGMENT_CAPACITY {
            self.head.reserve()?;
        }
        self.head.slots.push(value);
        Ok(())
    }

    /// Pop the top value, transferring ownership to the caller.
    ///
    /// A drained head segment with a predecessor is unlinked and freed
    /// here; the single outermost segment instead reports
    /// [`StackError::Empty`].
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.head.slots.is_empty() {
            match self.head.prev.take() {
                Some(prev) => self.head = *prev,
                None => return Err(StackError::Empty),
            }
        }
        // Segments below the head are always full, so after falling back
        // the head cannot be empty.
        self.head.slots.pop().ok_or(StackError::Empty)
    }

    /// Read the value `index` positions below the top without removing it.
    ///
    /// Index 0 is the top of the stack; the scan walks from the head
    /// segment outward. Returns `None` when `index >= len()`.
    pub fn peek(&self, index: usize) -> Option<&T> {
        let mut segment = Some(&self.head);
        let mut index = index;
        while let Some(seg) = segment {
            if index < seg.slots.len() {
                return Some(&seg.slots[seg.slots.len() - 1 - index]);
            }
            index -= seg.slots.len();
            segment = seg.prev.as_deref();
        }
        None
    }

    /// Total number of held values: the sum of all segment sizes,
    /// O(segments).
    pub fn len(&self) -> usize {
        let mut total = 0;
        let mut segment = Some(&self.head);
        while let Some(seg) = segment {
            total += seg.slots.len();
            segment = seg.prev.as_deref();
        }
        total
    }

    pub fn is_empty(&self) -> bool {
        self.head.slots.is_empty() && self.head.prev.is_none()
    }

    /// Drop every held value, unconditionally.
    ///
    /// The segment chain is freed down to the single outermost segment,
    /// which is reset empty (its slot storage is kept for reuse).
    pub fn clear(&mut self) {
        self.unlink_chain();
        self.head.slots.clear();
    }

    /// Iterate the held values from top of stack to bottom — the order of
    /// `peek(0), peek(1), …`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            segment: Some(&self.head),
            offset: 0,
        }
    }

    /// Free the chain below the head iteratively, so that dropping a deep
    /// stack cannot overflow the call stack via chained `Box` drops.
    fn unlink_chain(&mut self) {
        let mut prev = self.head.prev.take();
        while let Some(mut seg) = prev {
            prev = seg.prev.take();
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.unlink_chain();
    }
}

/// Top-to-bottom borrowing iterator over a [`Stack`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    segment: Option<&'a Segment<T>>,
    /// Positions already yielded from the current segment, counted from
    /// its top slot.
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let seg = self.segment?;
            if self.offset < seg.slots.len() {
                let item = &seg.slots[seg.slots.len() - 1 - self.offset];
                self.offset += 1;
                return Some(item);
            }
            self.segment = seg.prev.as_deref();
            self.offset = 0;
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
