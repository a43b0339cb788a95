//! Scannable input cursor with one-level mark/reset and single-character pushback.
//!
//! The cursor views an immutable `&str` and owns nothing but its offsets. It is the
//! only mutable state a decode pass needs, so it can be tested apart from any
//! escape grammar.
//!
//! - `mark()` saves the current offset (and any pending pushback) as the restore point.
//!   A second `mark()` overwrites the first.
//! - `reset()` restores the last mark. The mark survives the reset.
//! - `push(c)` makes `c` the next value returned by `next()`. When `c` is the character
//!   just consumed, the offset is rewound; otherwise `c` is held in a one-slot buffer.
//!
//! # Example
//! ```
//! use css_codec::PushbackCursor;
//!
//! let mut cursor = PushbackCursor::new("ab");
//! cursor.mark();
//! assert_eq!(cursor.next(), Some('a'));
//! cursor.push('a');
//! assert_eq!(cursor.next(), Some('a'));
//! cursor.reset().unwrap();
//! assert_eq!(cursor.position(), 0);
//! ```

use crate::error::{CodecError, Result};
use crate::hex::is_hex_digit;

/// Saved restore point: the byte offset plus the pushback slot at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mark {
    pos: usize,
    pushback: Option<char>,
}

/// A single-pass character stream over borrowed text.
///
/// Not meant to be shared: one cursor per decode pass.
#[derive(Debug, Clone)]
pub struct PushbackCursor<'a> {
    input: &'a str,
    pos: usize,
    pushback: Option<char>,
    mark: Option<Mark>,
}

impl<'a> PushbackCursor<'a> {
    /// Create a cursor positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pushback: None,
            mark: None,
        }
    }

    /// Save the current position as the single restore point.
    pub fn mark(&mut self) {
        self.mark = Some(Mark {
            pos: self.pos,
            pushback: self.pushback,
        });
    }

    /// Return to the position saved by the last [`mark`](Self::mark).
    ///
    /// Calling this before any mark is a programmer error and yields
    /// [`CodecError::ResetWithoutMark`].
    pub fn reset(&mut self) -> Result<()> {
        let mark = self.mark.ok_or(CodecError::ResetWithoutMark)?;
        self.pos = mark.pos;
        self.pushback = mark.pushback;
        Ok(())
    }

    /// Consume and return the next character, or `None` at end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        if let Some(c) = self.pushback.take() {
            return Some(c);
        }
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Whether the next character equals `expected`. Never advances.
    pub fn peek(&self, expected: char) -> bool {
        match self.pushback {
            Some(c) => c == expected,
            None => self.input[self.pos..].starts_with(expected),
        }
    }

    /// Un-consume `c` so that the following [`next`](Self::next) returns it.
    ///
    /// Only one character can be pending; pushing twice without reading in between
    /// keeps the most recent one.
    pub fn push(&mut self, c: char) {
        if self.pushback.is_none() && self.input[..self.pos].ends_with(c) {
            self.pos -= c.len_utf8();
        } else {
            self.pushback = Some(c);
        }
    }

    /// True iff `c` is one of `0-9`, `A-F`, `a-f`.
    pub fn is_hex(c: char) -> bool {
        is_hex_digit(c)
    }

    /// Whether any character remains, counting a pending pushback.
    pub fn has_next(&self) -> bool {
        self.pushback.is_some() || self.pos < self.input.len()
    }

    /// Byte offset of the next unread character of the underlying text.
    ///
    /// A pushed-back character held in the slot is not part of the underlying
    /// text and does not move this offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread part of the underlying text, from [`position`](Self::position) on.
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The full text this cursor views.
    pub fn input(&self) -> &'a str {
        self.input
    }
}
