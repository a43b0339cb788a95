//! The `Codec` trait — one escape grammar per syntactic context.
//!
//! Implementors supply the per-character operations; the provided methods drive
//! them over a whole string. A registry selecting a codec per context would hold
//! `Box<dyn Codec>` values.

use crate::cursor::PushbackCursor;
use crate::error::Result;

/// Outcome of one attempt to read an escape sequence at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeToken {
    /// No escape starts here. The cursor is back at its entry offset.
    NotEscape,
    /// One decoded character. The cursor is past everything the escape consumed.
    Char(char),
    /// Only vanishing line continuations were consumed before input ended.
    LineContinuation,
}

/// Escape and unescape text for one syntactic context.
pub trait Codec {
    /// Encode one character, leaving it untouched when it appears in `immune`.
    fn encode_char(&self, immune: &[char], c: char) -> String;

    /// Try to decode one escape sequence starting at the cursor.
    fn decode_char(&self, cursor: &mut PushbackCursor<'_>) -> Result<EscapeToken>;

    /// Encode every character of `input` in order.
    fn encode(&self, immune: &[char], input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            out.push_str(&self.encode_char(immune, c));
        }
        out
    }

    /// Decode every escape in `input`, copying everything else verbatim.
    fn decode(&self, input: &str) -> Result<String> {
        let mut cursor = PushbackCursor::new(input);
        let mut out = String::with_capacity(input.len());
        while cursor.has_next() {
            match self.decode_char(&mut cursor)? {
                EscapeToken::Char(c) => out.push(c),
                EscapeToken::LineContinuation => {}
                EscapeToken::NotEscape => {
                    if let Some(c) = cursor.next() {
                        out.push(c);
                    }
                }
            }
        }
        tracing::trace!(input_len = input.len(), output_len = out.len(), "decoded");
        Ok(out)
    }
}
