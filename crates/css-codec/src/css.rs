//! CSS backslash escaping, following the character rules of CSS 2.1 §4.1.3.
//!
//! A backslash introduces one of three escapes:
//!
//! 1. **Line continuation**: `\` followed by LF, FF, NUL or a CR/LF pair. The whole
//!    sequence vanishes from the decoded text.
//! 2. **Literal**: `\` followed by any other non-hex character stands for that character.
//! 3. **Hex**: `\` followed by one to six hex digits names a code point. A seventh
//!    digit is never part of the escape. A single whitespace character after the
//!    digits terminates the escape and is swallowed; after a CR, a following LF
//!    stays in the text.
//!
//! The encoder always writes form 3 with a trailing space, so a following hex
//! digit can never be absorbed into the escape.
//!
//! # Example
//! ```
//! use css_codec::{Codec, CssCodec};
//!
//! let codec = CssCodec;
//! assert_eq!(codec.encode(&[], "a<b"), "a\\3c b");
//! assert_eq!(codec.decode("a\\3c b").unwrap(), "a<b");
//! ```

use crate::codec::{Codec, EscapeToken};
use crate::cursor::PushbackCursor;
use crate::error::{CodecError, Result};
use crate::hex::hex;

/// Lowest code point a hex escape may decode to.
pub const START_CODE_POINT: u32 = 0x0;

/// Highest code point a hex escape may decode to.
pub const END_CODE_POINT: u32 = 0x10FFFF;

/// Longest run of hex digits one escape can hold.
pub const MAX_HEX_DIGITS: usize = 6;

/// The CSS context codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssCodec;

impl Codec for CssCodec {
    fn encode_char(&self, immune: &[char], c: char) -> String {
        if immune.contains(&c) {
            return c.to_string();
        }
        match hex(c) {
            Some(digits) => format!("\\{digits} "),
            None => c.to_string(),
        }
    }

    fn decode_char(&self, cursor: &mut PushbackCursor<'_>) -> Result<EscapeToken> {
        let mut continued = false;
        loop {
            cursor.mark();
            let Some('\\') = cursor.next() else {
                return rewind(cursor, continued);
            };
            let Some(second) = cursor.next() else {
                return rewind(cursor, continued);
            };

            let crlf = second == '\r' && cursor.peek('\n');
            if crlf {
                cursor.next();
            }
            if crlf || matches!(second, '\n' | '\x0C' | '\0') {
                continued = true;
                continue;
            }

            if !PushbackCursor::is_hex(second) {
                return Ok(EscapeToken::Char(second));
            }
            return decode_hex_escape(second, cursor).map(EscapeToken::Char);
        }
    }
}

/// Restore the cursor after a failed escape attempt.
///
/// When line continuations were already swallowed, the character after them is
/// consumed as a literal so the vanished sequence is never copied back out.
fn rewind(cursor: &mut PushbackCursor<'_>, continued: bool) -> Result<EscapeToken> {
    cursor.reset()?;
    if !continued {
        return Ok(EscapeToken::NotEscape);
    }
    Ok(match cursor.next() {
        Some(c) => EscapeToken::Char(c),
        None => EscapeToken::LineContinuation,
    })
}

/// Accumulate the rest of a hex escape whose first digit is `first`.
fn decode_hex_escape(first: char, cursor: &mut PushbackCursor<'_>) -> Result<char> {
    let mut digits = String::with_capacity(MAX_HEX_DIGITS);
    digits.push(first);
    while digits.len() < MAX_HEX_DIGITS {
        match cursor.next() {
            Some(c) if PushbackCursor::is_hex(c) => digits.push(c),
            Some(c) => {
                cursor.push(c);
                break;
            }
            None => break,
        }
    }
    swallow_terminator(cursor);
    let codepoint = codepoint_from_hex(&digits)?;
    Ok(char_for_codepoint(codepoint))
}

/// Consume exactly one white space character if it comes next.
///
/// A CR/LF pair is not a unit here: only the CR is swallowed.
fn swallow_terminator(cursor: &mut PushbackCursor<'_>) {
    match cursor.next() {
        Some(c) if is_css_whitespace(c) => {}
        Some(c) => cursor.push(c),
        None => {}
    }
}

/// Parse digits that were verified as hex into a code point.
///
/// Failure means the digits were never hex to begin with, which only a defect
/// upstream can cause; it is reported as [`CodecError::CorruptHexDigits`].
pub fn codepoint_from_hex(digits: &str) -> Result<u32> {
    if digits.is_empty() || !digits.chars().all(PushbackCursor::is_hex) {
        return Err(corrupt(digits));
    }
    u32::from_str_radix(digits, 16).map_err(|_| corrupt(digits))
}

fn corrupt(digits: &str) -> CodecError {
    tracing::error!(digits, "hex escape digits failed to parse");
    CodecError::CorruptHexDigits {
        digits: digits.to_string(),
    }
}

/// Map a code point to a character, substituting U+FFFD outside the accepted range.
///
/// Surrogates are inside the range numerically but are not characters, so they are
/// replaced as well.
pub fn char_for_codepoint(codepoint: u32) -> char {
    if (START_CODE_POINT..=END_CODE_POINT).contains(&codepoint) {
        if let Some(c) = char::from_u32(codepoint) {
            return c;
        }
    }
    tracing::debug!(codepoint, "replacing unrepresentable code point");
    char::REPLACEMENT_CHARACTER
}

/// CSS 2.1 white space: space, tab, line feed, carriage return, form feed.
///
/// Unlike a regex `\s` class, vertical tab is not white space here.
pub fn is_css_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}
