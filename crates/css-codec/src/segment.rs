//! Provenance scan: which source bytes decode to which text.
//!
//! A filter that inspects decoded CSS often needs to point back at the original
//! input, e.g. to report the exact escape that smuggled in a `<`. [`segments`]
//! walks the input with the same cursor protocol as [`Codec::decode`] and records
//! every escape and every run of literal text with its byte range.
//!
//! Invariants:
//! - concatenating every `source` reproduces the input;
//! - concatenating every `decoded` equals `codec.decode(input)`.

use serde::Serialize;

use crate::codec::{Codec, EscapeToken};
use crate::cursor::PushbackCursor;
use crate::error::Result;

/// Whether a segment was copied verbatim or produced by an escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Literal,
    Escape,
}

/// A contiguous piece of input and what it decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Byte offset of the first source byte.
    pub start: usize,
    /// Byte offset one past the last source byte.
    pub end: usize,
    pub source: String,
    pub decoded: String,
}

/// Split `input` into literal runs and individual escapes.
pub fn segments<C: Codec + ?Sized>(codec: &C, input: &str) -> Result<Vec<Segment>> {
    let mut cursor = PushbackCursor::new(input);
    let mut out: Vec<Segment> = Vec::new();

    while cursor.has_next() {
        let start = cursor.position();
        let (kind, decoded) = match codec.decode_char(&mut cursor)? {
            EscapeToken::Char(c) => (SegmentKind::Escape, Some(c)),
            EscapeToken::LineContinuation => (SegmentKind::Escape, None),
            EscapeToken::NotEscape => match cursor.next() {
                Some(c) => (SegmentKind::Literal, Some(c)),
                None => break,
            },
        };
        let end = cursor.position();

        // Literal characters accumulate into the preceding literal run.
        if kind == SegmentKind::Literal {
            if let Some(last) = out.last_mut() {
                if last.kind == SegmentKind::Literal && last.end == start {
                    last.end = end;
                    last.source.push_str(&input[start..end]);
                    last.decoded.extend(decoded);
                    continue;
                }
            }
        }

        out.push(Segment {
            kind,
            start,
            end,
            source: input[start..end].to_string(),
            decoded: decoded.map(String::from).unwrap_or_default(),
        });
    }

    Ok(out)
}
