//! # css-codec
//!
//! Contextual output encoding for **CSS**: escape arbitrary text so it is safe to
//! embed in a CSS token stream, and decode CSS backslash escapes back into the
//! characters a browser would see.
//!
//! Correctness here is a security property. An encoder that under-escapes lets an
//! attacker break out of the CSS context; a decoder that misreads an escape makes a
//! filter built on it inspect a different string than the browser renders.
//!
//! ## Quick start
//!
//! ```rust
//! use css_codec::{Codec, CssCodec};
//!
//! let codec = CssCodec;
//! let escaped = codec.encode(&[], "</style>");
//! assert_eq!(escaped, "\\3c \\2f style\\3e ");
//!
//! let back = codec.decode(&escaped).unwrap();
//! assert_eq!(back, "</style>");
//! ```
//!
//! ## Modules
//!
//! - [`cursor`] — `PushbackCursor`: marked lookahead and single-character pushback
//! - [`codec`] — the `Codec` trait and the `EscapeToken` decode outcome
//! - [`css`] — `CssCodec`, the CSS 2.1 escape grammar
//! - [`hex`] — hex-digit classification and code point representation
//! - [`segment`] — provenance scan mapping source byte ranges to decoded text
//! - [`error`] — internal-fault error types

pub mod codec;
pub mod css;
pub mod cursor;
pub mod error;
pub mod hex;
pub mod segment;

pub use codec::{Codec, EscapeToken};
pub use css::{CssCodec, END_CODE_POINT, START_CODE_POINT};
pub use cursor::PushbackCursor;
pub use error::CodecError;
pub use segment::{segments, Segment, SegmentKind};
