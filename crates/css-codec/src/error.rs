//! Error types for CSS codec operations.
//!
//! Malformed escapes and out-of-range code points are not errors: the decoder
//! resolves them locally (see [`crate::EscapeToken`]). Only defects surface here.

use thiserror::Error;

/// Faults raised by the codec. Neither variant can be caused by untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Digits accumulated as verified hex failed to parse as hex.
    /// Signals a broken digit classifier or a corrupted cursor upstream.
    #[error("received digits verified to be hex that do not parse as hex: {digits:?}")]
    CorruptHexDigits { digits: String },

    /// [`crate::PushbackCursor::reset`] was called with no outstanding mark.
    #[error("cursor reset without a prior mark")]
    ResetWithoutMark,
}

/// Convenience alias used throughout css-codec.
pub type Result<T> = std::result::Result<T, CodecError>;
