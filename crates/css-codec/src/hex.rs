//! Hex-digit classification and code point representation shared by codecs.

/// True iff `c` is one of `0-9`, `A-F`, `a-f`.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Lowercase hexadecimal code point of `c`, or `None` for ASCII letters and digits.
///
/// Alphanumerics never need escaping in any context, so they have no representation.
///
/// ```
/// use css_codec::hex::hex;
/// assert_eq!(hex('<').as_deref(), Some("3c"));
/// assert_eq!(hex('a'), None);
/// ```
pub fn hex(c: char) -> Option<String> {
    if c.is_ascii_alphanumeric() {
        return None;
    }
    Some(format!("{:x}", u32::from(c)))
}
