use css_codec::hex::hex;
use css_codec::{Codec, CssCodec};

fn encode_char(immune: &[char], c: char) -> String {
    CssCodec.encode_char(immune, c)
}

// ============================================================================
// Pass-through
// ============================================================================

#[test]
fn ascii_alphanumerics_pass_through() {
    for c in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
        assert_eq!(encode_char(&[], c), c.to_string());
    }
}

#[test]
fn immune_characters_pass_through() {
    let immune = [' ', ',', '#', '<'];
    for c in immune {
        assert_eq!(encode_char(&immune, c), c.to_string());
    }
}

#[test]
fn immune_set_only_exempts_its_members() {
    assert_eq!(encode_char(&[','], ';'), "\\3b ");
}

// ============================================================================
// Hex escapes
// ============================================================================

#[test]
fn punctuation_is_hex_escaped_with_trailing_space() {
    assert_eq!(encode_char(&[], '<'), "\\3c ");
    assert_eq!(encode_char(&[], '>'), "\\3e ");
    assert_eq!(encode_char(&[], '"'), "\\22 ");
    assert_eq!(encode_char(&[], '\''), "\\27 ");
    assert_eq!(encode_char(&[], '\\'), "\\5c ");
    assert_eq!(encode_char(&[], '{'), "\\7b ");
}

#[test]
fn whitespace_and_controls_are_escaped() {
    assert_eq!(encode_char(&[], ' '), "\\20 ");
    assert_eq!(encode_char(&[], '\n'), "\\a ");
    assert_eq!(encode_char(&[], '\0'), "\\0 ");
}

#[test]
fn non_ascii_letters_are_escaped() {
    assert_eq!(encode_char(&[], '\u{e9}'), "\\e9 ");
    assert_eq!(encode_char(&[], '\u{4f60}'), "\\4f60 ");
    assert_eq!(encode_char(&[], '\u{1F600}'), "\\1f600 ");
    assert_eq!(encode_char(&[], '\u{10FFFF}'), "\\10ffff ");
}

#[test]
fn hex_has_no_representation_for_alphanumerics() {
    assert_eq!(hex('a'), None);
    assert_eq!(hex('Z'), None);
    assert_eq!(hex('7'), None);
    assert_eq!(hex('-').as_deref(), Some("2d"));
}

#[test]
fn every_non_alphanumeric_has_a_non_empty_escape() {
    for c in ['\0', '-', '_', '\u{a0}', '\u{FFFD}', '\u{10FFFF}'] {
        let fragment = encode_char(&[], c);
        assert!(fragment.len() > 2, "{c:?} gave {fragment:?}");
        assert!(fragment.starts_with('\\') && fragment.ends_with(' '));
    }
}

// ============================================================================
// Whole strings
// ============================================================================

#[test]
fn encode_string_concatenates_fragments() {
    let escaped = CssCodec.encode(&[], "B&W?");
    assert_eq!(escaped, "B\\26 W\\3f ");
}

#[test]
fn encode_style_breakout() {
    let escaped = CssCodec.encode(&[], "red;}</style><script>");
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('}'));
    assert!(!escaped.contains(';'));
    assert!(escaped.starts_with("red\\3b \\7d "));
}

#[test]
fn encode_empty_string() {
    assert_eq!(CssCodec.encode(&[], ""), "");
}

#[test]
fn encode_with_immune_space() {
    assert_eq!(CssCodec.encode(&[' '], "a b!"), "a b\\21 ");
}

#[test]
fn trailing_space_keeps_following_hex_digit_out_of_escape() {
    // '&' followed by 'B' must not decode as U+026B.
    let escaped = CssCodec.encode(&[], "&B");
    assert_eq!(escaped, "\\26 B");
    assert_eq!(CssCodec.decode(&escaped).unwrap(), "&B");
}
