//! Reversible key ↔ element-name transform
//!
//! Any Unicode string can be an extension key, but an element name must be
//! a non-empty XML name. Keys are mapped to names as follows:
//!
//! - a character allowed at its position in a name is kept as is, except `:`
//! - any other character becomes `_xHHHH_` (code point up to U+FFFF) or
//!   `_xHHHHHHHH_` (above), in uppercase hex
//! - `_` becomes `_x005F_` when the next character is `x`
//! - the empty key becomes the sentinel, verbatim
//!
//! Because a kept `_` is never followed by `x`, every `_x` in an encoded name
//! opens a well-formed escape, and decoding left to right recovers the key
//! exactly. Decoding is lenient: text that is not a well-formed escape is
//! taken literally, and escapes of characters that did not need escaping
//! are still honoured.
//!
//! The default sentinel `_xEmpty_` is outside the image of [`encode_name`],
//! so with it no key collides with the empty key. A sentinel that the
//! encoder can produce (for example `key`) makes that one key
//! indistinguishable from `""` after decoding.

use std::borrow::Cow;

/// Element name standing in for the empty extension key
pub const DEFAULT_EMPTY_KEY_SENTINEL: &str = "_xEmpty_";

/// Check the XML 1.0 `NameStartChar` production
pub fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Check the XML 1.0 `NameChar` production
pub fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Check if `name` is a valid unprefixed element name
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first != ':' && is_name_start_char(first) => {
            chars.all(|c| c != ':' && is_name_char(c))
        }
        _ => false,
    }
}

/// Escape `key` into a valid element name
///
/// The empty key encodes to the empty string; use [`encode_key`] to get the
/// sentinel instead.
pub fn encode_name(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        let allowed = c != ':'
            && if first {
                is_name_start_char(c)
            } else {
                is_name_char(c)
            };

        if c == '_' && chars.peek() == Some(&'x') {
            push_escape(&mut result, c);
        } else if allowed {
            result.push(c);
        } else {
            push_escape(&mut result, c);
        }
        first = false;
    }

    result
}

fn push_escape(result: &mut String, c: char) {
    let code = c as u32;
    if code <= 0xFFFF {
        result.push_str(&format!("_x{:04X}_", code));
    } else {
        result.push_str(&format!("_x{:08X}_", code));
    }
}

/// Reverse [`encode_name`]
pub fn decode_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut rest = name;

    while !rest.is_empty() {
        if let Some((c, len)) = parse_escape(rest) {
            result.push(c);
            rest = &rest[len..];
            continue;
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            result.push(c);
        }
        rest = chars.as_str();
    }

    result
}

/// Parse `_xHHHH_` or `_xHHHHHHHH_` at the start of `s`
fn parse_escape(s: &str) -> Option<(char, usize)> {
    let bytes = s.as_bytes();
    if !s.starts_with("_x") {
        return None;
    }

    for digits in [4, 8] {
        let end = 2 + digits;
        if bytes.len() > end
            && bytes[2..end].iter().all(u8::is_ascii_hexdigit)
            && bytes[end] == b'_'
        {
            let c = u32::from_str_radix(&s[2..end], 16)
                .ok()
                .and_then(char::from_u32)?;
            return Some((c, end + 1));
        }
    }

    None
}

/// Map an extension key to its element name
///
/// The empty key maps to `sentinel` before any escaping.
pub fn encode_key<'a>(key: &str, sentinel: &'a str) -> Cow<'a, str> {
    if key.is_empty() {
        Cow::Borrowed(sentinel)
    } else {
        Cow::Owned(encode_name(key))
    }
}

/// Map an element name back to its extension key
///
/// A name equal to `sentinel` maps to the empty key. The comparison is on
/// the raw name: an escaped spelling of the sentinel decodes as a real key.
pub fn decode_key(name: &str, sentinel: &str) -> String {
    if name == sentinel {
        String::new()
    } else {
        decode_name(name)
    }
}
