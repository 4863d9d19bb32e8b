//! Percent-encoding and percent-decoding.
//!
//! Two families live here. The browser-compatible functions
//! ([`encode_uri_component`], [`encode_uri`] and their decoders) use the fixed
//! ECMAScript unreserved sets. [`escape`] and [`unescape`] pick the unreserved
//! set from an [`EncodingMode`], one per URL component.

use crate::ascii::{from_hex_digit, push_percent_byte};
use crate::{Error, Result};

/// The URL component a string is being escaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    UsernamePassword,
    Host,
    Path,
    Fragment,
    /// A query key or value. Spaces are written as `+`.
    QueryComponent,
}

/// Escapes every byte outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(src: &str) -> String {
    encode_uri_like(src, true)
}

/// Like [`encode_uri_component`], but keeps the delimiters `; / ? : @ & = + $ , #`
/// so a whole URI can be encoded without breaking its structure.
pub fn encode_uri(src: &str) -> String {
    encode_uri_like(src, false)
}

/// Decodes every `%XX` escape.
///
/// Fails with [`Error::MalformedEscape`] when a `%` is not followed by two hex
/// digits, and with [`Error::MalformedUtf8`] when the decoded bytes are not UTF-8.
pub fn decode_uri_component(src: &str) -> Result<String> {
    decode_percent(src, false, false)
}

/// Decodes `%XX` escapes except those that produce one of the delimiters kept
/// by [`encode_uri`]; those stay escaped.
pub fn decode_uri(src: &str) -> Result<String> {
    decode_percent(src, false, true)
}

/// Escapes `src` for use as the given URL component.
pub fn escape(src: &str, mode: EncodingMode) -> String {
    if mode == EncodingMode::Host {
        if let Some(out) = escape_bracketed_host(src) {
            return out;
        }
        // outside brackets a bare ':' reads back as the port separator
        return escape_bytes(src, mode).replace(':', "%3A");
    }
    escape_bytes(src, mode)
}

/// Reverses [`escape`]. In [`EncodingMode::QueryComponent`] a `+` decodes to a space.
pub fn unescape(src: &str, mode: EncodingMode) -> Result<String> {
    decode_percent(src, mode == EncodingMode::QueryComponent, false)
}

fn encode_uri_like(src: &str, component: bool) -> String {
    let mut out = String::with_capacity(src.len());
    for b in src.bytes() {
        if is_unescaped_uri_byte(b, component) {
            out.push(b as char);
        } else {
            push_percent_byte(&mut out, b);
        }
    }
    out
}

fn escape_bytes(src: &str, mode: EncodingMode) -> String {
    let mut out = String::with_capacity(src.len());
    for b in src.bytes() {
        if b == b' ' && mode == EncodingMode::QueryComponent {
            out.push('+');
        } else if should_escape(b, mode) {
            push_percent_byte(&mut out, b);
        } else {
            out.push(b as char);
        }
    }
    out
}

// `[addr%zone]` is written as `[addr%25zone]`: the address stays verbatim and
// only the zone identifier is escaped.
fn escape_bracketed_host(src: &str) -> Option<String> {
    let inner = src.strip_prefix('[')?;
    let close = inner.find(']')?;
    let literal = &inner[..close];
    let trailing = &inner[close + 1..];

    let mut out = String::with_capacity(src.len() + 2);
    out.push('[');
    match literal.split_once('%') {
        Some((address, zone)) => {
            out.push_str(address);
            out.push_str("%25");
            out.push_str(&escape_bytes(zone, EncodingMode::Host));
        }
        None => out.push_str(literal),
    }
    out.push(']');
    out.push_str(&escape_bytes(trailing, EncodingMode::Host));
    Some(out)
}

fn decode_percent(src: &str, plus_as_space: bool, keep_delimiters: bool) -> Result<String> {
    let bytes = src.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let value = parse_percent_byte(src, i)?;
                if keep_delimiters && is_uri_delimiter(value) {
                    out.extend_from_slice(&bytes[i..i + 3]);
                } else {
                    out.push(value);
                }
                i += 3;
            }
            b'+' if plus_as_space => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| Error::MalformedUtf8(src.to_string()))
}

fn parse_percent_byte(src: &str, offset: usize) -> Result<u8> {
    let bytes = src.as_bytes();
    let malformed = || Error::MalformedEscape(src[offset..].chars().take(3).collect());
    if offset + 2 >= bytes.len() {
        return Err(malformed());
    }
    let hi = from_hex_digit(bytes[offset + 1]).ok_or_else(malformed)?;
    let lo = from_hex_digit(bytes[offset + 2]).ok_or_else(malformed)?;
    Ok((hi << 4) | lo)
}

fn is_unescaped_uri_byte(b: u8, component: bool) -> bool {
    if b.is_ascii_alphanumeric() {
        return true;
    }
    if matches!(
        b,
        b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
    ) {
        return true;
    }
    !component && is_uri_delimiter(b)
}

fn is_uri_delimiter(b: u8) -> bool {
    matches!(
        b,
        b';' | b',' | b'/' | b'?' | b':' | b'@' | b'&' | b'=' | b'+' | b'$' | b'#'
    )
}

fn should_escape(b: u8, mode: EncodingMode) -> bool {
    if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
        return false;
    }

    if mode == EncodingMode::Host
        && matches!(
            b,
            b'!' | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'['
                | b']'
                | b'<'
                | b'>'
                | b'"'
        )
    {
        return false;
    }

    if matches!(
        b,
        b'$' | b'&' | b'+' | b',' | b'/' | b':' | b';' | b'=' | b'?' | b'@'
    ) {
        return match mode {
            EncodingMode::Path => b == b'?',
            EncodingMode::UsernamePassword => matches!(b, b'@' | b'/' | b'?' | b':'),
            EncodingMode::QueryComponent => true,
            EncodingMode::Fragment => false,
            EncodingMode::Host => true,
        };
    }

    !(mode == EncodingMode::Fragment && matches!(b, b'!' | b'(' | b')' | b'*'))
}
