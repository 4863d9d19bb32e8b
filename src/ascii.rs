pub(crate) fn is_control_byte(b: u8) -> bool {
    b < 0x20 || b == 0x7F
}

pub(crate) fn from_hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

pub(crate) fn to_hex_upper(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        10..=15 => (b'A' + (nibble - 10)) as char,
        _ => '?',
    }
}

pub(crate) fn push_percent_byte(out: &mut String, b: u8) {
    out.push('%');
    out.push(to_hex_upper((b >> 4) & 0x0F));
    out.push(to_hex_upper(b & 0x0F));
}
