use super::*;

#[test]
fn encode_uri_component_escapes_delimiters() {
    assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_uri_component("x y"), "x%20y");
    assert_eq!(encode_uri_component("/?#"), "%2F%3F%23");
}

#[test]
fn encode_uri_component_keeps_unreserved_marks() {
    assert_eq!(encode_uri_component("AZaz09-._~!*'()"), "AZaz09-._~!*'()");
}

#[test]
fn encode_uri_component_escapes_utf8_bytes_with_upper_hex() {
    assert_eq!(encode_uri_component("日本"), "%E6%97%A5%E6%9C%AC");
    assert_eq!(encode_uri_component("é"), "%C3%A9");
}

#[test]
fn encode_uri_keeps_uri_structure() {
    assert_eq!(
        encode_uri("https://a.example/a b?x=1&y=2#f"),
        "https://a.example/a%20b?x=1&y=2#f"
    );
    assert_eq!(encode_uri(";/?:@&=+$,#"), ";/?:@&=+$,#");
    assert_eq!(encode_uri("a b?x=1"), "a%20b?x=1");
}

#[test]
fn decode_uri_component_reverses_encoding() -> Result<()> {
    assert_eq!(decode_uri_component("a%20b%26c%3Dd")?, "a b&c=d");
    assert_eq!(decode_uri_component("%E6%97%A5%E6%9C%AC")?, "日本");
    assert_eq!(decode_uri_component("%c3%a9")?, "é");
    assert_eq!(decode_uri_component("a+b")?, "a+b");
    Ok(())
}

#[test]
fn decode_uri_component_rejects_truncated_escapes() {
    assert_eq!(
        decode_uri_component("%4"),
        Err(Error::MalformedEscape("%4".into()))
    );
    assert_eq!(
        decode_uri_component("abc%"),
        Err(Error::MalformedEscape("%".into()))
    );
    assert_eq!(
        decode_uri_component("%E0%A4%A"),
        Err(Error::MalformedEscape("%A".into()))
    );
}

#[test]
fn decode_uri_component_rejects_non_hex_escapes() {
    assert_eq!(
        decode_uri_component("%zz"),
        Err(Error::MalformedEscape("%zz".into()))
    );
    assert_eq!(
        decode_uri_component("x%4g"),
        Err(Error::MalformedEscape("%4g".into()))
    );
}

#[test]
fn decode_uri_component_rejects_invalid_utf8() {
    let err = decode_uri_component("%FF").expect_err("lone 0xFF is not UTF-8");
    assert_eq!(err, Error::MalformedUtf8("%FF".into()));
}

#[test]
fn decode_uri_keeps_escaped_delimiters() -> Result<()> {
    assert_eq!(
        decode_uri("https://a.example/a%20b?x=1&y=2#f")?,
        "https://a.example/a b?x=1&y=2#f"
    );
    assert_eq!(decode_uri("%3Fx%3D1")?, "%3Fx%3D1");
    assert_eq!(decode_uri("%41%2f")?, "A%2f");
    Ok(())
}

#[test]
fn query_component_mode_uses_plus_for_space() -> Result<()> {
    assert_eq!(escape("a b", EncodingMode::QueryComponent), "a+b");
    assert_eq!(escape("a+b&c", EncodingMode::QueryComponent), "a%2Bb%26c");
    assert_eq!(
        escape("$,/:;=?@", EncodingMode::QueryComponent),
        "%24%2C%2F%3A%3B%3D%3F%40"
    );
    assert_eq!(unescape("a+b%2B", EncodingMode::QueryComponent)?, "a b+");
    Ok(())
}

#[test]
fn path_mode_escapes_question_mark_only_among_reserved() -> Result<()> {
    assert_eq!(escape("/a b?c", EncodingMode::Path), "/a%20b%3Fc");
    assert_eq!(escape("a:b@c;d=e&f$g+h,i", EncodingMode::Path), "a:b@c;d=e&f$g+h,i");
    assert_eq!(escape("50%!", EncodingMode::Path), "50%25%21");
    assert_eq!(unescape("a+b%20c", EncodingMode::Path)?, "a+b c");
    Ok(())
}

#[test]
fn username_password_mode_escapes_authority_delimiters() {
    assert_eq!(
        escape("us@er:x/y?", EncodingMode::UsernamePassword),
        "us%40er%3Ax%2Fy%3F"
    );
    assert_eq!(escape("a$&+,;=", EncodingMode::UsernamePassword), "a$&+,;=");
}

#[test]
fn fragment_mode_keeps_reserved_and_marks() {
    assert_eq!(escape("frag ment?/!", EncodingMode::Fragment), "frag%20ment?/!");
    assert_eq!(escape("(x)*@:", EncodingMode::Fragment), "(x)*@:");
    assert_eq!(escape("a#b", EncodingMode::Fragment), "a%23b");
}

#[test]
fn host_mode_keeps_sub_delimiters_and_escapes_the_rest() {
    assert_eq!(escape("ex!ample.com", EncodingMode::Host), "ex!ample.com");
    assert_eq!(escape("a b.com", EncodingMode::Host), "a%20b.com");
    assert_eq!(escape("é.com", EncodingMode::Host), "%C3%A9.com");
    assert_eq!(escape("a/b@c", EncodingMode::Host), "a%2Fb%40c");
}

#[test]
fn host_mode_escapes_colon_outside_brackets() {
    assert_eq!(escape("a:b", EncodingMode::Host), "a%3Ab");
    assert_eq!(escape("[::1]", EncodingMode::Host), "[::1]");
}

#[test]
fn host_mode_writes_bracketed_literals_verbatim() {
    assert_eq!(escape("[::1]", EncodingMode::Host), "[::1]");
    assert_eq!(escape("[2001:db8::7]", EncodingMode::Host), "[2001:db8::7]");
}

#[test]
fn host_mode_escapes_zone_identifier_marker() {
    assert_eq!(escape("[fe80::1%en0]", EncodingMode::Host), "[fe80::1%25en0]");
    assert_eq!(
        escape("[fe80::1%eth 0]", EncodingMode::Host),
        "[fe80::1%25eth%200]"
    );
}
