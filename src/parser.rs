//! Left-to-right URL parser.
//!
//! Each stage takes the unconsumed rest of the input, records what it
//! recognizes in the `Url` being built and hands the remainder to the next
//! stage. Stages run in a fixed order because later ones rely on earlier ones
//! having stripped their part (the query split assumes the fragment is gone,
//! the opaque check assumes the scheme is gone, and so on).

use std::sync::LazyLock;

use log::{debug, trace};

use crate::ascii::is_control_byte;
use crate::pattern::{Pattern, PatternError};
use crate::percent::{EncodingMode, unescape};
use crate::search::SearchParams;
use crate::url::Url;
use crate::{Error, Result};

static SCHEME_PATTERN: LazyLock<std::result::Result<Pattern, PatternError>> =
    LazyLock::new(|| Pattern::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):"));

/// Parses `input` into a [`Url`]. On failure nothing of the partially
/// parsed URL is returned.
pub fn parse_url(input: &str) -> Result<Url> {
    trace!("parsing url {input:?}");
    parse_stages(input).inspect_err(|err| debug!("rejected url {input:?}: {err}"))
}

fn parse_stages(input: &str) -> Result<Url> {
    let mut url = Url::default();

    let rest = take_fragment(input, &mut url)?;
    reject_control_bytes(rest)?;
    if rest == "*" {
        trace!("wildcard request target");
        url.path = "*".to_string();
        return Ok(url);
    }

    let rest = take_scheme(rest, &mut url)?;
    let rest = take_query(rest, &mut url)?;

    if !rest.starts_with('/') && !url.scheme.is_empty() {
        trace!("opaque url with scheme {:?}", url.scheme);
        url.opaque = rest.to_string();
        return Ok(url);
    }

    reject_colon_in_first_segment(rest)?;

    let rest = match rest.strip_prefix("//") {
        Some(after) if !url.scheme.is_empty() || !rest.starts_with("///") => {
            take_authority(after, &mut url)?
        }
        _ => rest,
    };

    url.path = unescape(rest, EncodingMode::Path)?;
    Ok(url)
}

fn take_fragment<'a>(input: &'a str, url: &mut Url) -> Result<&'a str> {
    let Some((rest, fragment)) = input.split_once('#') else {
        return Ok(input);
    };
    url.fragment = unescape(fragment, EncodingMode::Fragment)?;
    Ok(rest)
}

fn reject_control_bytes(rest: &str) -> Result<()> {
    match rest.bytes().find(|b| is_control_byte(*b)) {
        Some(b) => Err(Error::InvalidCharacter(b as char)),
        None => Ok(()),
    }
}

fn take_scheme<'a>(rest: &'a str, url: &mut Url) -> Result<&'a str> {
    if rest.starts_with(':') {
        return Err(Error::MissingScheme);
    }
    let pattern = SCHEME_PATTERN.as_ref().map_err(|err| Error::from(err.clone()))?;
    let Some(captures) = pattern.captures(rest)? else {
        return Ok(rest);
    };
    let Some(scheme) = captures.get(1) else {
        return Ok(rest);
    };
    url.scheme = scheme.as_str().to_ascii_lowercase();
    // the match ends right before the ':'
    Ok(&rest[scheme.end() + 1..])
}

fn take_query<'a>(rest: &'a str, url: &mut Url) -> Result<&'a str> {
    let Some((rest, query)) = rest.split_once('?') else {
        return Ok(rest);
    };
    if !query.is_empty() {
        url.query = SearchParams::parse_query_text(query)?;
    }
    Ok(rest)
}

fn reject_colon_in_first_segment(rest: &str) -> Result<()> {
    let first_segment = rest.split('/').next().unwrap_or_default();
    if first_segment.contains(':') {
        return Err(Error::ColonInFirstSegment(first_segment.to_string()));
    }
    Ok(())
}

fn take_authority<'a>(rest: &'a str, url: &mut Url) -> Result<&'a str> {
    let end = rest.find('/').unwrap_or(rest.len());
    let (authority, rest) = rest.split_at(end);

    let host = match authority.rfind('@') {
        Some(at) => {
            take_userinfo(&authority[..at], url)?;
            &authority[at + 1..]
        }
        None => authority,
    };
    take_host(host, url)?;
    Ok(rest)
}

fn take_userinfo(userinfo: &str, url: &mut Url) -> Result<()> {
    if let Some(ch) = userinfo.chars().find(|ch| !is_userinfo_char(*ch)) {
        return Err(Error::InvalidAuthorityChar(ch));
    }
    let (username, password) = userinfo.split_once(':').unwrap_or((userinfo, ""));
    url.username = unescape(username, EncodingMode::UsernamePassword)?;
    url.password = unescape(password, EncodingMode::UsernamePassword)?;
    Ok(())
}

fn is_userinfo_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '-' | '.'
                | '_'
                | ':'
                | '~'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
                | '@'
        )
}

fn take_host(host: &str, url: &mut Url) -> Result<()> {
    if let Some(inner) = host.strip_prefix('[') {
        let close = inner
            .find(']')
            .ok_or_else(|| Error::MissingClosingBracket(host.to_string()))?;
        url.hostname = bracketed_hostname(&inner[..close])?;
        let suffix = &inner[close + 1..];
        if !suffix.is_empty() {
            let port = suffix
                .strip_prefix(':')
                .ok_or_else(|| Error::InvalidPort(suffix.to_string()))?;
            url.port = checked_port(port)?;
        }
        return Ok(());
    }

    let (hostname, port) = host.rsplit_once(':').unwrap_or((host, ""));
    url.hostname = unescape(hostname, EncodingMode::Host)?;
    url.port = checked_port(port)?;
    Ok(())
}

// Only a `%25<zone>` suffix is decoded; the address part stays as written.
fn bracketed_hostname(literal: &str) -> Result<String> {
    let (address, zone) = match literal.find("%25") {
        Some(idx) => (&literal[..idx], unescape(&literal[idx..], EncodingMode::Host)?),
        None => (literal, String::new()),
    };
    Ok(format!("[{address}{zone}]"))
}

fn checked_port(port: &str) -> Result<String> {
    if port.bytes().all(|b| b.is_ascii_digit()) {
        Ok(port.to_string())
    } else {
        Err(Error::InvalidPort(port.to_string()))
    }
}
