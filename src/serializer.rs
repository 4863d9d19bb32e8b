use crate::percent::{EncodingMode, escape};
use crate::url::Url;

/// Writes `url` back out as a string. Never fails; an inconsistent set of
/// fields still produces a best-effort string.
pub fn serialize_url(url: &Url) -> String {
    let mut out = String::new();
    if !url.scheme.is_empty() {
        out.push_str(&url.scheme);
        out.push(':');
    }

    if url.opaque.is_empty() {
        write_hierarchical_part(url, &mut out);
    } else {
        out.push_str(&url.opaque);
    }

    if !url.query.is_empty() {
        out.push('?');
        out.push_str(&url.query.serialize());
    }
    if !url.fragment.is_empty() {
        out.push('#');
        out.push_str(&escape(&url.fragment, EncodingMode::Fragment));
    }
    out
}

fn write_hierarchical_part(url: &Url, out: &mut String) {
    let has_host = !url.hostname.is_empty() || !url.port.is_empty();
    let has_username = !url.username.is_empty();

    if (!url.scheme.is_empty() || has_host || has_username)
        && (has_host || !url.path.is_empty() || has_username)
    {
        out.push_str("//");
    }

    if has_username {
        out.push_str(&escape(&url.username, EncodingMode::UsernamePassword));
    }
    if !url.password.is_empty() {
        out.push(':');
        out.push_str(&escape(&url.password, EncodingMode::UsernamePassword));
    }
    if has_username || !url.password.is_empty() {
        out.push('@');
    }

    out.push_str(&escape(&url.hostname, EncodingMode::Host));
    if !url.port.is_empty() {
        out.push(':');
        out.push_str(&url.port);
    }

    let path = if url.path == "*" {
        url.path.clone()
    } else {
        escape(&url.path, EncodingMode::Path)
    };
    if has_host && !path.is_empty() && !path.starts_with('/') {
        out.push('/');
    }
    // `a:b` on its own would read back as scheme `a`
    if out.is_empty() && first_segment_has_colon(&path) {
        out.push_str("./");
    }
    out.push_str(&path);
}

fn first_segment_has_colon(path: &str) -> bool {
    path.split('/')
        .next()
        .is_some_and(|segment| segment.contains(':'))
}
