//! Parse URLs into their components and write them back out.
//!
//! [`parse_url`] decomposes a string into a [`Url`] (scheme, userinfo, host,
//! port, path, query and fragment) and [`serialize_url`] turns a [`Url`] back
//! into a string. The percent-encoding helpers both of them use are exported as
//! well, including the browser-compatible [`encode_uri_component`] family.
//!
//! ```
//! use url_parts::parse_url;
//!
//! let url = parse_url("https://example.com:8042/over/there?name=ferret#nose")?;
//! assert_eq!(url.hostname, "example.com");
//! assert_eq!(url.port, "8042");
//! assert_eq!(url.query.get("name"), Some("ferret"));
//! assert_eq!(url.to_string(), "https://example.com:8042/over/there?name=ferret#nose");
//! # Ok::<(), url_parts::Error>(())
//! ```

use std::error::Error as StdError;
use std::fmt;

mod ascii;
mod parser;
mod pattern;
mod percent;
mod search;
mod serializer;
mod url;

pub use parser::parse_url;
pub use percent::{
    EncodingMode, decode_uri, decode_uri_component, encode_uri, encode_uri_component, escape,
    unescape,
};
pub use search::{SearchParams, parse_search};
pub use serializer::serialize_url;
pub use url::{Url, paths};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input starts with `:`.
    MissingScheme,
    /// An ASCII control byte outside the fragment.
    InvalidCharacter(char),
    /// A relative path whose first segment contains `:`.
    ColonInFirstSegment(String),
    InvalidAuthorityChar(char),
    MissingClosingBracket(String),
    InvalidPort(String),
    /// A `%` not followed by two hex digits.
    MalformedEscape(String),
    /// Percent-decoding produced bytes that are not UTF-8.
    MalformedUtf8(String),
    Pattern(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme => write!(f, "missing protocol scheme"),
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid control character in URL: {:?}", ch)
            }
            Self::ColonInFirstSegment(segment) => write!(
                f,
                "first path segment in URL cannot contain colon: {segment:?}"
            ),
            Self::InvalidAuthorityChar(ch) => {
                write!(f, "invalid character {ch:?} in userinfo")
            }
            Self::MissingClosingBracket(host) => write!(f, "missing ']' in host {host:?}"),
            Self::InvalidPort(port) => write!(f, "invalid port {port:?} after host"),
            Self::MalformedEscape(escape) => write!(f, "invalid URL escape {escape:?}"),
            Self::MalformedUtf8(src) => {
                write!(f, "percent-decoded {src:?} is not valid UTF-8")
            }
            Self::Pattern(msg) => write!(f, "pattern error: {msg}"),
        }
    }
}

impl StdError for Error {}

impl From<pattern::PatternError> for Error {
    fn from(value: pattern::PatternError) -> Self {
        Self::Pattern(value.to_string())
    }
}

#[cfg(test)]
mod tests;
