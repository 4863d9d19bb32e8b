use std::fmt;
use std::str::FromStr;

use crate::parser::parse_url;
use crate::search::SearchParams;
use crate::serializer::serialize_url;
use crate::{Error, Result};

/// A URL split into its components.
///
/// Every field is stored decoded, except `opaque`, which keeps the text after
/// `scheme:` verbatim for non-hierarchical URLs such as `mailto:`. An empty
/// field means the component is absent. When `opaque` is set the authority
/// fields and `path` are not meaningful.
///
/// Bracketed IPv6 hosts keep their brackets, e.g. `[fe80::1%en0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    pub scheme: String,
    pub username: String,
    pub password: String,
    pub hostname: String,
    /// Decimal digits only.
    pub port: String,
    pub fragment: String,
    pub opaque: String,
    pub path: String,
    pub query: SearchParams,
}

impl Url {
    pub fn parse(input: &str) -> Result<Self> {
        parse_url(input)
    }

    pub fn is_absolute(&self) -> bool {
        !self.scheme.is_empty()
    }

    pub fn is_opaque(&self) -> bool {
        !self.opaque.is_empty()
    }

    /// `hostname[:port]`.
    pub fn host(&self) -> String {
        if self.port.is_empty() {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    pub fn origin(&self) -> String {
        if self.is_absolute() && !self.is_opaque() && !self.hostname.is_empty() {
            format!("{}://{}", self.scheme, self.host())
        } else {
            "null".to_string()
        }
    }

    /// The serialized query with its leading `?`, or an empty string.
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", self.query)
        }
    }

    pub fn paths(&self) -> Vec<String> {
        paths(&self.path)
    }
}

/// Splits a path into segments. A single leading `/` is ignored, so `/a/b` and
/// `a/b` give the same segments, and `/` and `` give none.
pub fn paths(path: &str) -> Vec<String> {
    let relative = path.strip_prefix('/').unwrap_or(path);
    if relative.is_empty() {
        return Vec::new();
    }
    relative.split('/').map(str::to_string).collect()
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_url(self))
    }
}

impl FromStr for Url {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_url(s)
    }
}
