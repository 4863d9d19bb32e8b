use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::percent::{EncodingMode, escape, unescape};
use crate::{Error, Result};

/// Ordered query parameters. Duplicate names are allowed and insertion order
/// is kept, so a parsed query serializes back in the order it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name=value` pairs separated by `&`. A leading `?` is ignored,
    /// empty pairs are skipped and a pair without `=` gets an empty value.
    pub fn parse(query: &str) -> Result<Self> {
        Self::parse_query_text(query.strip_prefix('?').unwrap_or(query))
    }

    /// Like [`SearchParams::parse`], but every character of `query` belongs
    /// to the pairs, including a leading `?`.
    pub(crate) fn parse_query_text(query: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for part in query.split('&') {
            if part.is_empty() {
                continue;
            }
            let (raw_name, raw_value) = part.split_once('=').unwrap_or((part, ""));
            let name = unescape(raw_name, EncodingMode::QueryComponent)?;
            let value = unescape(raw_value, EncodingMode::QueryComponent)?;
            pairs.push((name, value));
        }
        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    /// Replaces the first pair named `name` and drops the others. Appends when
    /// there is no such pair.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(first) = self.pairs.iter().position(|(key, _)| key == name) else {
            self.pairs.push((name.to_string(), value));
            return;
        };
        self.pairs[first].1 = value;
        let mut idx = 0usize;
        self.pairs.retain(|(key, _)| {
            let keep = idx <= first || key != name;
            idx += 1;
            keep
        });
    }

    pub fn delete(&mut self, name: &str) {
        self.pairs.retain(|(key, _)| key != name);
    }

    /// Stable sort by name; pairs sharing a name keep their relative order.
    pub fn sort(&mut self) {
        self.pairs.sort_by(|(left, _), (right, _)| left.cmp(right));
    }

    pub fn serialize(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    escape(name, EncodingMode::QueryComponent),
                    escape(value, EncodingMode::QueryComponent)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Parses a query string into [`SearchParams`].
pub fn parse_search(query: &str) -> Result<SearchParams> {
    SearchParams::parse(query).inspect_err(|err| debug!("rejected query {query:?}: {err}"))
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for SearchParams {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_search(s)
    }
}

impl From<Vec<(String, String)>> for SearchParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { pairs }
    }
}

impl<'a> IntoIterator for &'a SearchParams {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
