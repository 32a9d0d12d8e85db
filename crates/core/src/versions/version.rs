//! Numeric version identifiers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur while parsing a version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("malformed version '{input}': every component must be a number")]
    Malformed { input: String },
}

/// A release version as a tuple of numeric components.
///
/// Accepts both the dotted (`6.4.20.0`) and the dashed (`6-4-20-0`) spelling.
/// Ordering is lexicographic over the components; when one version is a strict
/// prefix of the other, the shorter one sorts first (`6.4 < 6.4.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::Malformed { input: input.to_string() };

        let parts = input
            .replace('-', ".")
            .split('.')
            .map(|part| part.trim().parse::<u64>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Vec ordering is already lexicographic with length extension.
        self.parts.cmp(&other.parts)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.parts.iter().map(u64::to_string).collect();
        write!(f, "{}", joined.join("."))
    }
}

/// Convert a directory-style version (`6-4-20-0`) to its dotted form.
pub fn to_dotted(version: &str) -> String {
    version.replace('-', ".")
}

/// Convert a dotted version (`6.4.20.0`) to its directory-style form.
pub fn to_dashed(version: &str) -> String {
    version.replace('.', "-")
}
