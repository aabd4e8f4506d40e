//! Prerelease and build identifiers

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref PRERELEASE_IDENTIFIER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)$").unwrap();
    static ref BUILD_IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// A single dot-separated component of a prerelease tag (e.g. `alpha`, `1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrereleaseIdentifier(String);

impl PrereleaseIdentifier {
    /// Validate and wrap a single prerelease identifier
    pub fn parse(identifier: &str) -> Result<Self> {
        if !PRERELEASE_IDENTIFIER_RE.is_match(identifier) {
            return Err(Error::MalformedVersion(identifier.to_string()));
        }
        Ok(Self(identifier.to_string()))
    }

    /// Wrap a token already accepted by the version grammar
    pub(crate) fn new_unchecked(identifier: &str) -> Self {
        Self(identifier.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier consists only of ASCII digits
    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Ord for PrereleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_numeric(), other.is_numeric()) {
            // No leading zeros, so the longer number is the larger one
            (true, true) => self
                .0
                .len()
                .cmp(&other.0.len())
                .then_with(|| self.0.cmp(&other.0)),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.as_bytes().cmp(other.0.as_bytes()),
        }
    }
}

impl PartialOrd for PrereleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dot-separated component of build metadata. Carries no precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildIdentifier(String);

impl BuildIdentifier {
    /// Validate and wrap a single build identifier
    pub fn parse(identifier: &str) -> Result<Self> {
        if !BUILD_IDENTIFIER_RE.is_match(identifier) {
            return Err(Error::MalformedVersion(identifier.to_string()));
        }
        Ok(Self(identifier.to_string()))
    }

    pub(crate) fn new_unchecked(identifier: &str) -> Self {
        Self(identifier.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
