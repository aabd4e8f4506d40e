//! Semantic version parsing, formatting and precedence

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::RangeSet;
use crate::error::{Error, Result};
use crate::identifier::{BuildIdentifier, PrereleaseIdentifier};

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(
        r"^\s*(?P<major>0|[1-9][0-9]*)(?:\.(?P<minor>0|[1-9][0-9]*)(?:\.(?P<patch>0|[1-9][0-9]*))?)?(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*))*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?\s*$"
    )
    .unwrap();
}

/// Which numeric components the source text left out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OmittedComponents {
    /// `X.Y.Z`
    #[default]
    None,
    /// `X.Y`
    PatchOmitted,
    /// `X`
    MinorAndPatchOmitted,
}

/// A parsed semantic version.
///
/// Equality, hashing and ordering follow SemVer 2.0.0 precedence: build
/// identifiers and the [`OmittedComponents`] tag are ignored, so `1.2` and
/// `1.2.0+build.5` compare equal.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<PrereleaseIdentifier>,
    build: Vec<BuildIdentifier>,
    omitted: OmittedComponents,
}

impl SemanticVersion {
    /// Create a release version with all three components specified
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
            omitted: OmittedComponents::None,
        }
    }

    /// Parse `major[.minor[.patch]][-prerelease][+build]`, ignoring
    /// surrounding whitespace.
    ///
    /// A missing minor or patch defaults to `0` and is recorded in
    /// [`SemanticVersion::omitted_components`].
    pub fn parse(version: &str) -> Result<Self> {
        let malformed = || Error::MalformedVersion(version.to_string());

        let caps = VERSION_RE.captures(version).ok_or_else(malformed)?;

        let number = |name: &str| -> Result<Option<u64>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| malformed()))
                .transpose()
        };

        let major = number("major")?.ok_or_else(malformed)?;
        let minor = number("minor")?;
        let patch = number("patch")?;

        let omitted = match (minor, patch) {
            (None, _) => OmittedComponents::MinorAndPatchOmitted,
            (Some(_), None) => OmittedComponents::PatchOmitted,
            (Some(_), Some(_)) => OmittedComponents::None,
        };

        let prerelease: Vec<PrereleaseIdentifier> = caps
            .name("prerelease")
            .map(|m| {
                m.as_str()
                    .split('.')
                    .map(PrereleaseIdentifier::new_unchecked)
                    .collect()
            })
            .unwrap_or_default();

        let build: Vec<BuildIdentifier> = caps
            .name("build")
            .map(|m| m.as_str().split('.').map(BuildIdentifier::new_unchecked).collect())
            .unwrap_or_default();

        Ok(SemanticVersion {
            major,
            minor: minor.unwrap_or(0),
            patch: patch.unwrap_or(0),
            prerelease,
            build,
            omitted,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &[PrereleaseIdentifier] {
        &self.prerelease
    }

    pub fn build(&self) -> &[BuildIdentifier] {
        &self.build
    }

    /// Which components were left out of the source text. Only range
    /// expansion looks at this.
    pub fn omitted_components(&self) -> OmittedComponents {
        self.omitted
    }

    /// Check if this version carries prerelease identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Check if this version satisfies every comparator in `range`
    pub fn satisfies(&self, range: &RangeSet) -> bool {
        range.is_satisfied_by(self)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.prerelease.cmp(&other.prerelease),
            })
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, identifier) in self.prerelease.iter().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            write!(f, "{identifier}")?;
        }
        for (i, identifier) in self.build.iter().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            write!(f, "{identifier}")?;
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SemanticVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SemanticVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
