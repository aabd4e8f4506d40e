//! Range clause grammar: `[operator] version`

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::expand::expand;
use super::{ClauseOperator, RangeComparator};
use crate::error::{Error, Result};
use crate::version::{OmittedComponents, SemanticVersion};

lazy_static! {
    static ref CLAUSE_RE: Regex =
        Regex::new(r"^\s*(?:(?P<operator>>=|<=|>|<|\^|~|=)\s*)?(?P<version>.+?)\s*$").unwrap();
}

/// One comma-separated segment of a range expression, before expansion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeClause {
    operator: ClauseOperator,
    version: SemanticVersion,
}

impl RangeClause {
    /// Create a clause from an already parsed version
    pub fn new(operator: ClauseOperator, version: SemanticVersion) -> Self {
        RangeClause { operator, version }
    }

    /// Parse a single clause such as `>= 1.2.3` or `^1.2`.
    ///
    /// A missing operator means `=`. The clause must not contain a comma.
    pub fn parse(clause: &str) -> Result<Self> {
        let malformed = || Error::MalformedRange(clause.trim().to_string());

        if clause.contains(',') {
            return Err(malformed());
        }

        let caps = CLAUSE_RE.captures(clause).ok_or_else(malformed)?;

        let operator = match caps.name("operator") {
            Some(m) => m.as_str().parse::<ClauseOperator>()?,
            None => ClauseOperator::Equal,
        };

        let version = caps
            .name("version")
            .ok_or_else(malformed)
            .and_then(|m| SemanticVersion::parse(m.as_str()).map_err(|_| malformed()))?;

        Ok(RangeClause { operator, version })
    }

    pub fn operator(&self) -> ClauseOperator {
        self.operator
    }

    pub fn version(&self) -> &SemanticVersion {
        &self.version
    }

    /// Expand into canonical comparators. Tilde and caret clauses yield a
    /// `>=`/`<` pair, every other clause a single comparator.
    pub fn expand(&self) -> Result<Vec<RangeComparator>> {
        expand(self.operator, &self.version)
    }
}

/// Split a range expression on `,`, dropping empty segments
pub fn split_clauses(range: &str) -> Vec<&str> {
    range.split(',').filter(|segment| !segment.is_empty()).collect()
}

impl fmt::Display for RangeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = &self.version;
        write!(f, "{}{}", self.operator, version.major())?;
        match version.omitted_components() {
            OmittedComponents::MinorAndPatchOmitted => {}
            OmittedComponents::PatchOmitted => write!(f, ".{}", version.minor())?,
            OmittedComponents::None => write!(f, ".{}.{}", version.minor(), version.patch())?,
        }
        for (i, identifier) in version.prerelease().iter().enumerate() {
            write!(f, "{}{identifier}", if i == 0 { "-" } else { "." })?;
        }
        for (i, identifier) in version.build().iter().enumerate() {
            write!(f, "{}{identifier}", if i == 0 { "+" } else { "." })?;
        }
        Ok(())
    }
}

impl FromStr for RangeClause {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
