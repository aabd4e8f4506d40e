//! Conjunction of canonical comparators

use std::fmt;
use std::str::FromStr;

use super::{split_clauses, RangeClause, RangeComparator};
use crate::error::{Error, Result};
use crate::version::SemanticVersion;

/// The expanded form of a range expression such as `>=1.2.3, <2.0.0` or
/// `^1.2, ^1`.
///
/// Every clause is expanded in order and the resulting comparators are
/// joined with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSet {
    comparators: Vec<RangeComparator>,
}

impl RangeSet {
    /// Create a range set from already expanded comparators
    pub fn new(comparators: Vec<RangeComparator>) -> Self {
        RangeSet { comparators }
    }

    /// Parse a comma-separated range expression.
    ///
    /// Empty segments are skipped. The first malformed clause aborts the
    /// whole parse.
    pub fn parse(range: &str) -> Result<Self> {
        let clauses = split_clauses(range);
        let mut comparators = Vec::with_capacity(clauses.len() * 2);

        for segment in &clauses {
            let clause = RangeClause::parse(segment)?;
            comparators.extend(clause.expand()?);
        }

        log::trace!(
            "Parsed range \"{}\": {} clause(s), {} comparator(s)",
            range,
            clauses.len(),
            comparators.len()
        );

        Ok(RangeSet { comparators })
    }

    /// Get the comparators in order
    pub fn comparators(&self) -> &[RangeComparator] {
        &self.comparators
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeComparator> {
        self.comparators.iter()
    }

    /// Check if `version` satisfies every comparator. Stops at the first
    /// comparator that fails.
    pub fn is_satisfied_by(&self, version: &SemanticVersion) -> bool {
        self.comparators.iter().all(|comparator| comparator.matches(version))
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a RangeComparator;
    type IntoIter = std::slice::Iter<'a, RangeComparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RangeSet {
    type Item = RangeComparator;
    type IntoIter = std::vec::IntoIter<RangeComparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparators.into_iter()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, comparator) in self.comparators.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{comparator}")?;
        }
        Ok(())
    }
}

impl FromStr for RangeSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RangeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RangeSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Operator;

    fn range(s: &str) -> RangeSet {
        RangeSet::parse(s).unwrap()
    }

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_comparator_counts() {
        assert_eq!(range(">= 1.2.3").len(), 1);
        assert_eq!(range("1.2.3").len(), 1);
        assert_eq!(range(">=1.2.3, <2.0.0").len(), 2);
        assert_eq!(range("~1.2.3").len(), 2);
        assert_eq!(range("^1.2.3").len(), 2);
        assert_eq!(range("^1.2, ^1").len(), 4);
        assert_eq!(range("\t<1.2.3\t").len(), 1);
    }

    #[test]
    fn test_expansion_order() {
        let parsed = range("^1.2, <1.5");
        let rendered: Vec<String> = parsed.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec![">=1.2.0", "<2.0.0", "<1.5.0"]);
        assert_eq!(parsed.comparators()[2].operator(), Operator::LessThan);
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(range(",>=1.0.0,,<2.0.0,").len(), 2);
        assert!(range("").is_empty());
        assert!(range(",").is_empty());
    }

    #[test]
    fn test_empty_range_matches_everything() {
        assert!(range("").is_satisfied_by(&v("0.0.0")));
        assert!(range("").is_satisfied_by(&v("99.0.0-alpha")));
    }

    #[test]
    fn test_whitespace_segment_is_malformed() {
        assert_eq!(
            RangeSet::parse(">=1.0.0, ,<2.0.0").unwrap_err(),
            Error::MalformedRange(String::new())
        );
    }

    #[test]
    fn test_first_malformed_clause_aborts() {
        assert_eq!(
            RangeSet::parse(">=1.0.0, !=1.5.0, <2.x").unwrap_err(),
            Error::MalformedRange("!=1.5.0".to_string())
        );
        assert_eq!(
            RangeSet::parse(">= 1.2.3 < 2").unwrap_err(),
            Error::MalformedRange(">= 1.2.3 < 2".to_string())
        );
    }

    #[test]
    fn test_is_satisfied_by_conjunction() {
        assert!(range(">= 1.2.3, < 2.0.0").is_satisfied_by(&v("1.2.3")));
        assert!(!range(">= 1.2.3, < 2.0.0").is_satisfied_by(&v("2.0.0")));
        assert!(range("^1.2, ^1").is_satisfied_by(&v("1.3.0")));
        assert!(!range("^1.2, ^2").is_satisfied_by(&v("1.3.0")));
        assert!(!range(">=2.0.0, <1.0.0").is_satisfied_by(&v("1.5.0")));
    }

    #[test]
    fn test_version_satisfies_delegates() {
        let parsed = range("~1.2.3");
        assert!(v("1.2.4").satisfies(&parsed));
        assert!(!v("1.3.0").satisfies(&parsed));
    }

    #[test]
    fn test_display_and_reparse() {
        let parsed = range("^1.2, ~0.3.1-rc.1, 4");
        assert_eq!(parsed.to_string(), ">=1.2.0, <2.0.0, >=0.3.1-rc.1, <0.4.0, =4.0.0");
        assert_eq!(range(&parsed.to_string()), parsed);
    }

    #[test]
    fn test_into_iterator() {
        let parsed = range(">1.0.0, <=3.0.0");
        let operators: Vec<Operator> = (&parsed).into_iter().map(|c| c.operator()).collect();
        assert_eq!(operators, vec![Operator::GreaterThan, Operator::LessThanOrEqual]);

        let owned: Vec<RangeComparator> = parsed.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let parsed = range("^1.2.3");
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, "\">=1.2.3, <2.0.0\"");
        let back: RangeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
        assert!(serde_json::from_str::<RangeSet>("\">= 1.x\"").is_err());
    }
}
