//! Canonical `(operator, version)` comparator

use std::fmt;

use super::Operator;
use crate::comparator::Comparator;
use crate::version::SemanticVersion;

/// A single canonical comparator such as `>=1.2.3`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeComparator {
    operator: Operator,
    version: SemanticVersion,
}

impl RangeComparator {
    /// Create a new comparator
    pub fn new(operator: Operator, version: SemanticVersion) -> Self {
        RangeComparator { operator, version }
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version bound
    pub fn version(&self) -> &SemanticVersion {
        &self.version
    }

    /// Check if `version` satisfies this comparator
    pub fn matches(&self, version: &SemanticVersion) -> bool {
        Comparator::compare(version, self.operator, &self.version)
    }
}

impl fmt::Display for RangeComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparator(operator: Operator, version: &str) -> RangeComparator {
        RangeComparator::new(operator, SemanticVersion::parse(version).unwrap())
    }

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).unwrap()
    }

    #[test]
    fn test_matches() {
        let c = comparator(Operator::GreaterThanOrEqual, "1.2.3");
        assert!(c.matches(&v("1.2.3")));
        assert!(c.matches(&v("1.2.4")));
        assert!(!c.matches(&v("1.2.2")));

        let c = comparator(Operator::LessThan, "1.2.3-alpha");
        assert!(!c.matches(&v("1.2.3-alpha")));
        assert!(!c.matches(&v("1.2.3-beta")));
        assert!(c.matches(&v("1.2.2")));

        let c = comparator(Operator::Equal, "1.2.3+build.1");
        assert!(c.matches(&v("1.2.3+build.2")));
        assert!(!c.matches(&v("1.2.4")));
    }

    #[test]
    fn test_display() {
        assert_eq!(comparator(Operator::LessThanOrEqual, "1.2").to_string(), "<=1.2.0");
        assert_eq!(comparator(Operator::Equal, "1.0.0-rc.1").to_string(), "=1.0.0-rc.1");
    }

    #[test]
    fn test_accessors() {
        let c = comparator(Operator::GreaterThan, "3.1.4");
        assert_eq!(c.operator(), Operator::GreaterThan);
        assert_eq!(c.version(), &v("3.1.4"));
    }
}
