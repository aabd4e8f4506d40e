//! Version comparison utilities

use std::cmp::Ordering;

use crate::constraint::Operator;
use crate::version::SemanticVersion;

/// Comparator for comparing parsed versions by precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        !Self::equal_to(version1, version2)
    }

    /// Three-way precedence comparison, build metadata excluded
    pub fn order(version1: &SemanticVersion, version2: &SemanticVersion) -> Ordering {
        version1.cmp(version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &SemanticVersion, operator: Operator, version2: &SemanticVersion) -> bool {
        operator.accepts(Self::order(version1, version2))
    }
}
