//! Operator types for range clauses and comparators

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Operator as written in a range clause, before tilde/caret expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseOperator {
    /// Equal (=), also the default when no operator is written
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Caret (^)
    Caret,
    /// Tilde (~)
    Tilde,
}

impl ClauseOperator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseOperator::Equal => "=",
            ClauseOperator::GreaterThan => ">",
            ClauseOperator::LessThan => "<",
            ClauseOperator::GreaterThanOrEqual => ">=",
            ClauseOperator::LessThanOrEqual => "<=",
            ClauseOperator::Caret => "^",
            ClauseOperator::Tilde => "~",
        }
    }

    /// The comparator operator for plain clauses; `None` for caret and tilde
    pub fn as_comparison(&self) -> Option<Operator> {
        match self {
            ClauseOperator::Equal => Some(Operator::Equal),
            ClauseOperator::GreaterThan => Some(Operator::GreaterThan),
            ClauseOperator::LessThan => Some(Operator::LessThan),
            ClauseOperator::GreaterThanOrEqual => Some(Operator::GreaterThanOrEqual),
            ClauseOperator::LessThanOrEqual => Some(Operator::LessThanOrEqual),
            ClauseOperator::Caret | ClauseOperator::Tilde => None,
        }
    }

    /// Get all supported operator tokens
    pub fn supported_operators() -> &'static [&'static str] {
        &[">=", "<=", ">", "<", "^", "~", "="]
    }
}

impl FromStr for ClauseOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" => Ok(ClauseOperator::Equal),
            ">" => Ok(ClauseOperator::GreaterThan),
            "<" => Ok(ClauseOperator::LessThan),
            ">=" => Ok(ClauseOperator::GreaterThanOrEqual),
            "<=" => Ok(ClauseOperator::LessThanOrEqual),
            "^" => Ok(ClauseOperator::Caret),
            "~" => Ok(ClauseOperator::Tilde),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for ClauseOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison operator of an expanded range comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than or equal (<=)
    LessThanOrEqual,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Check whether `ordering` (candidate compared to bound) satisfies this operator
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ClauseOperator>()?
            .as_comparison()
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

impl From<Operator> for ClauseOperator {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Equal => ClauseOperator::Equal,
            Operator::GreaterThan => ClauseOperator::GreaterThan,
            Operator::LessThan => ClauseOperator::LessThan,
            Operator::GreaterThanOrEqual => ClauseOperator::GreaterThanOrEqual,
            Operator::LessThanOrEqual => ClauseOperator::LessThanOrEqual,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
