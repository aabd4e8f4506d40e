//! Semantic version parsing, precedence and range satisfaction
//!
//! This crate parses SemVer 2.0.0 version strings, orders them by
//! precedence, and checks them against comma-separated range expressions
//! with npm-style tilde (`~`) and caret (`^`) shorthands.
//!
//! ```
//! use semver_range::{RangeSet, SemanticVersion};
//!
//! let range = RangeSet::parse("^1.2, <1.5").unwrap();
//! assert!(SemanticVersion::parse("1.4.9").unwrap().satisfies(&range));
//! assert!(!SemanticVersion::parse("1.5.0").unwrap().satisfies(&range));
//! ```

pub mod constraint;
mod comparator;
mod error;
mod identifier;
mod semver;
mod version;

pub use comparator::Comparator;
pub use constraint::{ClauseOperator, Operator, RangeClause, RangeComparator, RangeSet};
pub use error::{Error, Result};
pub use identifier::{BuildIdentifier, PrereleaseIdentifier};
pub use semver::Semver;
pub use version::{OmittedComponents, SemanticVersion};
