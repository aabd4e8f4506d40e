//! Range clauses, expansion and comparator sets

mod clause;
mod expand;
mod operator;
mod range_comparator;
mod range_set;

pub use clause::{split_clauses, RangeClause};
pub use expand::expand;
pub use operator::{ClauseOperator, Operator};
pub use range_comparator::RangeComparator;
pub use range_set::RangeSet;
