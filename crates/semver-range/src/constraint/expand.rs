//! Tilde and caret expansion into canonical comparators

use super::{ClauseOperator, Operator, RangeComparator};
use crate::error::{Error, Result};
use crate::version::{OmittedComponents, SemanticVersion};

/// Expand a clause into the comparators it stands for.
///
/// Plain operators pass through as a single comparator. Tilde and caret
/// become `>= version` plus an exclusive upper bound:
///
/// | clause     | upper bound |
/// |------------|-------------|
/// | `~1`       | `<2.0.0`    |
/// | `~1.2`     | `<1.3.0`    |
/// | `~1.2.3`   | `<1.3.0`    |
/// | `^1.2.3`   | `<2.0.0`    |
/// | `^0.2.3`   | `<0.3.0`    |
/// | `^0.0.3`   | `<0.0.4`    |
pub fn expand(operator: ClauseOperator, version: &SemanticVersion) -> Result<Vec<RangeComparator>> {
    let upper = match operator {
        ClauseOperator::Tilde => tilde_upper_bound(version),
        ClauseOperator::Caret => caret_upper_bound(version),
        ClauseOperator::Equal => return Ok(single(Operator::Equal, version)),
        ClauseOperator::GreaterThan => return Ok(single(Operator::GreaterThan, version)),
        ClauseOperator::LessThan => return Ok(single(Operator::LessThan, version)),
        ClauseOperator::GreaterThanOrEqual => {
            return Ok(single(Operator::GreaterThanOrEqual, version));
        }
        ClauseOperator::LessThanOrEqual => return Ok(single(Operator::LessThanOrEqual, version)),
    };

    let upper = upper.ok_or_else(|| Error::BoundOverflow(format!("{operator}{version}")))?;

    log::trace!("Expanded {}{} to >={}, <{}", operator, version, version, upper);

    Ok(vec![
        RangeComparator::new(Operator::GreaterThanOrEqual, version.clone()),
        RangeComparator::new(Operator::LessThan, upper),
    ])
}

fn single(operator: Operator, version: &SemanticVersion) -> Vec<RangeComparator> {
    vec![RangeComparator::new(operator, version.clone())]
}

fn tilde_upper_bound(version: &SemanticVersion) -> Option<SemanticVersion> {
    match version.omitted_components() {
        OmittedComponents::MinorAndPatchOmitted => next_major(version),
        OmittedComponents::PatchOmitted | OmittedComponents::None => next_minor(version),
    }
}

fn caret_upper_bound(version: &SemanticVersion) -> Option<SemanticVersion> {
    if version.major() > 0 {
        next_major(version)
    } else if version.minor() > 0 {
        next_minor(version)
    } else {
        Some(SemanticVersion::new(0, 0, version.patch().checked_add(1)?))
    }
}

fn next_major(version: &SemanticVersion) -> Option<SemanticVersion> {
    Some(SemanticVersion::new(version.major().checked_add(1)?, 0, 0))
}

fn next_minor(version: &SemanticVersion) -> Option<SemanticVersion> {
    Some(SemanticVersion::new(version.major(), version.minor().checked_add(1)?, 0))
}
