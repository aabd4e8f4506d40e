//! Semver facade providing high-level version operations

use crate::constraint::RangeSet;
use crate::error::Result;
use crate::version::SemanticVersion;

/// Main facade for semantic versioning operations on raw strings
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a range expression
    pub fn satisfies(version: &str, range: &str) -> Result<bool> {
        let version = SemanticVersion::parse(version)?;
        let range = RangeSet::parse(range)?;
        Ok(range.is_satisfied_by(&version))
    }

    /// Return all versions that satisfy the given range, in input order.
    /// Version strings that do not parse are skipped.
    pub fn satisfied_by(versions: &[&str], range: &str) -> Result<Vec<String>> {
        let range = RangeSet::parse(range)?;

        Ok(Self::parse_all(versions)
            .into_iter()
            .filter(|(version, _)| range.is_satisfied_by(version))
            .map(|(_, i)| versions[i].to_string())
            .collect())
    }

    /// Return the highest version satisfying the given range
    pub fn max_satisfying(versions: &[&str], range: &str) -> Result<Option<String>> {
        let range = RangeSet::parse(range)?;

        Ok(Self::parse_all(versions)
            .into_iter()
            .filter(|(version, _)| range.is_satisfied_by(version))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, i)| versions[i].to_string()))
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed = Self::parse_all(versions);

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    /// Parse every version, keeping its original index
    fn parse_all(versions: &[&str]) -> Vec<(SemanticVersion, usize)> {
        versions
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| match SemanticVersion::parse(raw) {
                Ok(version) => Some((version, i)),
                Err(e) => {
                    log::debug!("Skipping version {:?}: {}", raw, e);
                    None
                }
            })
            .collect()
    }
}
