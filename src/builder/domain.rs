//! Validation of the state and event enumerations themselves.

use crate::builder::error::{DomainKind, TableViolation};
use crate::core::Variant;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single check, accumulated with `Validation::all_vec`.
pub(crate) type Check = Validation<(), NonEmptyVec<TableViolation>>;

pub(crate) fn pass() -> Check {
    Validation::success(())
}

pub(crate) fn fail(violation: TableViolation) -> Check {
    Validation::fail(violation)
}

/// Collapse a list of checks into every violation they found.
pub(crate) fn collect(checks: Vec<Check>) -> Result<(), Vec<TableViolation>> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

/// Check that `V` is non-empty, densely coded and uniquely named.
///
/// Tables are indexed by code, so these must hold before any cell is
/// addressed.
pub(crate) fn check_domain<V: Variant>(kind: DomainKind) -> Vec<Check> {
    let mut checks = Vec::new();

    if V::VARIANTS.is_empty() {
        checks.push(fail(TableViolation::EmptyDomain { kind }));
        return checks;
    }

    let mut codes: Vec<usize> = V::VARIANTS.iter().map(|v| v.code()).collect();
    codes.sort_unstable();
    let gap = codes
        .iter()
        .enumerate()
        .find(|(expected, found)| *expected != **found);
    checks.push(match gap {
        Some((expected, found)) => fail(TableViolation::NonDenseCodes {
            kind,
            expected,
            found: *found,
        }),
        None => pass(),
    });

    let mut seen = HashSet::new();
    for variant in V::VARIANTS {
        if !seen.insert(variant.name()) {
            checks.push(fail(TableViolation::DuplicateName {
                kind,
                name: variant.name().to_string(),
            }));
        }
    }

    checks
}

/// Check that every value in `values` is one of `V::VARIANTS`.
///
/// A value outside the list would index past the end of a table, or
/// silently alias another value's cells.
pub(crate) fn check_members<V, I>(kind: DomainKind, values: I) -> Vec<Check>
where
    V: Variant,
    I: IntoIterator<Item = V>,
{
    let outsiders: HashSet<V> = values
        .into_iter()
        .filter(|value| value.code() >= V::cardinality() || !V::VARIANTS.contains(value))
        .collect();

    outsiders
        .into_iter()
        .map(|value| {
            fail(TableViolation::OutsideDomain {
                kind,
                name: value.name().to_string(),
                code: value.code(),
            })
        })
        .collect()
}
