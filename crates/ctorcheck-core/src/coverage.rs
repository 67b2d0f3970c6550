//! Field coverage verification
//!
//! Scans every product field against every not-yet-matched factory
//! argument by reference identity. Whatever remains unmatched afterwards
//! must sit at an excluded position, or the check fails.

use crate::error::{CheckError, UncoveredMock};
use crate::factory::FieldSnapshot;
use ctorcheck_mock::{MockArg, MockArgumentSet};

/// Verify that every factory argument is stored in the product
///
/// An argument matches a field when the two share the same underlying
/// allocation; an argument that matches any field is covered. Positions in
/// `excluded_positions` are exempt (arguments the factory consumes without
/// storing verbatim).
///
/// # Errors
/// [`CheckError::UncoveredMocks`] reporting the count and positions of
/// arguments that matched no field and were not excluded.
pub fn verify_field_coverage(
    mocks: &MockArgumentSet,
    snapshot: &FieldSnapshot,
    excluded_positions: &[usize],
) -> Result<(), CheckError> {
    let mut remaining: Vec<&MockArg> = mocks.iter().collect();

    for (_name, field) in snapshot.iter() {
        if let Some(i) = remaining
            .iter()
            .position(|arg| arg.value.same_instance(field))
        {
            remaining.remove(i);
        }
    }

    let uncovered: Vec<UncoveredMock> = remaining
        .into_iter()
        .filter(|arg| !excluded_positions.contains(&arg.position))
        .map(|arg| UncoveredMock {
            position: arg.position,
            kind: arg.kind.describe(),
        })
        .collect();

    if uncovered.is_empty() {
        Ok(())
    } else {
        Err(CheckError::UncoveredMocks {
            count: uncovered.len(),
            uncovered,
        })
    }
}
