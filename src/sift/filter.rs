//! # Filtering
//!
//! There is exactly one filtering operation, parameterised by a
//! [`Specification`]. New criteria never require a new filter function: they
//! are new specifications, or combinations of existing ones.
//!
//! Both functions:
//! - read the input without mutating it or any item
//! - return a new `Vec` of references into the input, in input order
//! - cannot fail; an empty input or a specification that rejects everything
//!   yields an empty `Vec`

use crate::specification::Specification;
use rayon::prelude::*;

/// Select the items satisfying `spec`, preserving order.
///
/// `items` is anything that iterates over `&T`: a slice, a `&Vec<T>`, or the
/// output of an earlier filter via `.iter().copied()`.
pub fn filter<'a, T, I, S>(items: I, spec: &S) -> Vec<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    let mut seen = 0usize;
    let selected: Vec<&'a T> = items
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|item| spec.is_satisfied(item))
        .collect();

    tracing::debug!(
        "Filter applied (input count: {}, output count: {})",
        seen,
        selected.len()
    );
    selected
}

/// Parallel variant of [`filter`] for large collections.
///
/// The specification is evaluated concurrently and in no particular order, so
/// it must be free of shared mutable state. The output order still matches
/// the input order.
pub fn par_filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    T: Sync,
    S: Specification<T> + Sync + ?Sized,
{
    let selected: Vec<&'a T> = items
        .par_iter()
        .filter(|item| spec.is_satisfied(item))
        .collect();

    tracing::debug!(
        "Parallel filter applied (input count: {}, output count: {})",
        items.len(),
        selected.len()
    );
    selected
}
