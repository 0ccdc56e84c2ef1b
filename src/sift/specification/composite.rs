//! Composite specifications.

use super::{BoxedSpec, Specification};
use std::fmt;

/// Satisfied when every constituent is satisfied (logical AND).
///
/// Constituents are evaluated in order and evaluation stops at the first
/// `false`. An empty `All` is satisfied by every item (vacuous truth), so
/// "no criteria" means "keep everything".
pub struct All<T: ?Sized> {
    specs: Vec<BoxedSpec<T>>,
}

impl<T: ?Sized> All<T> {
    pub fn new(specs: Vec<BoxedSpec<T>>) -> Self {
        Self { specs }
    }

    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Append a constituent (builder pattern).
    pub fn with(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn push(&mut self, spec: BoxedSpec<T>) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for All<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> Specification<T> for All<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

impl<T: ?Sized> fmt::Debug for All<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All").field("len", &self.specs.len()).finish()
    }
}

/// Satisfied when at least one constituent is satisfied (logical OR).
///
/// Stops at the first `true`. An empty `Any` is satisfied by nothing.
pub struct Any<T: ?Sized> {
    specs: Vec<BoxedSpec<T>>,
}

impl<T: ?Sized> Any<T> {
    pub fn new(specs: Vec<BoxedSpec<T>>) -> Self {
        Self { specs }
    }

    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn push(&mut self, spec: BoxedSpec<T>) {
        self.specs.push(spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for Any<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> Specification<T> for Any<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }
}

impl<T: ?Sized> fmt::Debug for Any<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Any").field("len", &self.specs.len()).finish()
    }
}

/// Satisfied when the wrapped specification is not.
#[derive(Debug, Clone, Copy)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Above(i32);

    impl Specification<i32> for Above {
        fn is_satisfied(&self, item: &i32) -> bool {
            *item > self.0
        }
    }

    struct Below(i32);

    impl Specification<i32> for Below {
        fn is_satisfied(&self, item: &i32) -> bool {
            *item < self.0
        }
    }

    /// Counts how many times it was evaluated.
    struct Counting {
        answer: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Specification<i32> for Counting {
        fn is_satisfied(&self, _item: &i32) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    #[test]
    fn empty_all_is_vacuously_true() {
        let all: All<i32> = All::empty();
        assert!(all.is_empty());
        assert!(all.is_satisfied(&0));
        assert!(all.is_satisfied(&-17));
    }

    #[test]
    fn empty_any_is_false() {
        let any: Any<i32> = Any::default();
        assert!(!any.is_satisfied(&0));
    }

    #[test]
    fn all_is_conjunction() {
        let all: All<i32> = All::empty().with(Above(0)).with(Below(10));
        assert_eq!(all.len(), 2);
        assert!(all.is_satisfied(&5));
        assert!(!all.is_satisfied(&12));
        assert!(!all.is_satisfied(&-1));
    }

    #[test]
    fn all_short_circuits_on_first_false() {
        let calls = Arc::new(AtomicUsize::new(0));
        let all: All<i32> = All::empty()
            .with(Counting {
                answer: false,
                calls: calls.clone(),
            })
            .with(Counting {
                answer: true,
                calls: calls.clone(),
            });
        assert!(!all.is_satisfied(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn any_short_circuits_on_first_true() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut any: Any<i32> = Any::empty();
        any.push(Box::new(Counting {
            answer: true,
            calls: calls.clone(),
        }));
        any.push(Box::new(Counting {
            answer: false,
            calls: calls.clone(),
        }));
        assert!(any.is_satisfied(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn not_negates() {
        let not_positive = Not::new(Above(0));
        assert!(not_positive.is_satisfied(&0));
        assert!(!not_positive.is_satisfied(&1));
    }
}
