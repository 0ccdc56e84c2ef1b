//! # Specifications
//!
//! A [`Specification`] is one reusable yes/no test over a single item. Filtering
//! is written once, against this trait, and every new criterion is a new
//! specification rather than a new filter method.
//!
//! ## Building Blocks
//!
//! - [`AttributeEquals`]: compares a named attribute against an expected value
//! - [`ColorSpecification`], [`SizeSpecification`]: typed product criteria
//! - [`Predicate`]: adapts any `Fn(&T) -> bool` closure
//! - [`All`], [`Any`], [`Not`]: combinators that are specifications themselves
//!
//! ## Usage
//!
//! ```ignore
//! let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
//! let large_and_green = filter(&products, &spec);
//! ```
//!
//! Specifications must stay pure: the same item always gives the same answer
//! and evaluation touches no shared mutable state. `par_filter` relies on this
//! through its `Sync` bounds.

mod attribute;
mod composite;

pub use attribute::{AttributeEquals, ColorSpecification, SizeSpecification};
pub use composite::{All, Any, Not};

/// A yes/no test over a single item.
pub trait Specification<T: ?Sized> {
    /// Whether `item` satisfies this specification.
    ///
    /// "Not satisfied" is a normal `false`, never an error.
    fn is_satisfied(&self, item: &T) -> bool;
}

/// A type-erased specification, as stored by the combinators.
pub type BoxedSpec<T> = Box<dyn Specification<T> + Send + Sync>;

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// A closure used as a specification.
///
/// Covers ad-hoc criteria (ranges, compound fields) without adding a type.
#[derive(Clone, Copy)]
pub struct Predicate<F> {
    test: F,
}

impl<F> Predicate<F> {
    pub fn new(test: F) -> Self {
        Self { test }
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for Predicate<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.test)(item)
    }
}

/// Combinator sugar available on every specification.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Both `self` and `other` must hold.
    fn and<S>(self, other: S) -> All<T>
    where
        Self: Send + Sync + 'static,
        S: Specification<T> + Send + Sync + 'static,
    {
        All::empty().with(self).with(other)
    }

    /// Either `self` or `other` must hold.
    fn or<S>(self, other: S) -> Any<T>
    where
        Self: Send + Sync + 'static,
        S: Specification<T> + Send + Sync + 'static,
    {
        Any::empty().with(self).with(other)
    }

    /// `self` must not hold.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Specification<i32> for Even {
        fn is_satisfied(&self, item: &i32) -> bool {
            item % 2 == 0
        }
    }

    struct Positive;

    impl Specification<i32> for Positive {
        fn is_satisfied(&self, item: &i32) -> bool {
            *item > 0
        }
    }

    #[test]
    fn predicate_wraps_closure() {
        let small = Predicate::new(|n: &i32| n.abs() < 10);
        assert!(Specification::<i32>::is_satisfied(&small, &4));
        assert!(!Specification::<i32>::is_satisfied(&small, &40));
    }

    #[test]
    fn references_and_boxes_are_specifications() {
        let by_ref: &dyn Specification<i32> = &Even;
        let boxed: BoxedSpec<i32> = Box::new(Even);
        assert!(by_ref.is_satisfied(&2));
        assert!(boxed.is_satisfied(&2));
        assert!((&Even).is_satisfied(&2));
    }

    #[test]
    fn ext_and_or_not() {
        let both: All<i32> = Even.and(Positive);
        assert!(both.is_satisfied(&2));
        assert!(!both.is_satisfied(&-2));

        let either: Any<i32> = Even.or(Positive);
        assert!(either.is_satisfied(&-2));
        assert!(either.is_satisfied(&3));
        assert!(!either.is_satisfied(&-3));

        let odd = Even.not();
        assert!(odd.is_satisfied(&3));
        assert!(!odd.is_satisfied(&4));
    }
}
