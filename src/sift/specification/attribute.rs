//! Attribute-based specifications.

use super::Specification;
use crate::attributes::{attribute_names, get_spec, AttrValue, AttributeKind, Attributed};
use crate::error::{Result, SiftError};
use crate::model::{Color, Product, Size};
use std::fmt;
use std::marker::PhantomData;

/// Matches items whose named attribute equals an expected value.
///
/// The attribute name is validated against the item's registry at
/// construction. An item that does not carry the attribute is **not
/// satisfied**; a missing attribute is never an error at match time.
pub struct AttributeEquals<T> {
    attr: &'static str,
    expected: AttrValue,
    _item: PhantomData<fn(&T)>,
}

impl<T: Attributed> AttributeEquals<T> {
    /// Create a new equality specification.
    ///
    /// Fails with `InvalidArgument` when `attr` is not registered for `T` or
    /// `expected` is blank. Enum values are lower-cased; values outside the
    /// listed set are accepted and simply match nothing.
    pub fn new(attr: &str, expected: impl AsRef<str>) -> Result<Self> {
        let spec = get_spec(T::ATTRIBUTES, attr).ok_or_else(|| {
            let known: Vec<_> = attribute_names(T::ATTRIBUTES).collect();
            SiftError::invalid(format!(
                "unknown attribute '{}' (known: {})",
                attr,
                known.join(", ")
            ))
        })?;

        let expected = expected.as_ref();
        if expected.trim().is_empty() {
            return Err(SiftError::invalid(format!(
                "expected value for '{}' cannot be empty",
                attr
            )));
        }

        let expected = match spec.kind {
            AttributeKind::Text => AttrValue::Text(expected.to_string()),
            AttributeKind::Enum => AttrValue::Enum(expected.trim().to_lowercase()),
        };

        Ok(Self {
            attr: spec.name,
            expected,
            _item: PhantomData,
        })
    }

    pub fn attribute(&self) -> &'static str {
        self.attr
    }

    pub fn expected(&self) -> &AttrValue {
        &self.expected
    }

    /// Whether the expected value is one the registry lists.
    pub fn is_known_value(&self) -> bool {
        get_spec(T::ATTRIBUTES, self.attr)
            .map(|spec| spec.is_known_value(self.expected.as_str()))
            .unwrap_or(false)
    }
}

impl<T: Attributed> Specification<T> for AttributeEquals<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        match item.get_attr(self.attr) {
            Some(value) => value.matches(&self.expected),
            None => false,
        }
    }
}

impl<T> Clone for AttributeEquals<T> {
    fn clone(&self) -> Self {
        Self {
            attr: self.attr,
            expected: self.expected.clone(),
            _item: PhantomData,
        }
    }
}

impl<T> fmt::Debug for AttributeEquals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttributeEquals({} = {})", self.attr, self.expected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}
