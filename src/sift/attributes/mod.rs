//! # Attribute System
//!
//! Items that can be filtered by name expose their fields through the
//! [`Attributed`] trait. Each item type carries a registry of the attributes it
//! knows about, which lets specifications validate attribute names once at
//! construction instead of failing silently on every lookup.
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `name` | Free-form text, compared exactly |
//! | `Enum` | `color`, `size` | Closed set of lower-case values |
//!
//! ## Usage
//!
//! ```ignore
//! let value = product.get_attr("color");
//! let spec = get_spec(Product::ATTRIBUTES, "color");
//! ```

mod spec;
mod value;

pub use spec::{attribute_names, get_spec, AttributeKind, AttributeSpec};
pub use value::AttrValue;

/// An item whose fields can be read by attribute name.
pub trait Attributed {
    /// The attributes this item type knows about.
    const ATTRIBUTES: &'static [AttributeSpec];

    /// Read an attribute value by name.
    ///
    /// Returns `None` when the item does not carry the attribute. Specifications
    /// treat a missing attribute as "not satisfied", never as an error.
    fn get_attr(&self, name: &str) -> Option<AttrValue>;
}
