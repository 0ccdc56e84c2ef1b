//! Attribute specifications and registry lookups.

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free text (e.g., `name`)
    Text,

    /// One value out of a listed set (e.g., `color`)
    ///
    /// Values are compared in lower case.
    Enum,
}

/// Schema entry for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used in filters (e.g., "color", "size")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Listed values for `Enum` attributes, empty for `Text`
    pub values: &'static [&'static str],
}

impl AttributeSpec {
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            values: &[],
        }
    }

    pub const fn with_values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    /// Whether `value` is one of the listed values.
    ///
    /// Text attributes accept everything.
    pub fn is_known_value(&self, value: &str) -> bool {
        match self.kind {
            AttributeKind::Text => true,
            AttributeKind::Enum => self.values.iter().any(|v| v.eq_ignore_ascii_case(value)),
        }
    }
}

/// Look up an attribute spec by name.
pub fn get_spec(
    attributes: &'static [AttributeSpec],
    name: &str,
) -> Option<&'static AttributeSpec> {
    attributes.iter().find(|spec| spec.name == name)
}

pub fn attribute_names(attributes: &'static [AttributeSpec]) -> impl Iterator<Item = &'static str> {
    attributes.iter().map(|spec| spec.name)
}
