//! Runtime representation of attribute values.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Free text, compared exactly (e.g., `name` = "Apple")
    Text(String),

    /// Lower-case enum value (e.g., `color` = "green")
    Enum(String),
}

impl AttrValue {
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Text(s) | AttrValue::Enum(s) => s,
        }
    }

    /// Check if two attribute values are equal.
    ///
    /// Values of different kinds never match.
    pub fn matches(&self, other: &AttrValue) -> bool {
        match (self, other) {
            (AttrValue::Text(a), AttrValue::Text(b)) => a == b,
            (AttrValue::Enum(a), AttrValue::Enum(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
