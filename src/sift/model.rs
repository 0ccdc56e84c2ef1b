use crate::attributes::{AttrValue, AttributeKind, AttributeSpec, Attributed};
use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: &'static [&'static str] = &["red", "green", "blue"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(SiftError::invalid(format!("unknown color '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: &'static [&'static str] = &["small", "medium", "large"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            other => Err(SiftError::invalid(format!("unknown size '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl Attributed for Product {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("name", AttributeKind::Text),
        AttributeSpec::new("color", AttributeKind::Enum).with_values(Color::ALL),
        AttributeSpec::new("size", AttributeKind::Enum).with_values(Size::ALL),
    ];

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(AttrValue::Enum(self.color.as_str().to_string())),
            "size" => Some(AttrValue::Enum(self.size.as_str().to_string())),
            _ => None,
        }
    }
}
