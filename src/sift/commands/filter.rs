//! The `filter` command: turns textual criteria into one composed
//! specification and runs it through the generic filter.

use crate::attributes::Attributed;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SiftError};
use crate::filter::filter;
use crate::model::Product;
use crate::specification::{All, Any, AttributeEquals, Not};
use std::str::FromStr;

/// One `attr=value` criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub attr: String,
    pub value: String,
}

impl Criterion {
    pub fn new(attr: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            value: value.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let (attr, value) = input
            .split_once('=')
            .ok_or_else(|| SiftError::invalid(format!("expected attr=value, got '{}'", input)))?;
        let attr = attr.trim();
        if attr.is_empty() {
            return Err(SiftError::invalid(format!(
                "missing attribute name in '{}'",
                input
            )));
        }
        Ok(Self::new(attr, value.trim()))
    }

    fn to_spec<T: Attributed>(&self) -> Result<AttributeEquals<T>> {
        AttributeEquals::new(&self.attr, &self.value)
    }
}

impl FromStr for Criterion {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    /// Criteria an item must meet
    pub require: Vec<Criterion>,
    /// Meet any of `require` instead of all of them
    pub any: bool,
    /// Criteria an item must not meet
    pub exclude: Vec<Criterion>,
}

impl FilterQuery {
    /// Build the composed specification.
    ///
    /// An empty `require` list keeps everything, even in `any` mode: "no
    /// criteria" never means "reject all".
    pub fn build<T: Attributed + 'static>(&self) -> Result<(All<T>, Vec<CmdMessage>)> {
        let mut spec = All::empty();
        let mut warnings = Vec::new();

        let mut required = Vec::with_capacity(self.require.len());
        for criterion in &self.require {
            let attr_spec = criterion.to_spec::<T>()?;
            if !attr_spec.is_known_value() {
                warnings.push(unknown_value_warning(criterion));
            }
            required.push(attr_spec);
        }

        if self.any && !required.is_empty() {
            let mut any = Any::empty();
            for attr_spec in required {
                any.push(Box::new(attr_spec));
            }
            spec.push(Box::new(any));
        } else {
            for attr_spec in required {
                spec.push(Box::new(attr_spec));
            }
        }

        for criterion in &self.exclude {
            let attr_spec = criterion.to_spec::<T>()?;
            if !attr_spec.is_known_value() {
                warnings.push(unknown_exclusion_warning(criterion));
            }
            spec.push(Box::new(Not::new(attr_spec)));
        }

        Ok((spec, warnings))
    }
}

fn unknown_value_warning(criterion: &Criterion) -> CmdMessage {
    CmdMessage::warning(format!(
        "'{}' is not a known {}; it will not match any product",
        criterion.value, criterion.attr
    ))
}

fn unknown_exclusion_warning(criterion: &Criterion) -> CmdMessage {
    CmdMessage::warning(format!(
        "'{}' is not a known {}; excluding it excludes nothing",
        criterion.value, criterion.attr
    ))
}

pub fn run(products: &[Product], query: &FilterQuery) -> Result<CmdResult> {
    let (spec, warnings) = query.build::<Product>()?;
    let matched: Vec<Product> = filter(products, &spec).into_iter().cloned().collect();

    let mut result = CmdResult::default().with_listed_products(matched);
    for warning in warnings {
        result.add_message(warning);
    }
    Ok(result)
}

/// List the whole catalog.
pub fn list(products: &[Product]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_products(products.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::commands::MessageLevel;

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_products
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    fn query(require: &[&str]) -> FilterQuery {
        FilterQuery {
            require: require
                .iter()
                .map(|c| Criterion::parse(c).unwrap())
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_criterion() {
        assert_eq!(
            Criterion::parse("color = green").unwrap(),
            Criterion::new("color", "green")
        );
        assert!(Criterion::parse("color").is_err());
        assert!(Criterion::parse("=green").is_err());
    }

    #[test]
    fn green_products() {
        let result = run(&catalog::sample(), &query(&["color=green"])).unwrap();
        assert_eq!(names(&result), vec!["Apple", "Tree"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn green_and_large() {
        let result = run(&catalog::sample(), &query(&["color=green", "size=large"])).unwrap();
        assert_eq!(names(&result), vec!["Tree"]);
    }

    #[test]
    fn green_or_large() {
        let mut q = query(&["color=green", "size=large"]);
        q.any = true;
        let result = run(&catalog::sample(), &q).unwrap();
        assert_eq!(names(&result), vec!["Apple", "Tree", "House"]);
    }

    #[test]
    fn exclusions_are_negated() {
        let mut q = query(&["size=large"]);
        q.exclude.push(Criterion::new("color", "blue"));
        let result = run(&catalog::sample(), &q).unwrap();
        assert_eq!(names(&result), vec!["Tree"]);
    }

    #[test]
    fn no_criteria_keeps_everything() {
        let mut q = FilterQuery::default();
        assert_eq!(
            run(&catalog::sample(), &q).unwrap().listed_products.len(),
            3
        );
        q.any = true;
        assert_eq!(
            run(&catalog::sample(), &q).unwrap().listed_products.len(),
            3
        );
    }

    #[test]
    fn unknown_value_warns_and_matches_nothing() {
        let result = run(&catalog::sample(), &query(&["color=purple"])).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("will not match any product"));
    }

    #[test]
    fn unknown_excluded_value_excludes_nothing() {
        let mut q = FilterQuery::default();
        q.exclude.push(Criterion::new("color", "purple"));
        let result = run(&catalog::sample(), &q).unwrap();

        assert_eq!(names(&result), vec!["Apple", "Tree", "House"]);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("excludes nothing"));
    }

    #[test]
    fn unknown_attribute_is_an_error() {
        let err = run(&catalog::sample(), &query(&["weight=heavy"])).unwrap_err();
        assert!(matches!(err, SiftError::InvalidArgument(_)));
    }

    #[test]
    fn list_returns_whole_catalog() {
        let result = list(&catalog::sample()).unwrap();
        assert_eq!(names(&result), vec!["Apple", "Tree", "House"]);
    }
}
