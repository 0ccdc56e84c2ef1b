//! # Sift Architecture
//!
//! Sift is a small library for **filtering collections with composable
//! specifications**, plus a journal whose persistence is kept out of the
//! journal itself. The CLI is one client of the library, not the library.
//!
//! ## Filtering Without Filter Methods
//!
//! A filter with one method per criterion grows with every new criterion and
//! every pairwise combination. Sift has a single operation,
//! [`filter::filter`], parameterised by a [`Specification`]. New criteria are
//! new specifications; combinations are specifications too ([`All`], [`Any`],
//! [`Not`]). The filter itself never changes.
//!
//! ```ignore
//! use sift::prelude::*;
//!
//! let products = catalog::sample();
//! let spec = All::empty()
//!     .with(AttributeEquals::new("color", "green")?)
//!     .with(AttributeEquals::new("size", "large")?);
//! let matches = filter(&products, &spec); // [Tree]
//! ```
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, owns exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, resolves config defaults                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds specifications from criteria, drives the journal  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (specification/, filter.rs, journal.rs, store/)       │
//! │  - Pure predicates and filtering, in-memory journal,        │
//! │    TextStore persistence (FileStore, InMemoryStore)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`specification`]: the `Specification` trait, attribute specs, combinators
//! - [`filter`]: the generic filter (sequential and parallel)
//! - [`attributes`]: attribute registry and named access to item fields
//! - [`model`]: `Product`, `Color`, `Size`
//! - [`catalog`]: sample and JSON-file product catalogs
//! - [`journal`]: the entry holder
//! - [`store`]: the persistence collaborator
//! - [`commands`], [`api`]: business operations and their facade
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod attributes;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod journal;
pub mod model;
pub mod specification;
pub mod store;

pub use specification::{All, Any, Not, Specification};

pub mod prelude {
    pub use crate::attributes::Attributed;
    pub use crate::catalog;
    pub use crate::filter::{filter, par_filter};
    pub use crate::model::{Color, Product, Size};
    pub use crate::specification::{
        All, Any, AttributeEquals, BoxedSpec, ColorSpecification, Not, Predicate,
        SizeSpecification, Specification, SpecificationExt,
    };
}
