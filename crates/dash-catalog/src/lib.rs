//! Product catalog for the dashboard.
//!
//! This crate provides the read-only data side of the dashboard:
//!
//! - **Product**: the immutable product record and its pricing helpers
//! - **Catalog**: an ordered, immutable sequence of products
//! - **Sources**: the built-in static catalog and JSON file catalogs
//!
//! # Example
//!
//! ```rust
//! use dash_catalog::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let priced = catalog
//!     .iter()
//!     .filter(|p| p.listed_price().is_some())
//!     .count();
//! assert!(priced <= catalog.len());
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{
    truncate_chars, BuiltinSource, Catalog, CatalogSource, JsonFileSource, Product,
    NAME_SEPARATOR,
};
pub use error::CatalogError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        truncate_chars, BuiltinSource, Catalog, CatalogSource, JsonFileSource, Product,
    };
    pub use crate::error::CatalogError;
}
