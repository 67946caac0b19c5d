//! Report aggregation engine for the catalog dashboard.
//!
//! Turns a product list plus an optional category filter into the
//! statistics and chart-ready series a dashboard view consumes:
//!
//! - **Kpis**: counts, price range and rating summary
//! - **Facets**: category and colour breakdowns
//! - **Histogram**: fixed price buckets
//! - **Rankings**: best deals and top-rated products
//! - **Session**: the select / clear filter interactions
//!
//! The engine is a pure function. Every call recomputes everything from the
//! same filtered snapshot and nothing it can be given is an error.
//!
//! # Example
//!
//! ```rust
//! use dash_analytics::prelude::*;
//! use dash_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let all = compute_report(catalog, None);
//! let none = compute_report(catalog, Some("Nonexistent"));
//!
//! assert_eq!(all.kpis.total, catalog.len());
//! assert_eq!(none.kpis.total, 0);
//! assert!(none.category_data.is_empty());
//! ```

pub mod facets;
pub mod filter;
pub mod histogram;
pub mod kpis;
pub mod ranking;
pub mod report;
pub mod session;

pub use facets::{category_menu, FacetValue};
pub use histogram::{PriceBucket, PriceBucketCount, PRICE_BUCKETS};
pub use kpis::Kpis;
pub use ranking::{RatedItem, SaleItem};
pub use report::{compute_report, Report};
pub use session::DashboardSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::facets::{category_menu, FacetValue};
    pub use crate::histogram::{PriceBucket, PriceBucketCount, PRICE_BUCKETS};
    pub use crate::kpis::Kpis;
    pub use crate::ranking::{RatedItem, SaleItem};
    pub use crate::report::{compute_report, Report};
    pub use crate::session::DashboardSession;
}
