//! Section renderers for the dashboard page.

mod charts;
mod deals;
mod header;
mod kpis;
mod menu;
mod top_rated;

pub use charts::*;
pub use deals::*;
pub use header::*;
pub use kpis::*;
pub use menu::*;
pub use top_rated::*;
