//! gs-data: columnar dataset model for gridscope.
//!
//! Contains:
//! - value (heterogeneous cell values)
//! - dataset (insertion-ordered columns + the `snapshots` time axis)
//! - filter (empty-column filtering)

pub mod dataset;
pub mod filter;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use dataset::{Column, Dataset, SNAPSHOTS_KEY};
pub use filter::filter_empty_columns;
pub use value::CellValue;
