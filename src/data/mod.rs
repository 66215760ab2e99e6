//! Row storage and visible-data access
//!
//! Rows are immutable and shared; the windowing engine only ever reads
//! them through the `VisibleRows` trait.

pub mod data_provider;
pub mod datatable;
