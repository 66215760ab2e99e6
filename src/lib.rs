//! State derivation and row windowing for a tabular data grid
//!
//! A `GridState` snapshot is read through the pure functions in
//! `state::selectors`, and `viewport::position` decides which slice of the
//! visible rows needs to be materialized as the viewport scrolls.

pub mod config;
pub mod data;
pub mod state;
pub mod utils;
pub mod viewport;

pub use data::data_provider::VisibleRows;
pub use data::datatable::{DataRow, DataValue, Rows};
pub use state::{GridAction, GridState, GridStore};
pub use viewport::{RenderWindow, Transition};
