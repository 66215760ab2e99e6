//! Grid state
//!
//! - `grid_state`: the immutable snapshot and its sub-states
//! - `selectors`: pure derivations read by renderers
//! - `actions`: the closed set of actions the windowing engine handles
//! - `store`: the single writer that owns the current snapshot

pub mod actions;
pub mod grid_state;
pub mod selectors;
pub mod store;

pub use actions::GridAction;
pub use grid_state::{
    ColumnProperties, GridState, PageProperties, PositionState, RenderProperties, SortOrder,
};
pub use store::{GridStore, StoreSubscriber};
