//! Row windowing
//!
//! `window` holds the pure index math, `position` the state transitions
//! that apply it to a snapshot.

pub mod position;
pub mod window;

pub use position::Transition;
pub use window::{compute_render_window, RenderWindow};
