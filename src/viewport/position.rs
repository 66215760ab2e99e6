//! Scroll-driven windowing over the visible rows
//!
//! Two transition families:
//! - a scroll event recomputes the window, but only once the vertical
//!   offset has moved by at least one row height;
//! - data-shape events (load, page move, filter, sort) always re-slice the
//!   cached window with the existing bounds.
//!
//! All functions are pure over `(action, state, visible rows)`. Nothing is
//! retained between calls.

use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::PositionConfig;
use crate::data::data_provider::VisibleRows;
use crate::data::datatable::{empty_rows, DataRow};
use crate::state::actions::GridAction;
use crate::state::grid_state::{GridState, PositionState};
use crate::viewport::window::compute_render_window;

/// Outcome of a windowing transition
#[derive(Debug, Clone)]
pub enum Transition {
    /// A new snapshot replaces the old one
    Updated(GridState),
    /// Nothing changed, no re-render needed
    Unchanged,
}

impl Transition {
    pub fn is_updated(&self) -> bool {
        matches!(self, Transition::Updated(_))
    }

    pub fn into_state(self) -> Option<GridState> {
        match self {
            Transition::Updated(state) => Some(state),
            Transition::Unchanged => None,
        }
    }
}

/// Install the default position state and an empty render window
pub fn initialize_state(state: GridState) -> GridState {
    state
        .with_position(PositionState::default())
        .with_rendered_data(empty_rows())
}

/// Same as `initialize_state` with layout constants from config
pub fn initialize_state_with(state: GridState, config: &PositionConfig) -> GridState {
    state
        .with_position(PositionState::from(config))
        .with_rendered_data(empty_rows())
}

/// Route an action to its transition
pub fn apply<S>(action: &GridAction, state: &GridState, store: &S) -> Transition
where
    S: VisibleRows + ?Sized,
{
    match *action {
        GridAction::ScrollPositionChanged {
            x_scroll_position,
            y_scroll_position,
        } => match update_position_properties(x_scroll_position, y_scroll_position, state, store)
        {
            Transition::Updated(next) => Transition::Updated(update_rendered_data(next, store)),
            Transition::Unchanged => Transition::Unchanged,
        },
        GridAction::DataLoaded
        | GridAction::NextPage
        | GridAction::PreviousPage
        | GridAction::Filtered
        | GridAction::Sorted => {
            debug!("PositionEngine: {} invalidates rendered rows", action.name());
            Transition::Updated(update_rendered_data(state.clone(), store))
        }
    }
}

/// True once the vertical offset moved at least one row since the last recompute
pub fn should_update_drawn_rows(y_scroll_position: f64, position: &PositionState) -> bool {
    (y_scroll_position - position.y_scroll_change_position).abs() >= position.row_height
}

/// Recompute window bounds and record the scroll offsets.
/// Does not touch `rendered_data`.
pub fn update_position_properties<S>(
    x_scroll_position: f64,
    y_scroll_position: f64,
    state: &GridState,
    store: &S,
) -> Transition
where
    S: VisibleRows + ?Sized,
{
    if !should_update_drawn_rows(y_scroll_position, &state.position) {
        trace!(
            "PositionEngine: scroll to {} within one row of {}, suppressed",
            y_scroll_position,
            state.position.y_scroll_change_position
        );
        return Transition::Unchanged;
    }

    let window = compute_render_window(
        &state.position,
        y_scroll_position,
        store.visible_row_count(),
    );

    debug!(
        "PositionEngine: scroll to ({}, {}) renders rows {}..{}",
        x_scroll_position, y_scroll_position, window.start, window.end
    );

    let position = PositionState {
        rendered_start_display_index: window.start,
        rendered_end_display_index: window.end,
        y_scroll_change_position: y_scroll_position,
        x_scroll_change_position: x_scroll_position,
        ..state.position
    };

    Transition::Updated(state.clone().with_position(position))
}

/// Re-slice the render window from the visible rows with the current bounds
pub fn update_rendered_data<S>(state: GridState, store: &S) -> GridState
where
    S: VisibleRows + ?Sized,
{
    let start = state.position.rendered_start_display_index;
    let end = state.position.rendered_end_display_index;
    let rows = store.window(start, end);

    trace!(
        "PositionEngine: re-sliced {} of {} visible rows",
        rows.len(),
        store.visible_row_count()
    );

    let rendered: Arc<[DataRow]> = Arc::from(rows);
    state.with_rendered_data(rendered)
}

/// The cached window for the renderer
pub fn get_rendered_data(state: &GridState) -> &[DataRow] {
    &state.rendered_data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<DataRow> {
        (0..n)
            .map(|i| DataRow::from_pairs([("id", i as i64)]))
            .collect()
    }

    fn state_at(y: f64) -> GridState {
        let state = initialize_state(GridState::default());
        let position = PositionState {
            y_scroll_change_position: y,
            ..state.position
        };
        state.with_position(position)
    }

    #[test]
    fn test_initialize_state() {
        let state = initialize_state(GridState::default());
        assert_eq!(state.position, PositionState::default());
        assert!(state.rendered_data.is_empty());
    }

    #[test]
    fn test_initialize_state_with_config() {
        let config = PositionConfig {
            row_height: 40.0,
            initial_rendered_rows: 3,
            ..PositionConfig::default()
        };
        let state = initialize_state_with(GridState::default(), &config);
        assert_eq!(state.position.row_height, 40.0);
        assert_eq!(state.position.rendered_end_display_index, 3);
    }

    #[test]
    fn test_should_update_at_exact_row_height() {
        let position = state_at(100.0).position;
        assert!(!should_update_drawn_rows(124.9, &position));
        assert!(should_update_drawn_rows(125.0, &position));
        assert!(should_update_drawn_rows(75.0, &position));
    }

    #[test]
    fn test_update_position_records_offsets() {
        let data = rows(100);
        let next = update_position_properties(7.0, 500.0, &state_at(0.0), &data)
            .into_state()
            .unwrap();

        assert_eq!(next.position.x_scroll_change_position, 7.0);
        assert_eq!(next.position.y_scroll_change_position, 500.0);
        assert_eq!(next.position.rendered_start_display_index, 16);
        assert_eq!(next.position.rendered_end_display_index, 37);
        // bounds only, the window is re-sliced separately
        assert!(next.rendered_data.is_empty());
    }

    #[test]
    fn test_rendered_rows_share_storage() {
        let data = rows(30);
        let state = update_rendered_data(initialize_state(GridState::default()), &data);
        assert_eq!(get_rendered_data(&state).len(), 10);
        assert!(state.rendered_data[0].ptr_eq(&data[0]));
    }

    #[test]
    fn test_apply_scroll_slices_window() {
        let data = rows(100);
        let next = apply(&GridAction::scroll(0.0, 1000.0), &state_at(0.0), &data)
            .into_state()
            .unwrap();

        assert_eq!(next.rendered_data.len(), 21);
        assert_eq!(next.rendered_data[0], data[36]);
    }

    #[test]
    fn test_apply_page_move_keeps_bounds() {
        let data = rows(4);
        let state = initialize_state(GridState::default());
        let next = apply(&GridAction::NextPage, &state, &data)
            .into_state()
            .unwrap();

        assert_eq!(next.position, state.position);
        assert_eq!(next.rendered_data.len(), 4);
    }
}
