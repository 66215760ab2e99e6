use crate::state::grid_state::PositionState;

/// Fraction of a viewport rendered above the visible rows
pub const OVERSCAN_ABOVE: f64 = 0.25;
/// Size of the render window in viewports, counted from its start
pub const WINDOW_SPAN: f64 = 1.25;

/// Half-open range of row indices to materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderWindow {
    pub start: usize,
    pub end: usize,
}

impl RenderWindow {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rows needed to fill the viewport, rounded up
pub fn visible_record_count(table_height: f64, row_height: f64) -> f64 {
    (table_height / row_height).ceil()
}

/// Compute the render window for a vertical scroll offset.
///
/// Preconditions: `row_height > 0` and `y_scroll_position >= 0`. Violating
/// them gives unspecified bounds, never a panic in release builds.
pub fn compute_render_window(
    position: &PositionState,
    y_scroll_position: f64,
    total_rows: usize,
) -> RenderWindow {
    debug_assert!(position.row_height > 0.0, "row height must be positive");
    debug_assert!(y_scroll_position >= 0.0, "scroll position must not be negative");

    let row_height = position.row_height;
    let visible = visible_record_count(position.table_height, row_height);

    let start = ((y_scroll_position / row_height).floor() - visible * OVERSCAN_ABOVE).max(0.0);
    let end = (start + visible * WINDOW_SPAN).min(total_rows as f64 - 1.0) + 1.0;

    // fractional overscan widens the window rather than trimming it;
    // `as usize` saturates negatives to 0
    RenderWindow {
        start: start.floor() as usize,
        end: end.ceil() as usize,
    }
}
