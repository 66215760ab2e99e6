//! Actions consumed by the windowing engine

use std::fmt;

/// Every action the windowing engine reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridAction {
    /// The viewport scrolled
    ScrollPositionChanged {
        x_scroll_position: f64,
        y_scroll_position: f64,
    },

    /// Initial data load completed
    DataLoaded,

    /// Page advanced
    NextPage,

    /// Page retreated
    PreviousPage,

    /// A filter was applied upstream
    Filtered,

    /// A sort was applied upstream
    Sorted,
}

impl GridAction {
    pub fn scroll(x_scroll_position: f64, y_scroll_position: f64) -> Self {
        GridAction::ScrollPositionChanged {
            x_scroll_position,
            y_scroll_position,
        }
    }

    /// Stable label for logs and history
    pub fn name(&self) -> &'static str {
        match self {
            GridAction::ScrollPositionChanged { .. } => "XY_POSITION_CHANGED",
            GridAction::DataLoaded => "LOADED_DATA",
            GridAction::NextPage => "NEXT_PAGE",
            GridAction::PreviousPage => "PREVIOUS_PAGE",
            GridAction::Filtered => "FILTERED",
            GridAction::Sorted => "SORT",
        }
    }

    /// Actions that change which rows are visible, invalidating the
    /// cached window regardless of scroll position
    pub fn is_data_shape_change(&self) -> bool {
        match self {
            GridAction::ScrollPositionChanged { .. } => false,
            GridAction::DataLoaded
            | GridAction::NextPage
            | GridAction::PreviousPage
            | GridAction::Filtered
            | GridAction::Sorted => true,
        }
    }
}

impl fmt::Display for GridAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAction::ScrollPositionChanged {
                x_scroll_position,
                y_scroll_position,
            } => write!(
                f,
                "{}({}, {})",
                self.name(),
                x_scroll_position,
                y_scroll_position
            ),
            _ => write!(f, "{}", self.name()),
        }
    }
}
