//! Visible-data access for the windowing engine
//!
//! The engine never knows how the visible rows were produced (paging,
//! sorting and filtering all happen upstream). It only needs an ordered
//! slice it can cut a window out of.

use crate::data::datatable::DataRow;

/// Source of the current fully processed (paged/sorted/filtered) row view
pub trait VisibleRows {
    /// The visible rows in display order
    fn visible_rows(&self) -> &[DataRow];

    /// Total number of visible rows
    fn visible_row_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// Skip `start` rows and take `end - start` rows.
    /// Out-of-range bounds return whatever remains (possibly nothing).
    fn window(&self, start: usize, end: usize) -> &[DataRow] {
        slice_window(self.visible_rows(), start, end)
    }
}

impl VisibleRows for [DataRow] {
    fn visible_rows(&self) -> &[DataRow] {
        self
    }
}

impl VisibleRows for Vec<DataRow> {
    fn visible_rows(&self) -> &[DataRow] {
        self
    }
}

/// Saturating `[start, end)` slice
pub fn slice_window(rows: &[DataRow], start: usize, end: usize) -> &[DataRow] {
    let start = start.min(rows.len());
    let end = end.clamp(start, rows.len());
    &rows[start..end]
}

/// Rows on a zero-based page.
/// A page past the end yields an empty slice.
pub fn page_slice(rows: &[DataRow], current_page: usize, page_size: usize) -> &[DataRow] {
    let start = current_page.saturating_mul(page_size);
    slice_window(rows, start, start.saturating_add(page_size))
}

/// Highest zero-based page index for `row_count` rows
pub fn max_page_for(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size).saturating_sub(1)
}
