//! Selectors over a grid state snapshot
//!
//! Every selector is a pure, total function of the snapshot. Optional
//! fields resolve to defaults instead of failing.

use std::collections::BTreeMap;

use crate::data::datatable::DataRow;
use crate::state::grid_state::{ColumnProperties, GridState, SortOrder};

pub fn data_selector(state: &GridState) -> &[DataRow] {
    &state.data
}

pub fn page_size_selector(state: &GridState) -> usize {
    state.page_properties.page_size
}

pub fn current_page_selector(state: &GridState) -> usize {
    state.page_properties.current_page
}

pub fn max_page_selector(state: &GridState) -> usize {
    state.page_properties.max_page
}

/// True while `current_page < max_page`
pub fn has_next_selector(state: &GridState) -> bool {
    current_page_selector(state) < max_page_selector(state)
}

/// True while `current_page > 0`
pub fn has_previous_selector(state: &GridState) -> bool {
    current_page_selector(state) > 0
}

/// Current filter text, empty when no filter is set
pub fn filter_selector(state: &GridState) -> &str {
    state.filter.as_deref().unwrap_or("")
}

/// Metadata column keys in the order they were set
pub fn meta_data_columns_selector(state: &GridState) -> &[String] {
    state.metadata_columns.as_deref().unwrap_or(&[])
}

pub fn sort_columns_selector(state: &GridState) -> &[String] {
    &state.sort_columns
}

pub fn sort_directions_selector(state: &GridState) -> &[SortOrder] {
    &state.sort_directions
}

pub fn column_properties_selector(state: &GridState) -> Option<&BTreeMap<String, ColumnProperties>> {
    state
        .render_properties
        .as_ref()
        .map(|props| &props.column_properties)
}

/// Every known column key.
///
/// Configured column properties win; otherwise the keys of the first row.
pub fn all_columns_selector(state: &GridState) -> Vec<String> {
    match column_properties_selector(state) {
        Some(columns) if !columns.is_empty() => columns.keys().cloned().collect(),
        _ => state
            .data
            .first()
            .map(|row| row.columns().map(str::to_string).collect())
            .unwrap_or_default(),
    }
}

/// Displayable columns: all columns minus metadata columns, sorted by the
/// configured `order`. Columns without an order go last, by key.
pub fn visible_columns_selector(state: &GridState) -> Vec<String> {
    let metadata = meta_data_columns_selector(state);
    let properties = column_properties_selector(state);

    let mut columns: Vec<String> = all_columns_selector(state)
        .into_iter()
        .filter(|column| !metadata.contains(column))
        .collect();

    let order_of = |column: &String| -> Option<i64> {
        properties
            .and_then(|props| props.get(column))
            .and_then(|props| props.order)
    };

    columns.sort_by(|a, b| match (order_of(a), order_of(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    });

    columns
}

/// Header titles for the visible columns, falling back to the key
pub fn column_titles_selector(state: &GridState) -> Vec<String> {
    let properties = column_properties_selector(state);

    visible_columns_selector(state)
        .into_iter()
        .map(|column| {
            properties
                .and_then(|props| props.get(&column))
                .and_then(|props| props.display_name.clone())
                .unwrap_or(column)
        })
        .collect()
}

/// The cached render window
pub fn rendered_data_selector(state: &GridState) -> &[DataRow] {
    &state.rendered_data
}
