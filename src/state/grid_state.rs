//! Immutable grid state snapshot
//!
//! Every sub-state is a plain value record. A "mutation" is a `with_*` call
//! that consumes the snapshot and returns a new one with one field replaced;
//! the row collections are `Arc`-shared so this never copies row data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::PositionConfig;
use crate::data::datatable::{empty_rows, DataRow, Rows};

/// Root snapshot of the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridState {
    /// Pre-sorted, pre-filtered rows
    #[serde(default = "empty_rows")]
    pub data: Rows,

    #[serde(default)]
    pub page_properties: PageProperties,

    /// Parallel to `sort_directions`
    #[serde(default)]
    pub sort_columns: Vec<String>,
    #[serde(default)]
    pub sort_directions: Vec<SortOrder>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Column keys excluded from normal display, in insertion order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_columns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_properties: Option<RenderProperties>,

    #[serde(default)]
    pub position: PositionState,

    /// Cached render window
    #[serde(default = "empty_rows")]
    pub rendered_data: Rows,
}

/// Paging facts. `current_page <= max_page` is maintained by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageProperties {
    pub current_page: usize,
    /// Inclusive upper bound
    pub max_page: usize,
    pub page_size: usize,
}

/// Sort direction for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderProperties {
    pub column_properties: BTreeMap<String, ColumnProperties>,
}

/// Display metadata for a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProperties {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Windowing sub-state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionState {
    /// Last horizontal offset that caused a recompute
    pub x_scroll_change_position: f64,
    /// Last vertical offset that caused a recompute
    pub y_scroll_change_position: f64,
    /// Inclusive start of the render window
    pub rendered_start_display_index: usize,
    /// Exclusive end of the render window
    pub rendered_end_display_index: usize,
    pub table_height: f64,
    pub table_width: f64,
    pub row_height: f64,
    pub default_column_width: f64,
    /// Shape compatibility only, nothing reads it
    #[serde(
        rename = "infiniteScrollLoadTreshold",
        alias = "infiniteScrollLoadThreshold"
    )]
    pub infinite_scroll_load_threshold: f64,
}

impl Default for PageProperties {
    fn default() -> Self {
        Self {
            current_page: 0,
            max_page: 0,
            page_size: 10,
        }
    }
}

impl Default for PositionState {
    fn default() -> Self {
        Self::from(&PositionConfig::default())
    }
}

impl From<&PositionConfig> for PositionState {
    fn from(config: &PositionConfig) -> Self {
        Self {
            x_scroll_change_position: 0.0,
            y_scroll_change_position: 0.0,
            rendered_start_display_index: 0,
            rendered_end_display_index: config.initial_rendered_rows,
            table_height: config.table_height,
            table_width: config.table_width,
            row_height: config.row_height,
            default_column_width: config.default_column_width,
            infinite_scroll_load_threshold: config.infinite_scroll_load_threshold,
        }
    }
}

impl ColumnProperties {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            order: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

impl RenderProperties {
    pub fn from_columns(columns: impl IntoIterator<Item = ColumnProperties>) -> Self {
        Self {
            column_properties: columns.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            data: empty_rows(),
            page_properties: PageProperties::default(),
            sort_columns: Vec::new(),
            sort_directions: Vec::new(),
            filter: None,
            metadata_columns: None,
            render_properties: None,
            position: PositionState::default(),
            rendered_data: empty_rows(),
        }
    }
}

impl GridState {
    /// Empty snapshot holding the given rows
    pub fn with_rows(rows: Vec<DataRow>) -> Self {
        Self::default().with_data(rows.into())
    }

    pub fn with_data(mut self, data: Rows) -> Self {
        self.data = data;
        self
    }

    pub fn with_page_properties(mut self, page_properties: PageProperties) -> Self {
        self.page_properties = page_properties;
        self
    }

    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.page_properties.current_page = current_page;
        self
    }

    pub fn with_max_page(mut self, max_page: usize) -> Self {
        self.page_properties.max_page = max_page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_properties.page_size = page_size;
        self
    }

    pub fn with_sort(mut self, columns: Vec<String>, directions: Vec<SortOrder>) -> Self {
        self.sort_columns = columns;
        self.sort_directions = directions;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the metadata columns; duplicates keep their first position
    pub fn with_metadata_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !unique.contains(&column) {
                unique.push(column);
            }
        }
        self.metadata_columns = Some(unique);
        self
    }

    pub fn with_render_properties(mut self, render_properties: RenderProperties) -> Self {
        self.render_properties = Some(render_properties);
        self
    }

    pub fn with_position(mut self, position: PositionState) -> Self {
        self.position = position;
        self
    }

    pub fn with_rendered_data(mut self, rendered_data: Rows) -> Self {
        self.rendered_data = rendered_data;
        self
    }
}
