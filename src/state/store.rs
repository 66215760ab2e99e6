//! Store that owns the current grid snapshot
//!
//! The store is the only writer: it runs an action through the windowing
//! engine and swaps in the returned snapshot. Readers get `&GridState` or a
//! cheap clone and never observe a half-applied update.

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

use crate::config::{Config, PagingConfig};
use crate::data::data_provider::{max_page_for, page_slice, VisibleRows};
use crate::data::datatable::{rows_from_json, DataRow};
use crate::state::actions::GridAction;
use crate::state::grid_state::{GridState, SortOrder};
use crate::state::selectors::{has_next_selector, has_previous_selector};
use crate::viewport::position::{self, Transition};

/// Maximum number of actions kept in the history
const MAX_HISTORY: usize = 100;

/// Components notified after each applied update
pub trait StoreSubscriber {
    fn on_state_changed(&mut self, action: &GridAction, state: &GridState);

    /// Get subscriber name for debugging
    fn name(&self) -> &str;
}

pub struct GridStore {
    state: GridState,
    paging: PagingConfig,
    subscribers: Vec<Box<dyn StoreSubscriber>>,
    action_history: VecDeque<GridAction>,
}

impl GridStore {
    pub fn new(config: &Config) -> Self {
        let state = position::initialize_state_with(GridState::default(), &config.position)
            .with_page_size(config.paging.page_size.max(1));

        Self {
            state,
            paging: config.paging.clone(),
            subscribers: Vec::new(),
            action_history: VecDeque::with_capacity(MAX_HISTORY),
        }
    }

    /// Store with default config and the given rows loaded
    pub fn with_rows(rows: Vec<DataRow>) -> Self {
        let mut store = Self::new(&Config::default());
        store.load_rows(rows);
        store
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// The cached render window
    pub fn rendered_data(&self) -> &[DataRow] {
        position::get_rendered_data(&self.state)
    }

    /// Most recent actions, oldest first
    pub fn action_history(&self) -> impl Iterator<Item = &GridAction> {
        self.action_history.iter()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn StoreSubscriber>) {
        info!("GridStore: Adding subscriber: {}", subscriber.name());
        self.subscribers.push(subscriber);
    }

    /// Run an action through the windowing engine.
    /// Returns true when the snapshot was replaced.
    pub fn dispatch(&mut self, action: GridAction) -> bool {
        debug!("GridStore: Dispatching {}", action);

        self.action_history.push_back(action);
        if self.action_history.len() > MAX_HISTORY {
            self.action_history.pop_front();
        }

        match position::apply(&action, &self.state, &*self) {
            Transition::Updated(next) => {
                self.state = next;
                for subscriber in &mut self.subscribers {
                    debug!("GridStore: Notifying subscriber: {}", subscriber.name());
                    subscriber.on_state_changed(&action, &self.state);
                }
                true
            }
            Transition::Unchanged => false,
        }
    }

    pub fn scroll_to(&mut self, x_scroll_position: f64, y_scroll_position: f64) -> bool {
        self.dispatch(GridAction::scroll(x_scroll_position, y_scroll_position))
    }

    /// Replace the data set and reset to the first page
    pub fn load_rows(&mut self, rows: Vec<DataRow>) -> bool {
        info!("GridStore: Loading {} rows", rows.len());
        self.replace_rows(rows);
        self.dispatch(GridAction::DataLoaded)
    }

    /// Load rows from a JSON array of objects
    pub fn load_json(&mut self, value: &JsonValue) -> Result<bool> {
        let rows = rows_from_json(value).context("Failed to load rows from JSON")?;
        Ok(self.load_rows(rows))
    }

    pub fn next_page(&mut self) -> bool {
        if has_next_selector(&self.state) {
            let page = self.state.page_properties.current_page + 1;
            self.state = self.state.clone().with_current_page(page);
        } else {
            warn!("GridStore: Already on the last page");
        }
        self.dispatch(GridAction::NextPage)
    }

    pub fn previous_page(&mut self) -> bool {
        if has_previous_selector(&self.state) {
            let page = self.state.page_properties.current_page - 1;
            self.state = self.state.clone().with_current_page(page);
        } else {
            warn!("GridStore: Already on the first page");
        }
        self.dispatch(GridAction::PreviousPage)
    }

    /// Record a filter and the rows it produced upstream
    pub fn apply_filter(&mut self, filter: impl Into<String>, rows: Vec<DataRow>) -> bool {
        let filter = filter.into();
        info!("GridStore: Filter '{}' matched {} rows", filter, rows.len());
        self.state = self.state.clone().with_filter(filter);
        self.replace_rows(rows);
        self.dispatch(GridAction::Filtered)
    }

    /// Record a sort and the rows it produced upstream
    pub fn apply_sort(
        &mut self,
        columns: Vec<String>,
        directions: Vec<SortOrder>,
        rows: Vec<DataRow>,
    ) -> bool {
        info!("GridStore: Sorted by {:?}", columns);
        self.state = self.state.clone().with_sort(columns, directions);
        self.replace_rows(rows);
        self.dispatch(GridAction::Sorted)
    }

    fn replace_rows(&mut self, rows: Vec<DataRow>) {
        let page_size = self.state.page_properties.page_size;
        let max_page = max_page_for(rows.len(), page_size);

        self.state = self
            .state
            .clone()
            .with_data(rows.into())
            .with_current_page(0)
            .with_max_page(max_page);
    }
}

impl VisibleRows for GridStore {
    fn visible_rows(&self) -> &[DataRow] {
        if self.paging.enabled {
            let pages = &self.state.page_properties;
            page_slice(&self.state.data, pages.current_page, pages.page_size)
        } else {
            &self.state.data[..]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<DataRow> {
        (0..n)
            .map(|i| DataRow::from_pairs([("id", i as i64)]))
            .collect()
    }

    #[test]
    fn test_new_store_is_initialized() {
        let store = GridStore::new(&Config::default());
        assert_eq!(store.state().position.rendered_end_display_index, 10);
        assert_eq!(store.state().page_properties.page_size, 10);
        assert!(store.rendered_data().is_empty());
    }

    #[test]
    fn test_visible_rows_follow_page() {
        let mut store = GridStore::with_rows(rows(25));
        assert_eq!(store.visible_row_count(), 10);
        assert_eq!(store.state().page_properties.max_page, 2);

        store.next_page();
        store.next_page();
        assert_eq!(store.visible_row_count(), 5);
        assert_eq!(store.visible_rows()[0], store.state().data[20]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut store = GridStore::with_rows(rows(5));
        for i in 0..(MAX_HISTORY + 20) {
            store.scroll_to(0.0, (i * 50) as f64);
        }
        assert_eq!(store.action_history().count(), MAX_HISTORY);
    }
}
