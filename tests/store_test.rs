use grid_window::config::Config;
use grid_window::state::selectors::{
    current_page_selector, filter_selector, has_next_selector, has_previous_selector,
    sort_columns_selector,
};
use grid_window::state::{GridAction, GridState, GridStore, SortOrder, StoreSubscriber};
use grid_window::{DataRow, DataValue, VisibleRows};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn rows(n: usize) -> Vec<DataRow> {
    (0..n)
        .map(|i| DataRow::from_pairs([("id", i as i64)]))
        .collect()
}

fn continuous_config() -> Config {
    let mut config = Config::default();
    config.paging.enabled = false;
    config
}

fn id_of(row: &DataRow) -> i64 {
    match row.get("id") {
        Some(DataValue::Integer(i)) => *i,
        other => panic!("unexpected id {:?}", other),
    }
}

struct Recorder {
    seen: Rc<RefCell<Vec<&'static str>>>,
}

impl StoreSubscriber for Recorder {
    fn on_state_changed(&mut self, action: &GridAction, _state: &GridState) {
        self.seen.borrow_mut().push(action.name());
    }

    fn name(&self) -> &str {
        "Recorder"
    }
}

#[test]
fn test_load_renders_initial_window() {
    let mut store = GridStore::new(&continuous_config());
    assert!(store.load_rows(rows(1000)));

    assert_eq!(store.rendered_data().len(), 10);
    assert_eq!(store.state().page_properties.max_page, 99);
    assert_eq!(current_page_selector(store.state()), 0);
}

#[test]
fn test_scroll_through_continuous_data() {
    let mut store = GridStore::new(&continuous_config());
    store.load_rows(rows(1000));

    assert!(store.scroll_to(0.0, 2500.0));
    assert_eq!(id_of(&store.rendered_data()[0]), 96);
    assert_eq!(store.rendered_data().len(), 21);

    // under one row of movement
    assert!(!store.scroll_to(0.0, 2510.0));
    assert_eq!(id_of(&store.rendered_data()[0]), 96);
}

#[test]
fn test_paging_moves_visible_rows() {
    let mut store = GridStore::with_rows(rows(25));
    assert_eq!(store.visible_row_count(), 10);
    assert!(has_next_selector(store.state()));
    assert!(!has_previous_selector(store.state()));

    store.next_page();
    assert_eq!(current_page_selector(store.state()), 1);
    assert_eq!(id_of(&store.rendered_data()[0]), 10);

    store.next_page();
    store.next_page();
    assert_eq!(current_page_selector(store.state()), 2);
    assert!(!has_next_selector(store.state()));
    assert_eq!(store.rendered_data().len(), 5);

    store.previous_page();
    assert_eq!(current_page_selector(store.state()), 1);
    assert!(has_previous_selector(store.state()));
}

#[test]
fn test_previous_page_stops_at_first() {
    let mut store = GridStore::with_rows(rows(25));
    store.previous_page();
    assert_eq!(current_page_selector(store.state()), 0);
    assert_eq!(id_of(&store.rendered_data()[0]), 0);
}

#[test]
fn test_filter_records_text_and_reslices() {
    let mut store = GridStore::new(&continuous_config());
    store.load_rows(rows(100));
    store.scroll_to(0.0, 1000.0);
    assert_eq!(store.rendered_data().len(), 21);

    let matching: Vec<DataRow> = rows(100).into_iter().filter(|r| id_of(r) % 10 == 0).collect();
    assert!(store.apply_filter("id ends with 0", matching));

    assert_eq!(filter_selector(store.state()), "id ends with 0");
    assert_eq!(store.state().data.len(), 10);
    // window 36..57 is past the 10 filtered rows
    assert!(store.rendered_data().is_empty());
}

#[test]
fn test_sort_records_columns_and_reslices() {
    let mut store = GridStore::new(&continuous_config());
    store.load_rows(rows(50));

    let mut sorted = rows(50);
    sorted.reverse();
    store.apply_sort(vec!["id".to_string()], vec![SortOrder::Descending], sorted);

    assert_eq!(sort_columns_selector(store.state()), ["id"]);
    assert_eq!(store.state().sort_directions, vec![SortOrder::Descending]);
    assert_eq!(id_of(&store.rendered_data()[0]), 49);
}

#[test]
fn test_load_json_rows() {
    let mut store = GridStore::new(&Config::default());
    store
        .load_json(&json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ]))
        .unwrap();

    assert_eq!(store.rendered_data().len(), 2);
    assert_eq!(
        store.rendered_data()[1].get("name"),
        Some(&DataValue::from("Bob"))
    );
}

#[test]
fn test_load_json_rejects_non_array() {
    let mut store = GridStore::new(&Config::default());
    let err = store.load_json(&json!({"id": 1})).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load rows from JSON"));
    assert!(store.state().data.is_empty());
}

#[test]
fn test_subscribers_see_applied_updates_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = GridStore::new(&continuous_config());
    store.subscribe(Box::new(Recorder { seen: seen.clone() }));

    store.load_rows(rows(100));
    store.scroll_to(0.0, 500.0);
    store.scroll_to(0.0, 505.0);
    store.next_page();

    assert_eq!(
        *seen.borrow(),
        vec!["LOADED_DATA", "XY_POSITION_CHANGED", "NEXT_PAGE"]
    );
    assert_eq!(store.action_history().count(), 4);
}

#[test]
fn test_config_layout_drives_window() {
    let mut config = continuous_config();
    config.position.table_height = 200.0;
    config.position.row_height = 20.0;

    let mut store = GridStore::new(&config);
    store.load_rows(rows(500));
    store.scroll_to(0.0, 2000.0);

    // 10 visible rows: 2.5 above (floored) and 12.5 in total (ceiled)
    let position = store.state().position;
    assert_eq!(position.rendered_start_display_index, 97);
    assert_eq!(position.rendered_end_display_index, 111);
}
