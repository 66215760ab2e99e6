use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Shared, immutable row collection used for `data` and `renderedData`
pub type Rows = Arc<[DataRow]>;

/// Create an empty row collection
pub fn empty_rows() -> Rows {
    Arc::from(Vec::new())
}

/// A single cell value in a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl DataValue {
    /// Convert a JSON scalar into a cell value.
    /// Arrays and objects are kept as their JSON text.
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => DataValue::Null,
            JsonValue::Bool(b) => DataValue::Boolean(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DataValue::Integer(i)
                } else {
                    DataValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => DataValue::String(s.clone()),
            other => DataValue::String(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, ""),
            DataValue::Boolean(b) => write!(f, "{}", b),
            DataValue::Integer(i) => write!(f, "{}", i),
            DataValue::Float(v) => write!(f, "{}", v),
            DataValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Integer(i)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Float(v)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Boolean(b)
    }
}

/// A row record: column key to value.
///
/// Cells live behind an `Arc`, so cloning a row (e.g. when slicing a render
/// window out of the visible data) never copies the values themselves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow {
    cells: Arc<BTreeMap<String, DataValue>>,
}

impl DataRow {
    pub fn new(cells: BTreeMap<String, DataValue>) -> Self {
        Self {
            cells: Arc::new(cells),
        }
    }

    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<DataValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a row from a JSON object
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| anyhow!("Expected a JSON object for a row, got: {}", value))?;

        Ok(Self::new(
            object
                .iter()
                .map(|(k, v)| (k.clone(), DataValue::from_json(v)))
                .collect(),
        ))
    }

    pub fn get(&self, column: &str) -> Option<&DataValue> {
        self.cells.get(column)
    }

    /// Column keys in key order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if both rows share the same cell storage
    pub fn ptr_eq(&self, other: &DataRow) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }
}

/// Convert a JSON array of objects into rows
pub fn rows_from_json(value: &JsonValue) -> Result<Vec<DataRow>> {
    let items = value
        .as_array()
        .ok_or_else(|| anyhow!("Expected a JSON array of row objects"))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            DataRow::from_json(item).map_err(|e| anyhow!("Row {} is invalid: {}", i, e))
        })
        .collect()
}
