//! Insertion-ordered columnar datasets.

use crate::CellValue;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Reserved column name for the time axis of varying data.
pub const SNAPSHOTS_KEY: &str = "snapshots";

/// One named column of cells.
pub type Column = Vec<CellValue>;

/// A columnar dataset as served by the backend: column name -> cells.
///
/// Columns keep their wire order, so header order and row shaping are
/// deterministic rather than dependent on hash iteration. Rows align by
/// index across columns; the reserved `snapshots` column, when present, is
/// the time axis and is not counted as a data column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column. A replaced column keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Number of columns, the axis included.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Columns excluding the `snapshots` axis.
    pub fn data_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.iter().filter(|(name, _)| *name != SNAPSHOTS_KEY)
    }

    pub fn snapshots(&self) -> Option<&Column> {
        self.get(SNAPSHOTS_KEY)
    }

    /// Row count: the axis length when present, else the first column's.
    pub fn row_count(&self) -> usize {
        if let Some(axis) = self.snapshots() {
            axis.len()
        } else {
            self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
        }
    }

    /// Remove and return the `snapshots` column.
    ///
    /// Varying-path callers detach the axis before filtering so an
    /// all-null axis cannot be dropped by the emptiness rule, then put it
    /// back with [`Dataset::attach_axis`].
    pub fn detach_axis(&mut self) -> Option<Column> {
        let idx = self.columns.iter().position(|(n, _)| n == SNAPSHOTS_KEY)?;
        Some(self.columns.remove(idx).1)
    }

    /// Reinstall a detached axis at the front of the dataset.
    pub fn attach_axis(&mut self, axis: Column) {
        self.columns.retain(|(n, _)| n != SNAPSHOTS_KEY);
        self.columns.insert(0, (SNAPSHOTS_KEY.to_string(), axis));
    }
}

impl FromIterator<(String, Column)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (String, Column)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for (name, column) in iter {
            dataset.insert(name, column);
        }
        dataset
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, column) in &self.columns {
            map.serialize_entry(name, column)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = Dataset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column name to value sequence")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dataset, A::Error> {
                let mut dataset = Dataset::new();
                while let Some((name, column)) = access.next_entry::<String, Column>()? {
                    dataset.insert(name, column);
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}
