//! Table model construction.

use gs_data::{CellValue, Dataset, filter_empty_columns};
use thiserror::Error;

/// Header label of the leading time-axis column.
pub const TIME_AXIS_HEADER: &str = "Snapshot";

/// Placeholder for a cell whose column is shorter than the table.
pub const MISSING_CELL: &str = "N/A";

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("No data available")]
    NoData,

    #[error("column '{column}' has {len} rows but the time axis has {axis_len}")]
    AxisLengthMismatch {
        column: String,
        len: usize,
        axis_len: usize,
    },
}

/// A fully shaped table: header labels plus formatted cell text, ready to
/// hand to any grid backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Shape `dataset` into a table.
    ///
    /// With `has_time_axis` the first column is the `snapshots` axis under
    /// a literal "Snapshot" header, and every data column must match the
    /// axis length exactly — a partial axis is reported as
    /// [`TableError::AxisLengthMismatch`] rather than rendered ragged.
    /// Without an axis the row count comes from the first column; a
    /// dataset with no usable column is [`TableError::NoData`], never a
    /// zero-column table.
    pub fn build(dataset: &Dataset, has_time_axis: bool) -> Result<Self, TableError> {
        let axis = if has_time_axis {
            dataset.snapshots()
        } else {
            None
        };

        let row_count = match axis {
            Some(axis) => axis.len(),
            None => match dataset.iter().next() {
                Some((_, first)) if !first.is_empty() => first.len(),
                _ => return Err(TableError::NoData),
            },
        };

        if let Some(axis) = axis {
            for (name, column) in dataset.data_columns() {
                if column.len() != axis.len() {
                    return Err(TableError::AxisLengthMismatch {
                        column: name.to_string(),
                        len: column.len(),
                        axis_len: axis.len(),
                    });
                }
            }
        }

        let mut headers = Vec::new();
        if axis.is_some() {
            headers.push(TIME_AXIS_HEADER.to_string());
        }
        headers.extend(dataset.data_columns().map(|(name, _)| name.to_string()));

        let mut rows = Vec::with_capacity(row_count);
        for i in 0..row_count {
            let mut row = Vec::with_capacity(headers.len());
            if let Some(axis) = axis {
                // Axis stamps render raw: timestamps are labels, not
                // quantities to round.
                row.push(raw_text(&axis[i]));
            }
            for (_, column) in dataset.data_columns() {
                row.push(match column.get(i) {
                    Some(value) => format_cell(value),
                    None => MISSING_CELL.to_string(),
                });
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Static path: drop sparse columns, then shape without a time axis.
pub fn shape_static_table(dataset: &Dataset) -> Result<TableModel, TableError> {
    TableModel::build(&filter_empty_columns(dataset), false)
}

/// Varying path: the axis is detached while filtering so the emptiness
/// rule cannot drop it, then reattached before shaping.
pub fn shape_varying_table(dataset: &Dataset) -> Result<TableModel, TableError> {
    let mut working = dataset.clone();
    let axis = working.detach_axis();
    let mut filtered = filter_empty_columns(&working);
    if let Some(axis) = axis {
        filtered.attach_axis(axis);
    }
    TableModel::build(&filtered, true)
}

/// Anything numeric (including numeric text) renders with exactly two
/// decimals; everything else renders raw.
fn format_cell(value: &CellValue) -> String {
    match value.as_f64() {
        Some(n) => format!("{n:.2}"),
        None => raw_text(value),
    }
}

fn raw_text(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) => n.to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Null => String::new(),
    }
}
