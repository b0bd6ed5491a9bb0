//! Series reshaping for the plot backend.

use gs_data::{CellValue, Column, Dataset};

/// Axis labels and title for a rendered time-series plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// One named line: y samples aligned by index with the shared x axis.
/// Samples that are not numeric come through as `None` and are skipped by
/// the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub y: Vec<Option<f64>>,
}

/// Everything the plot view needs: the shared `snapshots` axis, one series
/// per data column, and the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBundle {
    pub x: Column,
    pub series: Vec<Series>,
    pub layout: PlotLayout,
}

impl SeriesBundle {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Reshape varying data into line series.
///
/// A dataset without a `snapshots` axis yields zero series — degraded, not
/// an error; the view reports that nothing can be plotted.
pub fn to_series(dataset: &Dataset, component: &str, attribute: &str) -> SeriesBundle {
    let layout = PlotLayout {
        title: format!("{component} {attribute} Time Series"),
        x_label: "Time".to_string(),
        y_label: "Value".to_string(),
    };

    let Some(axis) = dataset.snapshots() else {
        return SeriesBundle {
            x: Vec::new(),
            series: Vec::new(),
            layout,
        };
    };

    let series = dataset
        .data_columns()
        .map(|(name, column)| Series {
            label: name.to_string(),
            y: column.iter().map(CellValue::as_f64).collect(),
        })
        .collect();

    SeriesBundle {
        x: axis.clone(),
        series,
        layout,
    }
}
