//! Time-series plot rendering.

use egui_plot::{Legend, Line, Plot, PlotPoints};
use gs_data::CellValue;
use gs_view::SeriesBundle;

#[derive(Default)]
pub struct PlotPane;

impl PlotPane {
    pub fn show(&self, ui: &mut egui::Ui, bundle: &SeriesBundle) {
        if bundle.is_empty() {
            ui.label("No snapshot axis in this dataset; nothing to plot.");
            return;
        }

        ui.heading(&bundle.layout.title);
        ui.add_space(4.0);

        let mut lines = Vec::new();
        for series in &bundle.series {
            let mut points = Vec::new();
            for (i, y) in series.y.iter().enumerate() {
                if let Some(y) = y {
                    points.push([x_value(bundle.x.get(i), i), *y]);
                }
            }
            if !points.is_empty() {
                let plot_points: PlotPoints = points.into();
                lines.push(Line::new(plot_points).name(&series.label));
            }
        }

        Plot::new("series_plot")
            .legend(Legend::default())
            .x_axis_label(bundle.layout.x_label.clone())
            .y_axis_label(bundle.layout.y_label.clone())
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });
    }
}

/// Numeric stamps plot at their value; text stamps (timestamps) at their
/// row index.
fn x_value(stamp: Option<&CellValue>, index: usize) -> f64 {
    stamp.and_then(CellValue::as_f64).unwrap_or(index as f64)
}
