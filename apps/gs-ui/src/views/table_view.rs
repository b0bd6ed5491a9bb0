//! Paginated, sortable grid over a finished table model.

use egui_extras::{Column, TableBuilder};
use gs_view::TableModel;
use std::cmp::Ordering;

const PAGE_SIZES: [usize; 3] = [20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq)]
struct SortSpec {
    column: usize,
    ascending: bool,
}

/// Interactive state layered over a [`TableModel`]: sort order, page size
/// and current page. [`TableGrid::reset`] returns everything to defaults
/// when a new model is installed.
#[derive(Default)]
pub struct TableGrid {
    page: usize,
    page_size_index: usize,
    sort: Option<SortSpec>,
    order: Vec<usize>,
    order_dirty: bool,
}

impl TableGrid {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, model: &TableModel) {
        if self.order_dirty || self.order.len() != model.row_count() {
            self.rebuild_order(model);
        }

        self.show_pagination(ui, model.row_count());
        ui.add_space(4.0);

        let page_size = PAGE_SIZES[self.page_size_index];
        let start = (self.page * page_size).min(self.order.len());
        let end = (start + page_size).min(self.order.len());
        let page_rows = &self.order[start..end];

        let mut clicked_column = None;

        egui::ScrollArea::both()
            .id_salt("table_grid_scroll")
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(Column::auto().at_least(60.0), model.column_count())
                    .header(22.0, |mut header| {
                        for (i, title) in model.headers.iter().enumerate() {
                            header.col(|ui| {
                                let marker = match self.sort {
                                    Some(spec) if spec.column == i && spec.ascending => " ^",
                                    Some(spec) if spec.column == i => " v",
                                    _ => "",
                                };
                                if ui.button(format!("{title}{marker}")).clicked() {
                                    clicked_column = Some(i);
                                }
                            });
                        }
                    })
                    .body(|body| {
                        // Virtualized: only visible rows of the current
                        // page are ever laid out.
                        body.rows(20.0, page_rows.len(), |mut row| {
                            let cells = &model.rows[page_rows[row.index()]];
                            for cell in cells {
                                row.col(|ui| {
                                    ui.label(cell);
                                });
                            }
                        });
                    });
            });

        if let Some(column) = clicked_column {
            self.toggle_sort(column);
        }
    }

    fn show_pagination(&mut self, ui: &mut egui::Ui, total_rows: usize) {
        let page_size = PAGE_SIZES[self.page_size_index];
        let page_count = total_rows.div_ceil(page_size).max(1);
        self.page = self.page.min(page_count - 1);

        ui.horizontal(|ui| {
            ui.label("Rows per page:");
            egui::ComboBox::from_id_salt("page_size_selector")
                .selected_text(page_size.to_string())
                .show_ui(ui, |ui| {
                    for (i, size) in PAGE_SIZES.iter().enumerate() {
                        if ui
                            .selectable_label(i == self.page_size_index, size.to_string())
                            .clicked()
                        {
                            self.page_size_index = i;
                            self.page = 0;
                        }
                    }
                });

            ui.separator();

            if ui
                .add_enabled(self.page > 0, egui::Button::new("Prev"))
                .clicked()
            {
                self.page -= 1;
            }

            let start = self.page * page_size;
            let end = (start + page_size).min(total_rows);
            if total_rows == 0 {
                ui.label("no rows");
            } else {
                ui.label(format!("{}-{} of {}", start + 1, end, total_rows));
            }

            if ui
                .add_enabled(self.page + 1 < page_count, egui::Button::new("Next"))
                .clicked()
            {
                self.page += 1;
            }
        });
    }

    fn rebuild_order(&mut self, model: &TableModel) {
        let mut order: Vec<usize> = (0..model.row_count()).collect();
        if let Some(SortSpec { column, ascending }) = self.sort {
            order.sort_by(|&a, &b| {
                let ord = compare_cells(
                    model.rows[a].get(column).map(String::as_str).unwrap_or(""),
                    model.rows[b].get(column).map(String::as_str).unwrap_or(""),
                );
                if ascending { ord } else { ord.reverse() }
            });
        }
        self.order = order;
        self.order_dirty = false;
    }

    fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(spec) if spec.column == column => Some(SortSpec {
                column,
                ascending: !spec.ascending,
            }),
            _ => Some(SortSpec {
                column,
                ascending: true,
            }),
        };
        self.order_dirty = true;
    }
}

/// Numeric cells order numerically and ahead of text; text (the "N/A"
/// placeholder included) orders lexically after them.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
