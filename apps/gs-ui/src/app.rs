use crate::fetch_worker::{FetchOutcome, FetchPayload, FetchWorker};
use crate::views::{PlotPane, TableGrid};
use gs_client::{ClientResult, DataReply, ExplorerClient, LoadReply};
use gs_select::{Command, Event, Machine, Mode, Plan, ViewKind};
use gs_view::{SeriesBundle, TableModel, shape_static_table, shape_varying_table, to_series};

/// Shown to the user when a fetch dies in transport rather than with a
/// backend-provided message.
const FETCH_FAILED: &str = "Error fetching data. Please try again.";

pub struct ExplorerApp {
    machine: Machine,
    worker: FetchWorker,
    pending_fetches: usize,
    network_input: String,
    acknowledgment: Option<String>,
    output: OutputState,
    table_grid: TableGrid,
    plot_pane: PlotPane,
}

/// What the single output region currently hosts.
enum OutputState {
    Empty,
    Loading,
    Notice(String),
    Table(TableModel),
    Plot(SeriesBundle),
}

impl ExplorerApp {
    pub fn new(base_url: &str) -> Self {
        let client = ExplorerClient::new(base_url);
        Self {
            machine: Machine::new(),
            worker: FetchWorker::new(client),
            pending_fetches: 0,
            network_input: String::new(),
            acknowledgment: None,
            output: OutputState::Empty,
            table_grid: TableGrid::default(),
            plot_pane: PlotPane::default(),
        }
    }

    /// Issue a plan's fetches. Data-bearing fetches replace the output
    /// with a loading indicator first so stale content never flashes.
    fn run_plan(&mut self, plan: Plan) {
        for command in plan.commands {
            if matches!(
                command,
                Command::FetchStatic { .. }
                    | Command::FetchAttributes { .. }
                    | Command::FetchSeries { .. }
            ) {
                self.output = OutputState::Loading;
            }
            self.pending_fetches += 1;
            self.worker.dispatch(plan.epoch, command);
        }
    }

    fn poll_worker(&mut self) {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.worker.outcome_rx.try_recv() {
            outcomes.push(outcome);
        }

        for FetchOutcome { epoch, payload } in outcomes {
            self.pending_fetches = self.pending_fetches.saturating_sub(1);
            if !self.machine.is_current(epoch) {
                tracing::debug!("discarding outcome of a superseded fetch");
                continue;
            }
            self.handle_payload(payload);
        }
    }

    fn handle_payload(&mut self, payload: FetchPayload) {
        match payload {
            FetchPayload::NetworkLoad { network, reply } => {
                self.handle_network_load(network, reply)
            }
            FetchPayload::Components(reply) => match reply {
                Ok(components) => {
                    let plan = self.machine.apply(Event::ComponentsListed { components });
                    self.run_plan(plan);
                }
                // Keep whatever the UI showed before; the diagnostic is
                // enough.
                Err(e) => tracing::error!("component list refresh failed: {e}"),
            },
            FetchPayload::StaticData(reply) => match reply {
                Ok(DataReply::Dataset(dataset)) => match shape_static_table(&dataset) {
                    Ok(table) => self.show_table(table),
                    Err(e) => self.notice(e.to_string()),
                },
                Ok(DataReply::Error { message }) => self.notice(message),
                Err(e) => {
                    tracing::error!("static data fetch failed: {e}");
                    self.notice(FETCH_FAILED);
                }
            },
            FetchPayload::Attributes(reply) => match reply {
                Ok(listing) => {
                    let plan = self.machine.apply(Event::AttributesListed {
                        attributes: listing.varying,
                    });
                    let fetches_data = !plan.commands.is_empty();
                    self.run_plan(plan);
                    if !fetches_data {
                        self.notice("No varying attributes for this component.");
                    }
                }
                Err(e) => {
                    tracing::error!("attribute listing failed: {e}");
                    self.notice(FETCH_FAILED);
                }
            },
            FetchPayload::SeriesData(reply) => match reply {
                Ok(DataReply::Dataset(dataset)) => match self.machine.selection().view {
                    ViewKind::Table => match shape_varying_table(&dataset) {
                        Ok(table) => self.show_table(table),
                        Err(e) => self.notice(e.to_string()),
                    },
                    ViewKind::Plot => {
                        let selection = self.machine.selection();
                        let component = selection.component.clone().unwrap_or_default();
                        let attribute = selection.attribute.clone().unwrap_or_default();
                        self.output =
                            OutputState::Plot(to_series(&dataset, &component, &attribute));
                    }
                },
                Ok(DataReply::Error { message }) => self.notice(message),
                Err(e) => {
                    tracing::error!("varying data fetch failed: {e}");
                    self.notice(FETCH_FAILED);
                }
            },
        }
    }

    fn handle_network_load(&mut self, network: String, reply: ClientResult<LoadReply>) {
        match reply {
            Ok(load) => {
                self.acknowledgment = Some(load.acknowledgment().to_string());
                let event = if load.is_success() {
                    Event::NetworkLoaded { network }
                } else {
                    Event::NetworkRejected
                };
                let plan = self.machine.apply(event);
                self.run_plan(plan);
            }
            Err(e) => {
                tracing::error!("network load failed: {e}");
                self.acknowledgment = Some(format!("Failed to load the network: {e}"));
                self.machine.apply(Event::NetworkRejected);
            }
        }
    }

    fn show_table(&mut self, table: TableModel) {
        // Fresh model, fresh grid: sort, page, and scroll state from the
        // previous table must not leak into the new one.
        self.table_grid.reset();
        self.output = OutputState::Table(table);
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.output = OutputState::Notice(message.into());
    }

    fn show_acknowledgment(&mut self, ctx: &egui::Context) {
        let Some(message) = self.acknowledgment.clone() else {
            return;
        };
        egui::Window::new("Network Load")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.acknowledgment = None;
                }
            });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Network:");
            ui.text_edit_singleline(&mut self.network_input);
            if ui.button("Load").clicked() {
                let plan = self.machine.apply(Event::LoadRequested {
                    network: self.network_input.trim().to_string(),
                });
                self.run_plan(plan);
            }
            if let Some(network) = &self.machine.selection().network {
                ui.label(format!("Loaded: {network}"));
            }
        });

        ui.horizontal(|ui| {
            // Clone the option lists so picking can mutate the machine.
            let components = self.machine.components().to_vec();
            let current = self.machine.selection().component.clone();

            ui.label("Component:");
            let mut picked = None;
            egui::ComboBox::from_id_salt("component_selector")
                .selected_text(current.clone().unwrap_or_else(|| "—".to_string()))
                .show_ui(ui, |ui| {
                    for name in &components {
                        if ui
                            .selectable_label(current.as_deref() == Some(name.as_str()), name)
                            .clicked()
                        {
                            picked = Some(name.clone());
                        }
                    }
                });
            if let Some(component) = picked {
                let plan = self.machine.apply(Event::ComponentPicked { component });
                self.run_plan(plan);
            }

            ui.separator();

            let mode_before = self.machine.selection().mode;
            let mut mode = mode_before;
            ui.selectable_value(&mut mode, Mode::Static, "Static");
            ui.selectable_value(&mut mode, Mode::Varying, "Varying");
            if mode != mode_before {
                let plan = self.machine.apply(Event::ModePicked { mode });
                self.run_plan(plan);
            }

            if self.machine.varying_controls_visible() {
                ui.separator();

                let attributes = self.machine.attributes().to_vec();
                let current = self.machine.selection().attribute.clone();

                ui.label("Attribute:");
                let mut picked = None;
                egui::ComboBox::from_id_salt("attribute_selector")
                    .selected_text(current.clone().unwrap_or_else(|| "—".to_string()))
                    .show_ui(ui, |ui| {
                        for name in &attributes {
                            if ui
                                .selectable_label(current.as_deref() == Some(name.as_str()), name)
                                .clicked()
                            {
                                picked = Some(name.clone());
                            }
                        }
                    });
                if let Some(attribute) = picked {
                    let plan = self.machine.apply(Event::AttributePicked { attribute });
                    self.run_plan(plan);
                }

                let view_before = self.machine.selection().view;
                let mut view = view_before;
                ui.selectable_value(&mut view, ViewKind::Table, "Table");
                ui.selectable_value(&mut view, ViewKind::Plot, "Plot");
                if view != view_before {
                    let plan = self.machine.apply(Event::ViewPicked { view });
                    self.run_plan(plan);
                }
            }
        });
    }

    fn show_output(&mut self, ui: &mut egui::Ui) {
        match &self.output {
            OutputState::Empty => {
                ui.label("Load a network and pick a component to inspect.");
            }
            OutputState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
            OutputState::Notice(message) => {
                ui.colored_label(egui::Color32::RED, message);
            }
            OutputState::Table(table) => {
                self.table_grid.show(ui, table);
            }
            OutputState::Plot(bundle) => {
                self.plot_pane.show(ui, bundle);
            }
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        self.show_acknowledgment(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_controls(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_output(ui);
        });

        // Worker completions arrive between frames; keep repainting while
        // anything is in flight.
        if self.pending_fetches > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
