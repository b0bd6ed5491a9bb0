//! Selection state and transitions.

use serde::{Deserialize, Serialize};

/// Whether the user inspects one static snapshot or a time-varying series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Static,
    Varying,
}

/// How varying data is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewKind {
    #[default]
    Table,
    Plot,
}

/// Ticket for staleness checks. Every selection-changing event advances
/// the machine's epoch; a fetch issued under an older epoch is dead on
/// arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Epoch(pub u64);

/// The cascading selection, exactly as the controls show it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub network: Option<String>,
    pub component: Option<String>,
    pub mode: Mode,
    pub attribute: Option<String>,
    pub view: ViewKind,
}

/// User interactions and backend outcomes the machine reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoadRequested { network: String },
    NetworkLoaded { network: String },
    NetworkRejected,
    ComponentsListed { components: Vec<String> },
    ComponentPicked { component: String },
    ModePicked { mode: Mode },
    AttributesListed { attributes: Vec<String> },
    AttributePicked { attribute: String },
    ViewPicked { view: ViewKind },
}

/// Fetches the shell must issue in response to a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadNetwork { network: String },
    FetchComponents,
    FetchStatic { component: String },
    FetchAttributes { component: String },
    FetchSeries { component: String, attribute: String },
}

/// A transition's output: the epoch the commands were issued under plus
/// the commands themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub epoch: Epoch,
    pub commands: Vec<Command>,
}

#[derive(Debug, Default)]
pub struct Machine {
    selection: Selection,
    components: Vec<String>,
    attributes: Vec<String>,
    epoch: Epoch,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Whether a response issued under `epoch` may still touch the UI.
    pub fn is_current(&self, epoch: Epoch) -> bool {
        epoch == self.epoch
    }

    /// Attribute and view selectors only apply to varying data.
    pub fn varying_controls_visible(&self) -> bool {
        self.selection.mode == Mode::Varying
    }

    /// Apply one event and plan the fetches it requires.
    ///
    /// Every transition that changes the selection advances the epoch
    /// first, so responses to superseded fetches are discarded even when
    /// the transition itself issues nothing.
    pub fn apply(&mut self, event: Event) -> Plan {
        let commands = match event {
            Event::LoadRequested { network } => {
                if network.is_empty() {
                    return self.plan(Vec::new());
                }
                self.bump();
                vec![Command::LoadNetwork { network }]
            }
            Event::NetworkLoaded { network } => {
                // Component list is repopulated on every successful load.
                self.bump();
                self.selection.network = Some(network);
                vec![Command::FetchComponents]
            }
            Event::NetworkRejected => Vec::new(),
            Event::ComponentsListed { components } => {
                self.bump();
                self.selection.component = components.first().cloned();
                self.components = components;
                // The selector now shows the first entry, but data flows
                // only once the user picks a component or mode.
                Vec::new()
            }
            Event::ComponentPicked { component } => {
                self.bump();
                self.selection.component = Some(component);
                self.mode_branch()
            }
            Event::ModePicked { mode } => {
                self.bump();
                self.selection.mode = mode;
                self.mode_branch()
            }
            Event::AttributesListed { attributes } => {
                self.bump();
                self.selection.attribute = attributes.first().cloned();
                self.attributes = attributes;
                // Auto-trigger: proceed straight to the data fetch for the
                // first attribute, as if the selector had changed.
                self.series_fetch()
            }
            Event::AttributePicked { attribute } => {
                self.bump();
                self.selection.attribute = Some(attribute);
                self.series_fetch()
            }
            Event::ViewPicked { view } => {
                self.bump();
                self.selection.view = view;
                // A view change refetches through the same path, so both
                // views share one error-handling branch.
                self.series_fetch()
            }
        };
        self.plan(commands)
    }

    fn plan(&self, commands: Vec<Command>) -> Plan {
        Plan {
            epoch: self.epoch,
            commands,
        }
    }

    fn bump(&mut self) {
        self.epoch.0 += 1;
    }

    /// Static mode wants the full snapshot; varying mode first refreshes
    /// the attribute list.
    fn mode_branch(&self) -> Vec<Command> {
        let Some(component) = self.selection.component.clone() else {
            return Vec::new();
        };
        match self.selection.mode {
            Mode::Static => vec![Command::FetchStatic { component }],
            Mode::Varying => vec![Command::FetchAttributes { component }],
        }
    }

    fn series_fetch(&self) -> Vec<Command> {
        if self.selection.mode != Mode::Varying {
            return Vec::new();
        }
        match (&self.selection.component, &self.selection.attribute) {
            (Some(component), Some(attribute)) => vec![Command::FetchSeries {
                component: component.clone(),
                attribute: attribute.clone(),
            }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_machine() -> Machine {
        let mut machine = Machine::new();
        machine.apply(Event::LoadRequested {
            network: "grid.h5".to_string(),
        });
        machine.apply(Event::NetworkLoaded {
            network: "grid.h5".to_string(),
        });
        machine.apply(Event::ComponentsListed {
            components: vec!["Bus".to_string(), "Generator".to_string()],
        });
        machine
    }

    #[test]
    fn empty_network_name_is_ignored() {
        let mut machine = Machine::new();
        let before = machine.epoch();
        let plan = machine.apply(Event::LoadRequested {
            network: String::new(),
        });
        assert!(plan.commands.is_empty());
        assert_eq!(machine.epoch(), before);
    }

    #[test]
    fn successful_load_refreshes_components() {
        let mut machine = Machine::new();
        let plan = machine.apply(Event::NetworkLoaded {
            network: "grid.h5".to_string(),
        });
        assert_eq!(plan.commands, [Command::FetchComponents]);

        let plan = machine.apply(Event::ComponentsListed {
            components: vec!["Bus".to_string()],
        });
        assert!(plan.commands.is_empty());
        assert_eq!(machine.selection().component.as_deref(), Some("Bus"));
    }

    #[test]
    fn rejected_load_changes_nothing() {
        let mut machine = Machine::new();
        let before = machine.epoch();
        let plan = machine.apply(Event::NetworkRejected);
        assert!(plan.commands.is_empty());
        assert_eq!(machine.epoch(), before);
        assert_eq!(machine.selection().network, None);
    }

    #[test]
    fn static_mode_issues_exactly_one_snapshot_fetch() {
        let mut machine = loaded_machine();
        machine.apply(Event::ModePicked { mode: Mode::Varying });

        let plan = machine.apply(Event::ModePicked { mode: Mode::Static });
        assert_eq!(
            plan.commands,
            [Command::FetchStatic {
                component: "Bus".to_string()
            }]
        );
        assert!(!machine.varying_controls_visible());
    }

    #[test]
    fn component_switch_in_varying_refetches_attributes_first() {
        let mut machine = loaded_machine();
        machine.apply(Event::ModePicked { mode: Mode::Varying });

        let plan = machine.apply(Event::ComponentPicked {
            component: "Generator".to_string(),
        });
        assert_eq!(
            plan.commands,
            [Command::FetchAttributes {
                component: "Generator".to_string()
            }]
        );
        assert!(machine.varying_controls_visible());
    }

    #[test]
    fn attribute_list_auto_triggers_the_data_fetch() {
        let mut machine = loaded_machine();
        machine.apply(Event::ModePicked { mode: Mode::Varying });

        let plan = machine.apply(Event::AttributesListed {
            attributes: vec!["p_set".to_string(), "p_max_pu".to_string()],
        });
        assert_eq!(machine.selection().attribute.as_deref(), Some("p_set"));
        assert_eq!(
            plan.commands,
            [Command::FetchSeries {
                component: "Bus".to_string(),
                attribute: "p_set".to_string()
            }]
        );
    }

    #[test]
    fn empty_attribute_list_fetches_nothing() {
        let mut machine = loaded_machine();
        machine.apply(Event::ModePicked { mode: Mode::Varying });

        let plan = machine.apply(Event::AttributesListed {
            attributes: Vec::new(),
        });
        assert!(plan.commands.is_empty());
        assert_eq!(machine.selection().attribute, None);
    }

    #[test]
    fn view_switch_refetches_series() {
        let mut machine = loaded_machine();
        machine.apply(Event::ModePicked { mode: Mode::Varying });
        machine.apply(Event::AttributesListed {
            attributes: vec!["p_set".to_string()],
        });

        let plan = machine.apply(Event::ViewPicked {
            view: ViewKind::Plot,
        });
        assert_eq!(
            plan.commands,
            [Command::FetchSeries {
                component: "Bus".to_string(),
                attribute: "p_set".to_string()
            }]
        );
    }

    #[test]
    fn view_switch_in_static_mode_is_inert() {
        let mut machine = loaded_machine();
        let plan = machine.apply(Event::ViewPicked {
            view: ViewKind::Plot,
        });
        assert!(plan.commands.is_empty());
    }

    #[test]
    fn superseded_fetches_go_stale() {
        let mut machine = loaded_machine();
        let static_plan = machine.apply(Event::ModePicked { mode: Mode::Static });
        assert!(machine.is_current(static_plan.epoch));

        // A slow static fetch must not clobber the varying view the user
        // switched to in the meantime.
        let varying_plan = machine.apply(Event::ModePicked { mode: Mode::Varying });
        assert!(!machine.is_current(static_plan.epoch));
        assert!(machine.is_current(varying_plan.epoch));
    }
}
