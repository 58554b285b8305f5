// NetVision - ui/panels/filters.rs
//
// Filter controls for the results view: quick filters, risk/state
// checkboxes, text search, regex search.

use crate::app::state::AppState;
use crate::core::model::{PortState, RiskLevel};
use crate::ui::theme;

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("FILTERS");
    ui.separator();

    // Quick filters
    ui.horizontal(|ui| {
        if ui.button("High Risk").clicked() {
            state.filter_state = crate::core::filter::FilterState::high_risk_only();
            state.regex_input.clear();
            state.regex_error = None;
            state.apply_filters();
        }
        if ui.button("Open Only").clicked() {
            state.filter_state = crate::core::filter::FilterState::open_only();
            state.regex_input.clear();
            state.regex_error = None;
            state.apply_filters();
        }
        if ui.button("Clear").clicked() {
            state.filter_state = crate::core::filter::FilterState::default();
            state.regex_input.clear();
            state.regex_error = None;
            state.apply_filters();
        }
    });

    ui.separator();

    // Risk level checkboxes
    ui.label("Risk level:");
    let mut changed = false;
    for risk in RiskLevel::all() {
        let mut checked = state.filter_state.risk_levels.contains(risk);
        let label = egui::RichText::new(risk.label()).color(theme::risk_colour(risk));
        if ui.checkbox(&mut checked, label).changed() {
            if checked {
                state.filter_state.risk_levels.insert(*risk);
            } else {
                state.filter_state.risk_levels.remove(risk);
            }
            changed = true;
        }
    }

    ui.separator();

    // Port state checkboxes
    ui.label("State:");
    for port_state in [PortState::Open, PortState::Filtered, PortState::Closed] {
        let mut checked = state.filter_state.states.contains(&port_state);
        if ui.checkbox(&mut checked, port_state.label()).changed() {
            if checked {
                state.filter_state.states.insert(port_state);
            } else {
                state.filter_state.states.remove(&port_state);
            }
            changed = true;
        }
    }
    if changed {
        state.apply_filters();
    }

    ui.separator();

    // Text search
    ui.label("Search:");
    let text_response = ui.text_edit_singleline(&mut state.filter_state.text_search);
    if text_response.changed() {
        state.apply_filters();
    }

    // Regex search
    ui.label("Regex:");
    let regex_response = ui.text_edit_singleline(&mut state.regex_input);
    if regex_response.changed() {
        match state.filter_state.set_regex(&state.regex_input) {
            Ok(()) => {
                state.regex_error = None;
                state.apply_filters();
            }
            Err(e) => {
                state.regex_error = Some(e.to_string());
            }
        }
    }
    if let Some(ref err) = state.regex_error {
        ui.label(
            egui::RichText::new(err)
                .color(theme::risk_colour(&RiskLevel::Critical))
                .small(),
        );
    }
}
