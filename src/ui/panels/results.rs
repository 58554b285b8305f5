// NetVision - ui/panels/results.rs
//
// Central results view for the profiler: summary header plus a scrolling
// list of port cards, coloured by risk level. Renders only the records in
// `state.filtered_indices`.

use crate::app::state::AppState;
use crate::core::model::PortState;
use crate::ui::theme;

/// Render the results pane.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(session) = state.session.as_ref() else {
        render_standby(ui, state);
        return;
    };

    // ---- Summary header ----
    ui.horizontal(|ui| {
        ui.heading("SCAN COMPLETE");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(
                    session.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                )
                .small()
                .weak(),
            );
        });
    });
    ui.label(egui::RichText::new(format!("TARGET: {}", session.target)).strong());
    ui.add_space(4.0);
    ui.label(&session.report.summary);
    ui.add_space(4.0);

    let total = session.report.ports.len();
    let shown = state.filtered_indices.len();
    if shown == total {
        ui.label(egui::RichText::new(format!("{total} port(s) profiled")).weak());
    } else {
        ui.label(egui::RichText::new(format!("{shown} of {total} port(s) shown")).weak());
    }

    ui.separator();

    // ---- Port cards ----
    if shown == 0 {
        ui.centered_and_justified(|ui| {
            if total == 0 {
                ui.label("The model reported no ports for this target.");
            } else {
                ui.label("No ports match the current filters.");
            }
        });
        return;
    }

    let amber = state.amber_palette;
    egui::ScrollArea::vertical()
        .id_salt("port_cards")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for &idx in &state.filtered_indices {
                let Some(port) = session.report.ports.get(idx) else {
                    continue;
                };
                render_port_card(ui, port, amber);
                ui.add_space(6.0);
            }
        });
}

/// Placeholder shown before the first scan and while one is running.
fn render_standby(ui: &mut egui::Ui, state: &AppState) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            if state.profile_in_progress {
                ui.spinner();
                ui.add_space(8.0);
                ui.label("ANALYZING NETWORK TOPOLOGY...");
            } else {
                ui.heading("SYSTEM STANDBY");
                ui.label(egui::RichText::new("AWAITING TARGET INPUT").weak());
            }
        });
    });
}

/// One port record as a bordered card.
fn render_port_card(ui: &mut egui::Ui, port: &crate::core::model::PortProfile, amber: bool) {
    let risk_colour = theme::risk_colour(&port.risk_level);
    let fill = theme::risk_bg_colour(&port.risk_level).unwrap_or(theme::TERMINAL_BLACK);

    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, risk_colour))
        .inner_margin(theme::CARD_INNER_MARGIN)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Header row: port number, protocol badge, risk badge.
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(port.port.to_string())
                        .size(22.0)
                        .strong()
                        .color(risk_colour),
                );
                ui.label(egui::RichText::new(port.protocol.label()).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("[{}]", port.risk_level.short_label()))
                            .color(risk_colour)
                            .strong(),
                    );
                });
            });

            // Service + state.
            let state_glyph = match port.state {
                PortState::Open => "\u{25b6}",
                _ => "\u{25a0}",
            };
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(state_glyph)
                        .color(theme::state_colour(&port.state, amber))
                        .small(),
                );
                ui.label(egui::RichText::new(port.service.to_uppercase()).strong());
                ui.label(egui::RichText::new(port.state.label()).weak().small());
            });

            if !port.description.is_empty() {
                ui.label(egui::RichText::new(&port.description).small());
            }

            // Vulnerability listing.
            if !port.vulnerabilities.is_empty() {
                ui.add_space(4.0);
                ui.separator();
                for vuln in &port.vulnerabilities {
                    let sev_colour = theme::risk_colour(&vuln.severity);
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(format!("\u{26a0} {}", vuln.id))
                                .color(sev_colour)
                                .small()
                                .strong(),
                        );
                        ui.label(egui::RichText::new(&vuln.description).small());
                    });
                }
            }
        });
}
