// NetVision - ui/panels/about.rs
//
// About/disclaimer dialog: shown from the Help menu.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;
use crate::ui::theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the disclaimer dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let accent = theme::accent(state.amber_palette);

    let mut open = true;
    egui::Window::new("SYSTEM DISCLAIMER")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("NetVision")
                        .size(26.0)
                        .strong()
                        .color(accent),
                );
                ui.label(egui::RichText::new(format!("v{VERSION}")).size(13.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.label(
                "NetVision is a simulation and educational tool. It asks a \
                 generative-AI model to predict likely open ports and services \
                 based on public knowledge of domain types and service \
                 architectures.",
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "It does NOT perform actual packet-level port scanning \
                     (TCP/UDP) of remote targets. No traffic of any kind is \
                     sent to the profiled target.",
                )
                .color(theme::risk_colour(&crate::core::model::RiskLevel::Critical)),
            );

            ui.add_space(8.0);
            egui::Frame::new()
                .fill(theme::TERMINAL_BLACK)
                .stroke(egui::Stroke::new(1.0, theme::accent_dim(state.amber_palette)))
                .inner_margin(8)
                .show(ui, |ui| {
                    ui.label("> PROTOCOL: SIMULATION_ONLY");
                    ui.label("> ACTIVE_SCAN: DISABLED");
                    let core = if state.api_key_present {
                        "> AI_CORE: ONLINE"
                    } else {
                        "> AI_CORE: OFFLINE (no API key)"
                    };
                    ui.label(core);
                });

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("MIT License \u{00b7} Built with Rust & egui")
                        .small()
                        .weak(),
                );
            });
            ui.add_space(6.0);
        });

    if !open {
        state.show_about = false;
    }
}
