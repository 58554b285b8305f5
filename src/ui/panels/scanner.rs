// NetVision - ui/panels/scanner.rs
//
// Profiler sidebar: target input, recent-target history, and the simulated
// console feed. Requests are queued via `state.pending_profile` and picked
// up by the gui loop; this panel never performs I/O itself.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::MAX_TARGET_LENGTH;

/// Render the target input and run control.
pub fn render_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(egui::RichText::new("TARGET DESIGNATION").small());
    ui.add_space(2.0);

    let mut submitted = false;
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.target_input)
                .hint_text("IP / DOMAIN / SERVICE")
                .desired_width(ui.available_width() - 70.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }

        let run_label = if state.profile_in_progress {
            "WAIT"
        } else {
            "RUN"
        };
        let run = ui.add_enabled(
            !state.profile_in_progress,
            egui::Button::new(run_label),
        );
        if run.clicked() {
            submitted = true;
        }
    });

    if submitted {
        let target = state.target_input.trim().to_string();
        if target.is_empty() {
            state.status_message = "No target designated.".to_string();
        } else if target.chars().count() > MAX_TARGET_LENGTH {
            state.status_message = format!(
                "Target exceeds {MAX_TARGET_LENGTH} characters; refusing to profile."
            );
        } else {
            state.pending_profile = Some(target);
        }
    }
}

/// Render the recent-target history list. Clicking an entry re-runs it.
pub fn render_history(ui: &mut egui::Ui, state: &mut AppState) {
    if state.history.is_empty() {
        return;
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new("RECENT TARGETS").small());

    // Collect first: clicking mutates state while iterating history.
    let targets: Vec<String> = state.history.iter().map(str::to_string).collect();
    for target in targets {
        let clicked = ui
            .add(egui::Button::new(&target).frame(false).small())
            .on_hover_text("Profile this target again")
            .clicked();
        if clicked && !state.profile_in_progress {
            state.target_input = target.clone();
            state.pending_profile = Some(target);
        }
    }
}

/// Render the console feed.
pub fn render_console(ui: &mut egui::Ui, state: &AppState) {
    let accent = theme::accent(state.amber_palette);

    egui::Frame::new()
        .fill(theme::TERMINAL_BLACK)
        .stroke(egui::Stroke::new(1.0, theme::accent_dim(state.amber_palette)))
        .inner_margin(8)
        .show(ui, |ui| {
            ui.set_min_height(theme::CONSOLE_MIN_HEIGHT);
            egui::ScrollArea::vertical()
                .id_salt("console_feed")
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &state.console_lines {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                egui::RichText::new(
                                    line.when.format("%H:%M:%S").to_string(),
                                )
                                .color(accent.gamma_multiply(0.4))
                                .small(),
                            );
                            ui.label(
                                egui::RichText::new(&line.text)
                                    .color(accent.gamma_multiply(0.8)),
                            );
                        });
                    }
                    if state.profile_in_progress {
                        ui.label(egui::RichText::new("_").color(accent));
                    }
                });
        });
}
