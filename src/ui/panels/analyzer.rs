// NetVision - ui/panels/analyzer.rs
//
// Log analyzer view: input pane (paste or load a log file) and the report
// pane rendering the returned Markdown. Analysis runs are queued via
// `state.pending_analysis`; the load-file dialog is the one direct I/O
// action a panel performs, mirroring the file-picker flows elsewhere.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::LOG_INPUT_MAX_CHARS;

/// Render the analyzer view.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let accent = theme::accent(state.amber_palette);

    ui.columns(2, |cols| {
        // ---- Left: input ----
        cols[0].heading("INPUT LOGS");
        cols[0].horizontal(|ui| {
            if ui.button("Load File\u{2026}").clicked() {
                load_log_file(state);
            }

            let run_label = if state.analysis_in_progress {
                "PROCESSING\u{2026}"
            } else {
                "INITIATE ANALYSIS"
            };
            let enabled =
                !state.analysis_in_progress && !state.log_input.trim().is_empty();
            if ui.add_enabled(enabled, egui::Button::new(run_label)).clicked() {
                state.pending_analysis = true;
            }
        });

        let chars = state.log_input.chars().count();
        let over_bound = chars > LOG_INPUT_MAX_CHARS;
        let count_text = format!("{chars} / {LOG_INPUT_MAX_CHARS} chars");
        let count_label = if over_bound {
            egui::RichText::new(format!("{count_text} (input will be truncated)"))
                .color(theme::risk_colour(&crate::core::model::RiskLevel::Medium))
                .small()
        } else {
            egui::RichText::new(count_text).weak().small()
        };
        cols[0].label(count_label);

        egui::ScrollArea::vertical()
            .id_salt("log_input")
            .auto_shrink([false; 2])
            .show(&mut cols[0], |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut state.log_input)
                        .hint_text("PASTE NMAP OUTPUT OR SERVER LOGS HERE...")
                        .code_editor(),
                );
            });

        // ---- Right: report ----
        cols[1].heading("ANALYSIS REPORT");
        match state.analysis {
            Some(ref report) => {
                let meta = if report.truncated {
                    format!(
                        "{} \u{00b7} {} chars submitted (truncated)",
                        report.completed_at.format("%H:%M:%S UTC"),
                        report.input_chars
                    )
                } else {
                    format!(
                        "{} \u{00b7} {} chars submitted",
                        report.completed_at.format("%H:%M:%S UTC"),
                        report.input_chars
                    )
                };
                cols[1].label(egui::RichText::new(meta).weak().small());
                cols[1].separator();

                let markdown = report.markdown.clone();
                egui::ScrollArea::vertical()
                    .id_salt("analysis_report")
                    .auto_shrink([false; 2])
                    .show(&mut cols[1], |ui| {
                        render_markdown(ui, &markdown, accent);
                    });
            }
            None => {
                if state.analysis_in_progress {
                    cols[1].centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.spinner();
                            ui.add_space(8.0);
                            ui.label("DECRYPTING PATTERNS...");
                        });
                    });
                } else {
                    cols[1].centered_and_justified(|ui| {
                        ui.label(egui::RichText::new("NO DATA DETECTED").weak());
                    });
                }
            }
        }
    });
}

/// Pick a log file and load its contents into the input buffer.
fn load_log_file(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Log files", &["log", "txt", "out"])
        .pick_file()
    else {
        return;
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let chars = content.chars().count();
            state.log_input = content;
            state.status_message = format!(
                "Loaded {} ({chars} chars).",
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("log file")
            );
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Cannot read log file");
            state.status_message = format!("Cannot read '{}': {e}", path.display());
        }
    }
}

/// Minimal Markdown rendering: headings and bullets emphasised, fenced code
/// blocks recessed, everything else as monospace body text.
fn render_markdown(ui: &mut egui::Ui, markdown: &str, accent: egui::Color32) {
    let mut in_code_block = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block {
            ui.label(
                egui::RichText::new(line)
                    .monospace()
                    .background_color(egui::Color32::from_rgb(16, 18, 16)),
            );
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("###") {
            ui.label(
                egui::RichText::new(heading.trim_start_matches('#').trim())
                    .strong()
                    .color(accent),
            );
        } else if let Some(heading) = trimmed.strip_prefix('#') {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(heading.trim_start_matches('#').trim())
                    .strong()
                    .size(17.0)
                    .color(accent),
            );
        } else if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("\u{2022}").color(accent));
                ui.label(strip_inline_markup(item));
            });
        } else if trimmed.is_empty() {
            ui.add_space(4.0);
        } else {
            ui.label(strip_inline_markup(line));
        }
    }
}

/// Drop bold/italic markers; the terminal look keeps one weight of text.
fn strip_inline_markup(line: &str) -> String {
    line.replace("**", "").replace("__", "")
}
