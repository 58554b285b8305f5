// NetVision - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the request lifecycle.

use crate::api::client::ApiConfig;
use crate::app::analyzer::AnalyzerManager;
use crate::app::profiler::ProfilerManager;
use crate::app::state::{AppState, View};
use crate::core::model::{AnalysisReport, AnalyzerProgress, ProfilerProgress, ScanSession};
use crate::ui;
use crate::util::constants::CONSOLE_TICK_MS;
use std::time::{Duration, Instant};

/// Simulated console feed lines, rotated while a profiling run is in flight.
/// "{target}" is substituted with the active target.
const SCAN_FEED_LINES: &[&str] = &[
    "Resolving host {target}...",
    "Initiating SYN stealth sweep...",
    "Scanning first 1000 ports...",
    "Discovered open port...",
    "Fingerprinting OS...",
    "Analyzing service versions...",
    "Aggregating results...",
];

/// The NetVision application.
pub struct NetVisionApp {
    pub state: AppState,
    pub profiler: ProfilerManager,
    pub analyzer: AnalyzerManager,

    /// Client configuration built at startup; cloned into each worker.
    api_config: ApiConfig,

    /// Target of the in-flight (or most recent) profiling request.
    active_target: String,

    /// When the last simulated console line was emitted.
    last_console_tick: Option<Instant>,

    /// Rotation cursor into SCAN_FEED_LINES.
    feed_cursor: usize,
}

impl NetVisionApp {
    /// Create a new application instance with the given state and client config.
    pub fn new(state: AppState, api_config: ApiConfig) -> Self {
        Self {
            state,
            profiler: ProfilerManager::new(),
            analyzer: AnalyzerManager::new(),
            api_config,
            active_target: String::new(),
            last_console_tick: None,
            feed_cursor: 0,
        }
    }

    /// Apply profiler completions, discarding messages from superseded requests.
    fn handle_profiler_progress(&mut self) -> bool {
        let messages = self.profiler.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                ProfilerProgress::Completed { generation, report } => {
                    if generation != self.profiler.current_generation() {
                        tracing::debug!(generation, "Stale profiling completion ignored");
                        continue;
                    }
                    let ports = report.ports.len();
                    self.state.session = Some(ScanSession {
                        target: self.active_target.clone(),
                        timestamp: chrono::Utc::now(),
                        report,
                    });
                    self.state.profile_in_progress = false;
                    self.state.apply_filters();
                    self.state
                        .push_console(format!("SCAN COMPLETE. {ports} port(s) profiled."));
                    self.state.status_message =
                        format!("Profile of {} complete: {ports} port(s).", self.active_target);
                }
                ProfilerProgress::Failed { generation, error } => {
                    if generation != self.profiler.current_generation() {
                        tracing::debug!(generation, "Stale profiling failure ignored");
                        continue;
                    }
                    self.state.profile_in_progress = false;
                    self.state
                        .push_console("ERROR: Connection terminated by host.");
                    self.state.status_message = error;
                }
            }
        }
        had_messages
    }

    /// Apply analyzer completions, discarding messages from superseded requests.
    fn handle_analyzer_progress(&mut self) -> bool {
        let messages = self.analyzer.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                AnalyzerProgress::Completed {
                    generation,
                    markdown,
                    input_chars,
                    truncated,
                } => {
                    if generation != self.analyzer.current_generation() {
                        tracing::debug!(generation, "Stale analysis completion ignored");
                        continue;
                    }
                    self.state.analysis = Some(AnalysisReport {
                        markdown,
                        completed_at: chrono::Utc::now(),
                        input_chars,
                        truncated,
                    });
                    self.state.analysis_in_progress = false;
                    self.state.status_message = if truncated {
                        format!("Analysis complete ({input_chars} chars submitted, input truncated).")
                    } else {
                        "Analysis complete.".to_string()
                    };
                }
                AnalyzerProgress::Failed { generation, error } => {
                    if generation != self.analyzer.current_generation() {
                        tracing::debug!(generation, "Stale analysis failure ignored");
                        continue;
                    }
                    self.state.analysis_in_progress = false;
                    self.state.status_message = error;
                }
            }
        }
        had_messages
    }

    /// Emit the next simulated console line if the cadence interval elapsed.
    fn tick_console(&mut self) {
        if !self.state.profile_in_progress {
            self.last_console_tick = None;
            return;
        }
        let now = Instant::now();
        let due = match self.last_console_tick {
            Some(last) => now.duration_since(last) >= Duration::from_millis(CONSOLE_TICK_MS),
            None => true,
        };
        if due {
            let line = SCAN_FEED_LINES[self.feed_cursor % SCAN_FEED_LINES.len()];
            self.feed_cursor += 1;
            self.state
                .push_console(line.replace("{target}", &self.active_target));
            self.last_console_tick = Some(now);
        }
    }

    /// Start a profiling request queued by a panel.
    fn dispatch_pending_profile(&mut self) {
        let Some(target) = self.state.pending_profile.take() else {
            return;
        };
        if !self.state.api_key_present {
            self.state.status_message =
                "NO API KEY DETECTED. Export GEMINI_API_KEY and restart.".to_string();
            return;
        }

        self.state.begin_profile(&target);
        self.state.history.push(&target);
        self.active_target = target.clone();
        self.last_console_tick = Some(Instant::now());
        self.feed_cursor = 0;
        self.profiler.start_profile(target, self.api_config.clone());
        self.state.status_message = format!("Profiling {}...", self.active_target);
    }

    /// Start an analysis request queued by the analyzer panel.
    fn dispatch_pending_analysis(&mut self) {
        if !self.state.pending_analysis {
            return;
        }
        self.state.pending_analysis = false;

        if self.state.log_input.trim().is_empty() {
            return;
        }
        if !self.state.api_key_present {
            self.state.status_message =
                "NO API KEY DETECTED. Export GEMINI_API_KEY and restart.".to_string();
            return;
        }

        self.state.analysis = None;
        self.state.analysis_in_progress = true;
        self.analyzer
            .start_analysis(self.state.log_input.clone(), self.api_config.clone());
        self.state.status_message = "Analyzing input stream...".to_string();
    }

    /// Render the File/Help menu bar and the view tabs.
    fn render_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Log File\u{2026}").clicked() {
                        self.load_log_file_from_menu();
                        ui.close_menu();
                    }
                    ui.separator();

                    let has_session = self.state.session.is_some();
                    ui.add_enabled_ui(has_session, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Report JSON\u{2026}").clicked() {
                                self.export_report_json();
                                ui.close_menu();
                            }
                            if ui.button("Filtered Ports CSV\u{2026}").clicked() {
                                self.export_filtered_csv();
                                ui.close_menu();
                            }
                        });
                    });

                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About / Disclaimer").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });

            // View tabs + simulation badge.
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.active_view, View::Profiler, "PROFILER");
                ui.selectable_value(
                    &mut self.state.active_view,
                    View::Analyzer,
                    "LOG ANALYZER",
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(":: SIMULATION MODE ::")
                            .color(ui::theme::risk_colour(
                                &crate::core::model::RiskLevel::Critical,
                            ))
                            .small(),
                    );
                });
            });
        });
    }

    /// Render the status bar.
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(&self.state.status_message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "v{}",
                                crate::util::constants::APP_VERSION
                            ))
                            .weak()
                            .small(),
                        );
                        let core = if self.state.api_key_present {
                            "AI_CORE: ONLINE"
                        } else {
                            "AI_CORE: OFFLINE"
                        };
                        ui.label(egui::RichText::new(core).weak().small());
                    });
                });
            });
    }

    /// File > Load Log File: read a file into the analyzer input and switch view.
    fn load_log_file_from_menu(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Log files", &["log", "txt", "out"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                self.state.log_input = content;
                self.state.active_view = View::Analyzer;
                self.state.status_message = format!("Loaded '{}'.", path.display());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read log file");
                self.state.status_message = format!("Cannot read '{}': {e}", path.display());
            }
        }
    }

    /// Export the full scan session as JSON.
    fn export_report_json(&mut self) {
        let Some(session) = self.state.session.as_ref() else {
            return;
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("netvision_report.json")
            .save_file()
        else {
            return;
        };
        match std::fs::File::create(&dest) {
            Ok(file) => match crate::core::export::export_json(session, file, &dest) {
                Ok(n) => {
                    self.state.status_message =
                        format!("Exported report with {n} port(s) to JSON.");
                }
                Err(e) => {
                    self.state.status_message = format!("JSON export failed: {e}");
                }
            },
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }

    /// Export the currently filtered port records as CSV.
    fn export_filtered_csv(&mut self) {
        let Some(session) = self.state.session.as_ref() else {
            return;
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("netvision_ports.csv")
            .save_file()
        else {
            return;
        };
        let filtered: Vec<_> = self
            .state
            .filtered_indices
            .iter()
            .filter_map(|&i| session.report.ports.get(i))
            .cloned()
            .collect();
        match std::fs::File::create(&dest) {
            Ok(file) => match crate::core::export::export_csv(&filtered, file, &dest) {
                Ok(n) => {
                    self.state.status_message = format!("Exported {n} port(s) to CSV.");
                }
                Err(e) => {
                    self.state.status_message = format!("CSV export failed: {e}");
                }
            },
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }
}

impl eframe::App for NetVisionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll background workers.
        let had_profiler = self.handle_profiler_progress();
        let had_analyzer = self.handle_analyzer_progress();

        // Advance the simulated console feed.
        self.tick_console();

        // Dispatch requests queued by panels.
        self.dispatch_pending_profile();
        self.dispatch_pending_analysis();

        // Keep repainting while requests are in flight so console ticks and
        // completions appear promptly.
        if had_profiler || had_analyzer {
            ctx.request_repaint();
        }
        if self.state.profile_in_progress || self.state.analysis_in_progress {
            ctx.request_repaint_after(Duration::from_millis(CONSOLE_TICK_MS));
        }

        self.render_menu(ctx);
        self.render_status_bar(ctx);

        match self.state.active_view {
            View::Profiler => {
                egui::SidePanel::left("profiler_sidebar")
                    .exact_width(ui::theme::SIDEBAR_WIDTH)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.add_space(6.0);
                        ui::panels::scanner::render_controls(ui, &mut self.state);
                        ui::panels::scanner::render_history(ui, &mut self.state);
                        ui.add_space(6.0);
                        ui.separator();
                        ui::panels::filters::render(ui, &mut self.state);
                        ui.add_space(6.0);
                        ui.separator();
                        ui.label(egui::RichText::new("CONSOLE").small());
                        ui::panels::scanner::render_console(ui, &self.state);
                    });
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::results::render(ui, &mut self.state);
                });
            }
            View::Analyzer => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::panels::analyzer::render(ui, &mut self.state);
                });
            }
        }

        ui::panels::about::render(ctx, &mut self.state);
    }
}
