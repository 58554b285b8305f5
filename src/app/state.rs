// NetVision - app/state.rs
//
// Application state management. Holds the current view, inputs, the latest
// scan session and analysis report, filter state, history, and the console
// feed. Owned by the eframe::App implementation.
//
// All results are transient: nothing here survives an application restart.

use crate::core::filter::FilterState;
use crate::core::history::TargetHistory;
use crate::core::model::{AnalysisReport, ScanSession};
use crate::util::constants::MAX_CONSOLE_LINES;
use chrono::{DateTime, Utc};

/// Which feature view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Profiler,
    Analyzer,
}

/// One line of the simulated terminal feed.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub when: DateTime<Utc>,
    pub text: String,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Active feature view.
    pub active_view: View,

    // ---- Profiler view ----
    /// Target string currently in the input box.
    pub target_input: String,

    /// Whether a profiling request is in flight.
    pub profile_in_progress: bool,

    /// The most recent completed scan session (None before the first run).
    pub session: Option<ScanSession>,

    /// Indices of port records matching the current filter (into
    /// `session.report.ports`).
    pub filtered_indices: Vec<usize>,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Raw regex pattern text in the filter input (compiled on change).
    pub regex_input: String,

    /// Error message from the last regex compile attempt, if any.
    pub regex_error: Option<String>,

    /// Simulated terminal feed shown during and after a profiling run.
    pub console_lines: Vec<ConsoleLine>,

    /// Recent distinct targets, most recent first.
    pub history: TargetHistory,

    /// Target queued by a panel for profiling (picked up by the gui loop).
    pub pending_profile: Option<String>,

    // ---- Analyzer view ----
    /// Pasted or loaded log text.
    pub log_input: String,

    /// Whether an analysis request is in flight.
    pub analysis_in_progress: bool,

    /// The most recent completed analysis (None before the first run).
    pub analysis: Option<AnalysisReport>,

    /// Set by the analyzer panel to request an analysis run.
    pub pending_analysis: bool,

    // ---- Shared ----
    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the about/disclaimer dialog.
    pub show_about: bool,

    /// Whether an API key was found at startup.
    pub api_key_present: bool,

    /// Amber phosphor palette (false = classic green).
    pub amber_palette: bool,

    /// Body font size in points.
    pub font_size: f32,
}

impl AppState {
    /// Create initial state. Display options come from the validated config;
    /// they are passed as plain values so this layer stays platform-free.
    pub fn new(amber_palette: bool, font_size: f32, api_key_present: bool) -> Self {
        let status_message = if api_key_present {
            "SYSTEM STANDBY. Awaiting target input.".to_string()
        } else {
            "NO API KEY DETECTED. Export GEMINI_API_KEY and restart.".to_string()
        };

        Self {
            active_view: View::default(),
            target_input: String::new(),
            profile_in_progress: false,
            session: None,
            filtered_indices: Vec::new(),
            filter_state: FilterState::default(),
            regex_input: String::new(),
            regex_error: None,
            console_lines: Vec::new(),
            history: TargetHistory::new(),
            pending_profile: None,
            log_input: String::new(),
            analysis_in_progress: false,
            analysis: None,
            pending_analysis: false,
            status_message,
            show_about: false,
            api_key_present,
            amber_palette,
            font_size,
        }
    }

    /// Recompute filtered indices from the current session and filter state.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = match self.session {
            Some(ref session) => {
                crate::core::filter::apply_filters(&session.report.ports, &self.filter_state)
            }
            None => Vec::new(),
        };
    }

    /// Append a line to the console feed, dropping the oldest past the cap.
    pub fn push_console(&mut self, text: impl Into<String>) {
        self.console_lines.push(ConsoleLine {
            when: Utc::now(),
            text: text.into(),
        });
        if self.console_lines.len() > MAX_CONSOLE_LINES {
            let excess = self.console_lines.len() - MAX_CONSOLE_LINES;
            self.console_lines.drain(..excess);
        }
    }

    /// Reset profiler result state ahead of a new run. The console feed is
    /// restarted; history and inputs are preserved.
    pub fn begin_profile(&mut self, target: &str) {
        self.session = None;
        self.filtered_indices.clear();
        self.console_lines.clear();
        self.push_console(format!("> TARGET ACQUIRED: {target}"));
        self.profile_in_progress = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PortProfile, PortState, Protocol, RiskLevel, ScanReport};

    fn state() -> AppState {
        AppState::new(false, 14.0, true)
    }

    fn session_with_ports(ports: Vec<PortProfile>) -> ScanSession {
        ScanSession {
            target: "example.com".to_string(),
            timestamp: Utc::now(),
            report: ScanReport {
                target: "example.com".to_string(),
                summary: "summary".to_string(),
                ports,
            },
        }
    }

    fn port(port: u16, risk: RiskLevel) -> PortProfile {
        PortProfile {
            port,
            protocol: Protocol::Tcp,
            service: "svc".to_string(),
            state: PortState::Open,
            risk_level: risk,
            description: String::new(),
            vulnerabilities: Vec::new(),
        }
    }

    #[test]
    fn test_apply_filters_without_session_is_empty() {
        let mut s = state();
        s.apply_filters();
        assert!(s.filtered_indices.is_empty());
    }

    #[test]
    fn test_apply_filters_tracks_session() {
        let mut s = state();
        s.session = Some(session_with_ports(vec![
            port(80, RiskLevel::Low),
            port(22, RiskLevel::Critical),
        ]));
        s.filter_state = FilterState::high_risk_only();
        s.apply_filters();
        assert_eq!(s.filtered_indices, vec![1]);
    }

    #[test]
    fn test_console_feed_is_bounded() {
        let mut s = state();
        for i in 0..(MAX_CONSOLE_LINES + 25) {
            s.push_console(format!("line {i}"));
        }
        assert_eq!(s.console_lines.len(), MAX_CONSOLE_LINES);
        // Oldest lines were dropped, newest retained.
        assert_eq!(
            s.console_lines.last().map(|l| l.text.as_str()),
            Some(format!("line {}", MAX_CONSOLE_LINES + 24).as_str())
        );
    }

    #[test]
    fn test_begin_profile_resets_results_keeps_history() {
        let mut s = state();
        s.history.push("old.example");
        s.session = Some(session_with_ports(vec![port(80, RiskLevel::Low)]));
        s.apply_filters();

        s.begin_profile("new.example");
        assert!(s.session.is_none());
        assert!(s.filtered_indices.is_empty());
        assert!(s.profile_in_progress);
        assert_eq!(s.history.len(), 1);
        assert!(s.console_lines[0].text.contains("new.example"));
    }
}
