// NetVision - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers. The wire-facing
// structs (`ScanReport`, `PortProfile`, `Vulnerability`) deserialise directly
// from the model's JSON output, so their serde attributes mirror the field
// names declared in the response schema (api::schema).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Risk level
// =============================================================================

/// Qualitative risk labels attached to simulated findings, ordered from most
/// to least severe. Not derived from measurement; the model assigns them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    #[default]
    Low,
}

impl RiskLevel {
    /// Returns all variants in display order (most severe first).
    pub fn all() -> &'static [RiskLevel] {
        &[
            RiskLevel::Critical,
            RiskLevel::High,
            RiskLevel::Medium,
            RiskLevel::Low,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Critical",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }

    /// Short label for compact display (e.g. port cards).
    pub fn short_label(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "CRIT",
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MED",
            RiskLevel::Low => "LOW",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Port state
// =============================================================================

/// Reported state of a simulated port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PortState {
    Open,
    Closed,
    #[default]
    Filtered,
}

impl PortState {
    pub fn label(&self) -> &'static str {
        match self {
            PortState::Open => "Open",
            PortState::Closed => "Closed",
            PortState::Filtered => "Filtered",
        }
    }
}

impl std::fmt::Display for PortState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Transport protocol
// =============================================================================

/// Transport protocol label on a port record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Protocol {
    #[serde(rename = "TCP")]
    #[default]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
}

impl Protocol {
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Vulnerability
// =============================================================================

/// A potential vulnerability attached to a port record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// CVE ID (e.g. "CVE-2021-44228") or a generic issue label ("WEAK-AUTH").
    pub id: String,

    /// Short free-text description of the vulnerability.
    pub description: String,

    /// Severity assigned by the model.
    pub severity: RiskLevel,
}

// =============================================================================
// Port profile
// =============================================================================

/// One simulated port record as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortProfile {
    /// Port number.
    pub port: u16,

    /// Transport protocol label.
    pub protocol: Protocol,

    /// Service name (e.g. "https", "ssh").
    pub service: String,

    /// Reported port state.
    pub state: PortState,

    /// Risk level assigned to this port.
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,

    /// Free-text description of the service and its exposure.
    pub description: String,

    /// Potential vulnerabilities. Optional on the wire; absent means none.
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

// =============================================================================
// Scan report / session
// =============================================================================

/// Parsed body of one profiling response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Target string echoed back by the model.
    pub target: String,

    /// Executive summary of the target's likely security posture.
    pub summary: String,

    /// Simulated port records.
    pub ports: Vec<PortProfile>,
}

/// A completed profiling run, held only in transient UI state.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSession {
    /// Target string the user submitted (may differ from the echoed target).
    pub target: String,

    /// Local completion timestamp.
    pub timestamp: DateTime<Utc>,

    /// The parsed report.
    pub report: ScanReport,
}

// =============================================================================
// Analysis report
// =============================================================================

/// Result of one log-analysis call: free-form Markdown from the model.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The Markdown report text.
    pub markdown: String,

    /// When the analysis completed.
    pub completed_at: DateTime<Utc>,

    /// Characters of input actually submitted (after truncation).
    pub input_chars: usize,

    /// Whether the pasted input exceeded the truncation bound.
    pub truncated: bool,
}

// =============================================================================
// Worker progress (for UI updates)
// =============================================================================

/// Completion messages sent from a profiling worker thread to the UI thread.
///
/// Every message carries the generation of the request that produced it so
/// the UI can discard completions from superseded requests (last request wins).
#[derive(Debug, Clone)]
pub enum ProfilerProgress {
    /// The request completed and the body parsed.
    Completed { generation: u64, report: ScanReport },

    /// The request failed; `error` is a user-displayable message.
    Failed { generation: u64, error: String },
}

/// Completion messages sent from a log-analysis worker thread.
///
/// `Completed` carries the truncation facts so the UI can report how much of
/// the pasted input was actually submitted.
#[derive(Debug, Clone)]
pub enum AnalyzerProgress {
    Completed {
        generation: u64,
        markdown: String,
        input_chars: usize,
        truncated: bool,
    },
    Failed {
        generation: u64,
        error: String,
    },
}
