// NetVision - core/filter.rs
//
// Composable filter engine for port records.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{PortProfile, PortState, RiskLevel};
use crate::util::constants::MAX_REGEX_PATTERN_LENGTH;
use crate::util::error::FilterError;
use regex::Regex;
use std::collections::HashSet;

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Risk levels to include (empty = all).
    pub risk_levels: HashSet<RiskLevel>,

    /// Port states to include (empty = all).
    pub states: HashSet<PortState>,

    /// Substring text search (case-insensitive). Empty = no filter.
    /// Matches service name, description, and vulnerability id/description.
    pub text_search: String,

    /// Compiled regex search. None = no regex filter.
    pub regex_search: Option<Regex>,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.risk_levels.is_empty()
            && self.states.is_empty()
            && self.text_search.is_empty()
            && self.regex_search.is_none()
    }

    /// Set the regex search pattern, compiling it.
    /// Returns an error if the pattern is invalid or too long.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.regex_search = None;
            return Ok(());
        }
        if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
            return Err(FilterError::RegexTooLong {
                length: pattern.len(),
                max_length: MAX_REGEX_PATTERN_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.regex_search = Some(regex);
        Ok(())
    }

    /// Create a quick-filter for high-risk ports only.
    pub fn high_risk_only() -> Self {
        let mut levels = HashSet::new();
        levels.insert(RiskLevel::Critical);
        levels.insert(RiskLevel::High);
        Self {
            risk_levels: levels,
            ..Default::default()
        }
    }

    /// Create a quick-filter for open ports only.
    pub fn open_only() -> Self {
        let mut states = HashSet::new();
        states.insert(PortState::Open);
        Self {
            states,
            ..Default::default()
        }
    }
}

/// Apply filters to a slice of port records, returning indices of matches.
///
/// Returns a Vec of indices into the original slice. This avoids copying
/// records and keeps the unfiltered report intact for export.
pub fn apply_filters(ports: &[PortProfile], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..ports.len()).collect();
    }

    let text_lower = filter.text_search.to_lowercase();

    ports
        .iter()
        .enumerate()
        .filter(|(_, port)| matches_all(port, filter, &text_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single port record matches all active filters.
fn matches_all(port: &PortProfile, filter: &FilterState, text_lower: &str) -> bool {
    // Risk level filter
    if !filter.risk_levels.is_empty() && !filter.risk_levels.contains(&port.risk_level) {
        return false;
    }

    // Port state filter
    if !filter.states.is_empty() && !filter.states.contains(&port.state) {
        return false;
    }

    // Text search (case-insensitive substring over all display text)
    if !text_lower.is_empty() && !haystack(port).to_lowercase().contains(text_lower) {
        return false;
    }

    // Regex search
    if let Some(ref regex) = filter.regex_search {
        if !regex.is_match(&haystack(port)) {
            return false;
        }
    }

    true
}

/// Concatenated searchable text of a port record.
fn haystack(port: &PortProfile) -> String {
    let mut text = format!("{} {} {}", port.port, port.service, port.description);
    for vuln in &port.vulnerabilities {
        text.push(' ');
        text.push_str(&vuln.id);
        text.push(' ');
        text.push_str(&vuln.description);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Protocol, Vulnerability};

    fn make_port(port: u16, service: &str, state: PortState, risk: RiskLevel) -> PortProfile {
        PortProfile {
            port,
            protocol: Protocol::Tcp,
            service: service.to_string(),
            state,
            risk_level: risk,
            description: format!("{service} service on port {port}"),
            vulnerabilities: Vec::new(),
        }
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let ports = vec![
            make_port(80, "http", PortState::Open, RiskLevel::Medium),
            make_port(443, "https", PortState::Open, RiskLevel::Low),
        ];
        let result = apply_filters(&ports, &FilterState::default());
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_risk_level_filter() {
        let ports = vec![
            make_port(22, "ssh", PortState::Open, RiskLevel::High),
            make_port(80, "http", PortState::Open, RiskLevel::Medium),
            make_port(3389, "rdp", PortState::Filtered, RiskLevel::Critical),
        ];
        let result = apply_filters(&ports, &FilterState::high_risk_only());
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_state_filter() {
        let ports = vec![
            make_port(22, "ssh", PortState::Open, RiskLevel::High),
            make_port(25, "smtp", PortState::Closed, RiskLevel::Low),
            make_port(161, "snmp", PortState::Filtered, RiskLevel::Medium),
        ];
        let result = apply_filters(&ports, &FilterState::open_only());
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let ports = vec![
            make_port(5432, "PostgreSQL", PortState::Open, RiskLevel::Medium),
            make_port(80, "http", PortState::Open, RiskLevel::Low),
        ];
        let filter = FilterState {
            text_search: "postgres".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&ports, &filter);
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_text_search_matches_vulnerability_text() {
        let mut port = make_port(8080, "http-alt", PortState::Open, RiskLevel::High);
        port.vulnerabilities.push(Vulnerability {
            id: "CVE-2021-44228".to_string(),
            description: "Log4Shell RCE".to_string(),
            severity: RiskLevel::Critical,
        });
        let ports = vec![
            port,
            make_port(22, "ssh", PortState::Open, RiskLevel::Medium),
        ];
        let filter = FilterState {
            text_search: "log4shell".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&ports, &filter);
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_combined_risk_and_text() {
        let ports = vec![
            make_port(22, "ssh", PortState::Open, RiskLevel::High),
            make_port(2222, "ssh-alt", PortState::Open, RiskLevel::Low),
            make_port(80, "http", PortState::Open, RiskLevel::High),
        ];
        let filter = FilterState {
            risk_levels: {
                let mut s = HashSet::new();
                s.insert(RiskLevel::High);
                s
            },
            text_search: "ssh".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&ports, &filter);
        assert_eq!(result, vec![0]); // High + contains "ssh"
    }

    #[test]
    fn test_regex_filter() {
        let ports = vec![
            make_port(443, "https", PortState::Open, RiskLevel::Low),
            make_port(8443, "https-alt", PortState::Open, RiskLevel::Medium),
            make_port(22, "ssh", PortState::Open, RiskLevel::High),
        ];
        let mut filter = FilterState::default();
        filter.set_regex(r"^8?443\b").unwrap();
        let result = apply_filters(&ports, &filter);
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_invalid_regex() {
        let mut filter = FilterState::default();
        let result = filter.set_regex("[invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_regex_rejected() {
        let mut filter = FilterState::default();
        let pattern = "a".repeat(MAX_REGEX_PATTERN_LENGTH + 1);
        assert!(matches!(
            filter.set_regex(&pattern),
            Err(FilterError::RegexTooLong { .. })
        ));
    }
}
