// NetVision - tests/e2e_request_shaping.rs
//
// End-to-end tests for request shaping and response handling.
//
// These tests exercise the real prompt builder, real truncation, real
// serde parsing of a fixture response body on disk, and real CSV/JSON
// export to the filesystem — no mocks, no stubs. The only thing not
// exercised is the network call itself, which carries no logic beyond
// the reqwest invocation.

use netvision::api::client::parse_scan_report;
use netvision::api::prompt::{analysis_prompt, profile_prompt, truncate_log_input};
use netvision::core::export::{export_csv, export_json};
use netvision::core::filter::{apply_filters, FilterState};
use netvision::core::history::TargetHistory;
use netvision::core::model::{PortState, Protocol, RiskLevel, ScanReport, ScanSession};
use netvision::util::constants::{HISTORY_CAP, LOG_INPUT_MAX_CHARS};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parse the canned scan response fixture.
fn fixture_report() -> ScanReport {
    let body = fs::read_to_string(fixture("scan_response.json")).unwrap();
    parse_scan_report(&body).expect("fixture body must parse")
}

// =============================================================================
// Prompt shaping E2E
// =============================================================================

/// The profiling prompt must carry the literal target string, including
/// targets with ports, spaces, and non-ASCII characters.
#[test]
fn e2e_profile_prompt_includes_literal_target() {
    for target in [
        "example.com",
        "10.0.0.1:8443",
        "PostgreSQL Database",
        "münchen.example",
    ] {
        let prompt = profile_prompt(target);
        assert!(
            prompt.contains(&format!("\"{target}\"")),
            "prompt missing literal target {target:?}"
        );
    }
}

/// Truncation feeds at most LOG_INPUT_MAX_CHARS characters into the prompt.
#[test]
fn e2e_analysis_prompt_respects_truncation_bound() {
    let oversized = "GET /index.html 200\n".repeat(2_000); // ~40k chars
    let (submitted, truncated) = truncate_log_input(&oversized);
    assert!(truncated);
    assert_eq!(submitted.chars().count(), LOG_INPUT_MAX_CHARS);

    let prompt = analysis_prompt(submitted);
    assert!(prompt.contains(submitted));
    // The discarded tail must not leak into the prompt.
    assert!(prompt.len() < oversized.len());
}

/// Input exactly at the bound passes through untouched.
#[test]
fn e2e_analysis_input_at_bound_not_truncated() {
    let input = "a".repeat(LOG_INPUT_MAX_CHARS);
    let (submitted, truncated) = truncate_log_input(&input);
    assert!(!truncated);
    assert_eq!(submitted, input.as_str());
}

// =============================================================================
// Response parsing E2E
// =============================================================================

/// The fixture body (shaped like a real structured-output reply) must parse
/// into a complete report with correct enum mapping.
#[test]
fn e2e_fixture_response_parses() {
    let report = fixture_report();
    assert_eq!(report.target, "shop.example.com");
    assert_eq!(report.ports.len(), 4);

    let https = report.ports.iter().find(|p| p.port == 443).unwrap();
    assert_eq!(https.protocol, Protocol::Tcp);
    assert_eq!(https.state, PortState::Open);
    assert_eq!(https.risk_level, RiskLevel::Low);
    assert_eq!(https.vulnerabilities.len(), 2);

    // Port record without a vulnerabilities field defaults to empty.
    let ssh = report.ports.iter().find(|p| p.port == 22).unwrap();
    assert!(ssh.vulnerabilities.is_empty());
}

/// A truncated body (e.g. connection cut mid-reply) must fail the parse
/// attempt rather than yield a partial report.
#[test]
fn e2e_truncated_body_fails_parse() {
    let body = fs::read_to_string(fixture("scan_response.json")).unwrap();
    let cut = &body[..body.len() / 2];
    assert!(parse_scan_report(cut).is_err());
}

// =============================================================================
// History E2E
// =============================================================================

/// History keeps the five most recent distinct targets with duplicates
/// moved to the front.
#[test]
fn e2e_history_retention_semantics() {
    let mut history = TargetHistory::new();
    for target in [
        "alpha.example",
        "beta.example",
        "gamma.example",
        "delta.example",
        "epsilon.example",
        "zeta.example",  // pushes alpha out
        "gamma.example", // duplicate, moves to front
    ] {
        history.push(target);
    }

    let targets: Vec<_> = history.iter().collect();
    assert_eq!(targets.len(), HISTORY_CAP);
    assert_eq!(
        targets,
        vec![
            "gamma.example",
            "zeta.example",
            "epsilon.example",
            "delta.example",
            "beta.example",
        ]
    );
}

// =============================================================================
// Filtering E2E
// =============================================================================

/// Risk-level and text predicates are AND-combined over parsed records.
#[test]
fn e2e_filter_risk_and_text_combined() {
    let report = fixture_report();

    let mut filter = FilterState::default();
    filter.risk_levels.insert(RiskLevel::Medium);
    filter.text_search = "firewalled".to_string();

    let indices = apply_filters(&report.ports, &filter);
    assert_eq!(indices.len(), 1);
    assert_eq!(report.ports[indices[0]].port, 22);
}

/// The high-risk quick filter selects only High and Critical records.
#[test]
fn e2e_high_risk_quick_filter() {
    let report = fixture_report();
    let indices = apply_filters(&report.ports, &FilterState::high_risk_only());
    assert_eq!(indices.len(), 1);
    assert_eq!(report.ports[indices[0]].port, 3306);
}

/// Regex search composes with the risk filter.
#[test]
fn e2e_regex_composes_with_risk_filter() {
    let report = fixture_report();

    let mut filter = FilterState::default();
    filter.risk_levels.insert(RiskLevel::Low);
    filter.risk_levels.insert(RiskLevel::Medium);
    filter.set_regex(r"CVE-\d{4}-\d+").unwrap();

    let indices = apply_filters(&report.ports, &filter);
    assert_eq!(indices.len(), 1);
    assert_eq!(report.ports[indices[0]].port, 443);
}

// =============================================================================
// Export E2E
// =============================================================================

/// CSV export writes one row per filtered record to a real file.
#[test]
fn e2e_csv_export_of_filtered_records() {
    let report = fixture_report();
    let indices = apply_filters(&report.ports, &FilterState::open_only());
    let filtered: Vec<_> = indices.iter().map(|&i| report.ports[i].clone()).collect();
    assert_eq!(filtered.len(), 2);

    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("ports.csv");
    let file = fs::File::create(&dest).unwrap();
    let count = export_csv(&filtered, file, &dest).unwrap();
    assert_eq!(count, 2);

    let content = fs::read_to_string(&dest).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("port,protocol"));
    assert_eq!(lines.count(), 2);
    assert!(content.contains("https"));
    assert!(!content.contains("mysql"), "closed port must be filtered out");
}

/// JSON export round-trips the full session through serde.
#[test]
fn e2e_json_export_round_trip() {
    let report = fixture_report();
    let session = ScanSession {
        target: "shop.example.com".to_string(),
        timestamp: chrono::Utc::now(),
        report,
    };

    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("report.json");
    let file = fs::File::create(&dest).unwrap();
    let count = export_json(&session, file, &dest).unwrap();
    assert_eq!(count, 4);

    // The exported report parses back with identical port records.
    let content = fs::read_to_string(&dest).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let reparsed = parse_scan_report(&value["report"].to_string()).unwrap();
    assert_eq!(reparsed.ports, session.report.ports);
}
