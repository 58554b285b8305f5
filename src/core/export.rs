// NetVision - core/export.rs
//
// CSV export of filtered port records and JSON export of a full scan report.
// Core layer: writes to any Write trait object.

use crate::core::model::{PortProfile, ScanSession};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export port records to CSV format.
///
/// Writes: port, protocol, service, state, risk_level, description, vulnerabilities
/// (vulnerabilities joined as "ID: description" pairs separated by "; ").
pub fn export_csv<W: Write>(
    ports: &[PortProfile],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "port",
            "protocol",
            "service",
            "state",
            "risk_level",
            "description",
            "vulnerabilities",
        ])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for port in ports {
        let vulns = port
            .vulnerabilities
            .iter()
            .map(|v| format!("{}: {}", v.id, v.description))
            .collect::<Vec<_>>()
            .join("; ");

        csv_writer
            .write_record([
                &port.port.to_string(),
                port.protocol.label(),
                &port.service,
                port.state.label(),
                port.risk_level.label(),
                &port.description,
                &vulns,
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export a complete scan session (target, timestamp, report) as pretty JSON.
pub fn export_json<W: Write>(
    session: &ScanSession,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, session).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(session.report.ports.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{PortState, Protocol, RiskLevel, ScanReport, Vulnerability};
    use std::path::PathBuf;

    fn make_port(port: u16, service: &str) -> PortProfile {
        PortProfile {
            port,
            protocol: Protocol::Tcp,
            service: service.to_string(),
            state: PortState::Open,
            risk_level: RiskLevel::Medium,
            description: format!("{service} endpoint"),
            vulnerabilities: vec![Vulnerability {
                id: "WEAK-AUTH".to_string(),
                description: "Default credentials".to_string(),
                severity: RiskLevel::High,
            }],
        }
    }

    #[test]
    fn test_csv_export() {
        let ports = vec![make_port(80, "http"), make_port(443, "https")];
        let mut buf = Vec::new();
        let count = export_csv(&ports, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("port,protocol,service"));
        assert!(output.contains("http"));
        assert!(output.contains("WEAK-AUTH: Default credentials"));
    }

    #[test]
    fn test_json_export() {
        let session = ScanSession {
            target: "example.com".to_string(),
            timestamp: chrono::Utc::now(),
            report: ScanReport {
                target: "example.com".to_string(),
                summary: "Standard web stack".to_string(),
                ports: vec![make_port(443, "https")],
            },
        };
        let mut buf = Vec::new();
        let count = export_json(&session, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("example.com"));
        assert!(output.contains("Standard web stack"));
        // Wire field name is preserved on export so reports round-trip.
        assert!(output.contains("riskLevel"));
    }
}
