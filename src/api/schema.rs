// NetVision - api/schema.rs
//
// The declared JSON output shape sent with profiling requests.
//
// The endpoint constrains the model's output to this schema when
// `responseMimeType` is "application/json", so the reply deserialises
// directly into `core::model::ScanReport`. Field names and enum values here
// must stay in lockstep with the serde attributes on the model types.

use serde_json::{json, Value};

/// Response schema for a profiling request.
pub fn scan_result_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "target": { "type": "STRING" },
            "summary": {
                "type": "STRING",
                "description": "A brief executive summary of the target's likely security posture."
            },
            "ports": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "port": { "type": "INTEGER" },
                        "protocol": { "type": "STRING", "enum": ["TCP", "UDP"] },
                        "service": { "type": "STRING" },
                        "state": { "type": "STRING", "enum": ["Open", "Filtered", "Closed"] },
                        "riskLevel": {
                            "type": "STRING",
                            "enum": ["Low", "Medium", "High", "Critical"]
                        },
                        "description": { "type": "STRING" },
                        "vulnerabilities": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "id": {
                                        "type": "STRING",
                                        "description": "CVE ID (e.g. CVE-2023-1234) or generic issue name"
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "Short description of the vulnerability"
                                    },
                                    "severity": {
                                        "type": "STRING",
                                        "enum": ["Low", "Medium", "High", "Critical"]
                                    }
                                },
                                "required": ["id", "description", "severity"]
                            },
                            "description": "List of potential vulnerabilities associated with this service/port."
                        }
                    },
                    "required": ["port", "protocol", "service", "state", "riskLevel", "description"]
                }
            }
        },
        "required": ["target", "summary", "ports"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_required_top_level_fields() {
        let schema = scan_result_schema();
        let required = schema["required"].as_array().unwrap();
        for field in ["target", "summary", "ports"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
    }

    #[test]
    fn test_port_item_enums_match_model_variants() {
        let schema = scan_result_schema();
        let props = &schema["properties"]["ports"]["items"]["properties"];
        assert_eq!(props["protocol"]["enum"], json!(["TCP", "UDP"]));
        assert_eq!(props["state"]["enum"], json!(["Open", "Filtered", "Closed"]));
        assert_eq!(
            props["riskLevel"]["enum"],
            json!(["Low", "Medium", "High", "Critical"])
        );
    }

    #[test]
    fn test_vulnerabilities_are_not_required() {
        let schema = scan_result_schema();
        let required = schema["properties"]["ports"]["items"]["required"]
            .as_array()
            .unwrap();
        assert!(!required.iter().any(|v| v == "vulnerabilities"));
    }
}
