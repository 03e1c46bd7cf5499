use crate::core::{NormalizeError, ResultParser, StructuredResult};
use crate::parsers::{parse_json_object, require_array};
use tracing::debug;

/// Parses npm audit output that has been wrapped in a SARIF envelope.
///
/// The expected shape is a SARIF log: a JSON object with a `version` string
/// and a `runs` array, each run carrying its tool metadata and results.
pub struct NpmAuditParser;

impl NpmAuditParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmAuditParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultParser for NpmAuditParser {
    fn id(&self) -> &'static str {
        "npm-audit"
    }

    fn description(&self) -> &'static str {
        "Dependency vulnerability results from npm audit, SARIF-wrapped"
    }

    fn parse(&self, raw: &str) -> Result<StructuredResult, NormalizeError> {
        let map = parse_json_object("npm-audit", raw)?;
        require_array("npm-audit", &map, "runs")?;

        match map.get("version") {
            Some(v) if v.is_string() => {}
            Some(_) => {
                return Err(NormalizeError::WrongFieldType {
                    scanner: "npm-audit".to_string(),
                    field: "version",
                })
            }
            None => {
                return Err(NormalizeError::MissingField {
                    scanner: "npm-audit".to_string(),
                    field: "version",
                })
            }
        }

        if let Some(runs) = map.get("runs").and_then(|v| v.as_array()) {
            debug!(count = runs.len(), "parsed npm-audit SARIF runs");
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": "2.1.0",
        "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
        "runs": [
            {
                "tool": {"driver": {"name": "npm-audit", "rules": []}},
                "results": [
                    {
                        "ruleId": "GHSA-p8p7-x288-28g6",
                        "level": "error",
                        "message": {"text": "SSRF in request"},
                        "locations": [
                            {"physicalLocation": {"artifactLocation": {"uri": "package-lock.json"}}}
                        ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_sarif_log() {
        let structured = NpmAuditParser::new().parse(SAMPLE).unwrap();
        let runs = structured.get("runs").unwrap().as_array().unwrap();
        assert_eq!(runs.len(), 1);
    }

    #[test]
    fn test_rejects_missing_version() {
        let err = NpmAuditParser::new().parse(r#"{"runs": []}"#).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::MissingField { field: "version", .. }
        ));
    }

    #[test]
    fn test_rejects_non_string_version() {
        let err = NpmAuditParser::new()
            .parse(r#"{"version": 2, "runs": []}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::WrongFieldType { field: "version", .. }
        ));
    }

    #[test]
    fn test_rejects_top_level_array() {
        let err = NpmAuditParser::new().parse("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, NormalizeError::NotAnObject { .. }));
    }
}
