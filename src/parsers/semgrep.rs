use crate::core::{NormalizeError, ResultParser, StructuredResult};
use crate::parsers::{parse_json_object, require_array};
use tracing::{debug, warn};

/// Parses `semgrep --json` reports.
///
/// A semgrep report is a JSON object with `results` and `errors` arrays plus
/// a `paths` summary. Scan-level errors are surfaced as a warning but do not
/// fail the parse; semgrep reports partial scans this way.
pub struct SemgrepParser;

impl SemgrepParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemgrepParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultParser for SemgrepParser {
    fn id(&self) -> &'static str {
        "semgrep"
    }

    fn description(&self) -> &'static str {
        "Multi-language static analysis results produced by Semgrep"
    }

    fn parse(&self, raw: &str) -> Result<StructuredResult, NormalizeError> {
        let map = parse_json_object("semgrep", raw)?;
        require_array("semgrep", &map, "results")?;

        if let Some(errors) = map.get("errors").and_then(|v| v.as_array()) {
            if !errors.is_empty() {
                warn!(count = errors.len(), "semgrep reported scan errors");
            }
        }
        if let Some(results) = map.get("results").and_then(|v| v.as_array()) {
            debug!(count = results.len(), "parsed semgrep results");
        }

        Ok(map)
    }
}
