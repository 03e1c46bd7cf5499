use crate::core::{NormalizeError, ResultParser, StructuredResult};
use crate::parsers::{parse_json_object, require_array};
use tracing::debug;

/// Parses `bandit -f json` reports.
///
/// A bandit report is a JSON object with `results` (the findings), `errors`,
/// and `metrics` keys. Only `results` is required here; old bandit versions
/// omit `metrics` for empty scans.
pub struct BanditParser;

impl BanditParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BanditParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultParser for BanditParser {
    fn id(&self) -> &'static str {
        "bandit"
    }

    fn description(&self) -> &'static str {
        "Static security analysis results for Python code produced by Bandit"
    }

    fn parse(&self, raw: &str) -> Result<StructuredResult, NormalizeError> {
        let map = parse_json_object("bandit", raw)?;
        require_array("bandit", &map, "results")?;

        if let Some(results) = map.get("results").and_then(|v| v.as_array()) {
            debug!(count = results.len(), "parsed bandit results");
        }

        Ok(map)
    }
}
