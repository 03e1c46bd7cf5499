//! Concrete parser variants, one per supported scanner.
//!
//! Each parser owns the grammar of one scanner's raw output and validates
//! the top-level shape only; the structured mapping it produces stays
//! opaque to the processor.

pub mod bandit;
pub mod npm_audit;
pub mod semgrep;

pub use bandit::BanditParser;
pub use npm_audit::NpmAuditParser;
pub use semgrep::SemgrepParser;

use crate::core::{NormalizeError, StructuredResult};
use serde_json::Value;

/// Parses raw text as a JSON object, attributing syntax and shape errors to
/// the named scanner.
fn parse_json_object(scanner: &'static str, raw: &str) -> Result<StructuredResult, NormalizeError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| NormalizeError::InvalidOutput {
        scanner: scanner.to_string(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(NormalizeError::NotAnObject {
            scanner: scanner.to_string(),
        }),
    }
}

/// Requires a top-level field to be present and an array. An absent field
/// and a present field of the wrong type are reported as distinct errors.
fn require_array(
    scanner: &'static str,
    map: &StructuredResult,
    field: &'static str,
) -> Result<(), NormalizeError> {
    match map.get(field) {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(NormalizeError::WrongFieldType {
            scanner: scanner.to_string(),
            field,
        }),
        None => Err(NormalizeError::MissingField {
            scanner: scanner.to_string(),
            field,
        }),
    }
}
