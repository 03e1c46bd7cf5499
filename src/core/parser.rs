//! The ResultParser trait - the pluggable parsing seam of the pipeline.
//!
//! Each supported scanner gets one parser implementation that knows that
//! scanner's raw output grammar and nothing else. Parsers are stateless:
//! the registry produces a fresh instance per resolution, so no state can
//! leak between `process_results` calls.

use crate::core::NormalizeError;

/// Scanner-specific structured output, pre-normalization.
///
/// Keys and value types are owned by the scanner's output format and stay
/// opaque to the processor; only the model builder interprets them.
pub type StructuredResult = serde_json::Map<String, serde_json::Value>;

pub trait ResultParser: Send + Sync {
    /// Stable identifier of the scanner this parser understands.
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    /// Parses the complete raw output of a single scanner invocation.
    ///
    /// Fail-fast: when the input does not match the expected format the
    /// parser errors out with no partial result.
    fn parse(&self, raw: &str) -> Result<StructuredResult, NormalizeError>;
}
