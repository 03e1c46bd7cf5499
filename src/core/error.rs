use thiserror::Error;

/// Errors produced by the normalization pipeline.
///
/// The processor never translates or recovers from these: a parser failure
/// crosses `process_results` unchanged, and a resolution failure surfaces to
/// the caller as-is.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("no parser registered for scanner type '{0}'")]
    ParserNotFound(String),

    #[error("invalid {scanner} output: {source}")]
    InvalidOutput {
        scanner: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{scanner} output is not a JSON object")]
    NotAnObject { scanner: String },

    #[error("{scanner} output is missing expected field '{field}'")]
    MissingField {
        scanner: String,
        field: &'static str,
    },

    #[error("{scanner} output field '{field}' has the wrong type")]
    WrongFieldType {
        scanner: String,
        field: &'static str,
    },
}
