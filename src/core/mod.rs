//! Core abstractions for the normalization pipeline
//!
//! Fundamental building blocks shared by every stage of the pipeline. The
//! ResultParser trait defines the interface all scanner-output parsers
//! implement, the findings model holds the normalized output, and the
//! ModelBuilder trait isolates the structured-result-to-model step so
//! per-scanner normalization rules can be added without touching the
//! registry or processor.

pub mod builder;
pub mod error;
pub mod model;
pub mod parser;
pub mod severity;

pub use builder::{DefaultModelBuilder, ModelBuilder, RunContextBuilder};
pub use error::NormalizeError;
pub use model::{AggregateModel, Finding, Location};
pub use parser::{ResultParser, StructuredResult};
pub use severity::Severity;
