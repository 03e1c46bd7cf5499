//! Model builders convert a parser's structured output into the aggregate
//! model. The trait is the extension point for per-scanner normalization
//! rules: substituting a builder changes what lands in the model without
//! touching the registry or processor.

use crate::core::{AggregateModel, StructuredResult};
use chrono::Utc;

pub trait ModelBuilder: Send + Sync {
    fn build(&self, structured: &StructuredResult) -> AggregateModel;
}

/// Placeholder builder used by the processor until per-scanner normalization
/// rules exist: it returns an empty model regardless of input.
// TODO: populate findings from the structured result once the per-scanner
// field mappings are defined.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultModelBuilder;

impl ModelBuilder for DefaultModelBuilder {
    fn build(&self, _structured: &StructuredResult) -> AggregateModel {
        AggregateModel::new()
    }
}

/// Stamps run-level metadata (scanner type, UTC timestamp) onto an otherwise
/// empty model. Findings stay empty; this builder only demonstrates that the
/// build step is substitutable.
#[derive(Debug, Clone)]
pub struct RunContextBuilder {
    scanner_type: String,
}

impl RunContextBuilder {
    pub fn new(scanner_type: impl Into<String>) -> Self {
        Self {
            scanner_type: scanner_type.into(),
        }
    }
}

impl ModelBuilder for RunContextBuilder {
    fn build(&self, _structured: &StructuredResult) -> AggregateModel {
        AggregateModel::new()
            .with_metadata("scanner_type", self.scanner_type.clone().into())
            .with_metadata("normalized_at", Utc::now().to_rfc3339().into())
    }
}
