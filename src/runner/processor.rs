use crate::core::{AggregateModel, DefaultModelBuilder, ModelBuilder, NormalizeError, ResultParser};
use crate::runner::{ParserRegistry, ParserRegistryBuilder};
use tracing::debug;

/// Public entry point of the pipeline: resolves the parser for a scanner
/// type, parses the raw output, and folds the structured result into an
/// aggregate model.
///
/// Registration takes `&mut self` while processing takes `&self`, so the
/// borrow checker enforces the configuration discipline: finish registering
/// parsers, then share the processor (e.g. behind an `Arc`) for concurrent
/// `process_results` calls.
pub struct ResultProcessor {
    registry: ParserRegistry,
    builder: Box<dyn ModelBuilder>,
}

impl ResultProcessor {
    /// A processor with an empty registry and the placeholder model builder.
    pub fn new() -> Self {
        Self {
            registry: ParserRegistry::new(),
            builder: Box::new(DefaultModelBuilder),
        }
    }

    /// A processor preloaded with the parser variants shipped in this crate.
    pub fn with_default_parsers() -> Self {
        Self {
            registry: ParserRegistryBuilder::new().with_defaults().build(),
            builder: Box::new(DefaultModelBuilder),
        }
    }

    /// Substitutes the model builder, the extension point for per-scanner
    /// normalization rules.
    pub fn with_builder<B: ModelBuilder + 'static>(mut self, builder: B) -> Self {
        self.builder = Box::new(builder);
        self
    }

    pub fn register_parser<F, P>(&mut self, scanner_type: &str, constructor: F)
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: ResultParser + 'static,
    {
        self.registry.register(scanner_type, constructor);
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Normalizes one scanner's raw output into an aggregate model.
    ///
    /// Single-pass and non-retrying: resolution failure and parse failure
    /// both abort the call with no partial result. Multi-scanner aggregation
    /// is the caller's concern; call once per scanner and merge externally.
    pub fn process_results(
        &self,
        scanner_type: &str,
        raw_results: &str,
    ) -> Result<AggregateModel, NormalizeError> {
        debug!(scanner_type, "resolving parser");
        let parser = self.registry.resolve(scanner_type)?;

        debug!(parser = parser.id(), bytes = raw_results.len(), "parsing raw output");
        let structured = parser.parse(raw_results)?;

        debug!(scanner_type, keys = structured.len(), "building model");
        Ok(self.builder.build(&structured))
    }
}

impl Default for ResultProcessor {
    fn default() -> Self {
        Self::new()
    }
}
