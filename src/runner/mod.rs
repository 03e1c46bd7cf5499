//! Parser resolution and processing orchestration
//!
//! The registry maps scanner type identifiers to parser constructors and
//! mediates all lookups; the processor ties resolution, parsing, and model
//! building into one synchronous call. New scanner types can be registered
//! without modifying either.

pub mod processor;
pub mod registry;

pub use processor::ResultProcessor;
pub use registry::{ParserRegistry, ParserRegistryBuilder};
