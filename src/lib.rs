//! Scan Normalize - Scanner Result Normalization Pipeline
//!
//! This crate provides a registry-and-dispatch pipeline for aggregating findings
//! from multiple, heterogeneously-formatted security scanners into one canonical
//! model: raw scanner output goes in, a unified findings model comes out.

pub mod core;
pub mod parsers;
pub mod runner;

pub use crate::core::{
    AggregateModel, DefaultModelBuilder, Finding, Location, ModelBuilder, NormalizeError,
    ResultParser, RunContextBuilder, Severity, StructuredResult,
};

pub use crate::runner::{ParserRegistry, ParserRegistryBuilder, ResultProcessor};

pub use crate::parsers::{BanditParser, NpmAuditParser, SemgrepParser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
