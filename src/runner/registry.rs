use crate::core::{NormalizeError, ResultParser};
use crate::parsers::{BanditParser, NpmAuditParser, SemgrepParser};
use std::collections::HashMap;
use tracing::debug;

type ParserConstructor = Box<dyn Fn() -> Box<dyn ResultParser> + Send + Sync>;

/// Maps scanner type identifiers to parser constructors.
///
/// Registration replaces any previous entry for the same identifier (last
/// write wins). Resolution invokes the constructor on every call, so each
/// lookup yields a fresh parser instance and no state survives across calls.
pub struct ParserRegistry {
    parsers: HashMap<String, ParserConstructor>,
}

/// Scanner type identifiers are matched case-insensitively with surrounding
/// whitespace ignored.
fn normalize_scanner_type(scanner_type: &str) -> String {
    scanner_type.trim().to_ascii_lowercase()
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    pub fn register<F, P>(&mut self, scanner_type: &str, constructor: F)
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: ResultParser + 'static,
    {
        let id = normalize_scanner_type(scanner_type);
        debug!(scanner_type = %id, "registering parser");
        self.parsers
            .insert(id, Box::new(move || Box::new(constructor())));
    }

    pub fn resolve(&self, scanner_type: &str) -> Result<Box<dyn ResultParser>, NormalizeError> {
        let id = normalize_scanner_type(scanner_type);
        let constructor = self
            .parsers
            .get(&id)
            .ok_or_else(|| NormalizeError::ParserNotFound(scanner_type.to_string()))?;
        Ok(constructor())
    }

    pub fn contains(&self, scanner_type: &str) -> bool {
        self.parsers
            .contains_key(&normalize_scanner_type(scanner_type))
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.parsers.keys().cloned().collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ParserRegistryBuilder {
    registry: ParserRegistry,
}

impl ParserRegistryBuilder {
    pub fn new() -> Self {
        Self {
            registry: ParserRegistry::new(),
        }
    }

    pub fn with_parser<F, P>(mut self, scanner_type: &str, constructor: F) -> Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: ResultParser + 'static,
    {
        self.registry.register(scanner_type, constructor);
        self
    }

    /// Registers the parser variants shipped with this crate.
    pub fn with_defaults(mut self) -> Self {
        self.registry.register("bandit", BanditParser::new);
        self.registry.register("semgrep", SemgrepParser::new);
        self.registry.register("npm-audit", NpmAuditParser::new);
        self
    }

    pub fn build(self) -> ParserRegistry {
        self.registry
    }
}

impl Default for ParserRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StructuredResult;

    struct StubParser {
        marker: i64,
    }

    impl ResultParser for StubParser {
        fn id(&self) -> &'static str {
            "stub"
        }

        fn parse(&self, _raw: &str) -> Result<StructuredResult, NormalizeError> {
            let mut out = StructuredResult::new();
            out.insert("marker".to_string(), self.marker.into());
            Ok(out)
        }
    }

    #[test]
    fn test_register_then_resolve() {
        let mut registry = ParserRegistry::new();
        registry.register("stub", || StubParser { marker: 1 });

        let parser = registry.resolve("stub").unwrap();
        let structured = parser.parse("anything").unwrap();
        assert_eq!(structured.get("marker"), Some(&1.into()));
    }

    #[test]
    fn test_resolve_unknown_fails_with_offending_id() {
        let registry = ParserRegistry::new();
        match registry.resolve("unregistered") {
            Err(NormalizeError::ParserNotFound(id)) => assert_eq!(id, "unregistered"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("resolution of an unregistered type must fail"),
        }
    }

    #[test]
    fn test_duplicate_registration_last_write_wins() {
        let mut registry = ParserRegistry::new();
        registry.register("stub", || StubParser { marker: 1 });
        registry.register("stub", || StubParser { marker: 2 });

        let parser = registry.resolve("stub").unwrap();
        let structured = parser.parse("anything").unwrap();
        assert_eq!(structured.get("marker"), Some(&2.into()));
    }

    #[test]
    fn test_resolve_returns_fresh_instance_per_call() {
        let mut registry = ParserRegistry::new();
        registry.register("stub", || StubParser { marker: 7 });

        let first = registry.resolve("stub").unwrap();
        let second = registry.resolve("stub").unwrap();
        let a: *const dyn ResultParser = first.as_ref();
        let b: *const dyn ResultParser = second.as_ref();
        assert_ne!(a as *const (), b as *const ());
    }

    #[test]
    fn test_scanner_type_normalization() {
        let mut registry = ParserRegistry::new();
        registry.register("  Bandit ", || StubParser { marker: 1 });

        assert!(registry.contains("bandit"));
        assert!(registry.resolve("BANDIT").is_ok());
    }

    #[test]
    fn test_builder_with_defaults() {
        let registry = ParserRegistryBuilder::new().with_defaults().build();
        let mut ids = registry.list_ids();
        ids.sort();
        assert_eq!(ids, vec!["bandit", "npm-audit", "semgrep"]);
    }
}
