//! Generator trait and registry.
//!
//! Every sport implements [`BenchmarkGenerator`]. The CLI resolves a sport
//! to its generator through [`GeneratorRegistry`] and never calls the sport
//! modules directly.
//!
//! # Example
//!
//! ```
//! use pdp_core::default_registry;
//! use pdp_model::Sport;
//!
//! let generator = default_registry().get(Sport::Rugby).unwrap();
//! assert_eq!(generator.default_file_name(), "rugby-benchmarks-IMPORT.json");
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use pdp_model::{BenchmarkRecord, Sport};

/// A sport-specific benchmark generator.
pub trait BenchmarkGenerator: Send + Sync {
    fn sport(&self) -> Sport;

    /// Returns a human-readable description of the generator.
    fn description(&self) -> &'static str {
        "Benchmark generator"
    }

    /// File name the generator writes to when no output is given.
    fn default_file_name(&self) -> &'static str;

    /// Runs the full enumeration.
    ///
    /// Output order is deterministic: regenerating with unchanged tables
    /// yields the same records in the same order.
    fn generate(&self) -> Vec<BenchmarkRecord>;
}

/// Registry of generators indexed by sport.
pub struct GeneratorRegistry {
    generators: HashMap<Sport, Box<dyn BenchmarkGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Registers a generator for its sport, replacing any existing one.
    pub fn register(&mut self, generator: Box<dyn BenchmarkGenerator>) {
        self.generators.insert(generator.sport(), generator);
    }

    pub fn get(&self, sport: Sport) -> Option<&dyn BenchmarkGenerator> {
        self.generators.get(&sport).map(|generator| generator.as_ref())
    }

    /// Looks up a generator by sport code or CLI name (`irish-dancing`).
    pub fn get_by_code(&self, code: &str) -> Option<&dyn BenchmarkGenerator> {
        code.parse::<Sport>().ok().and_then(|sport| self.get(sport))
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Registered sports in declaration order.
    pub fn sports(&self) -> Vec<Sport> {
        let mut sports: Vec<Sport> = self.generators.keys().copied().collect();
        sports.sort();
        sports
    }

    /// Registered generators in declaration order of their sport.
    pub fn generators(&self) -> impl Iterator<Item = &dyn BenchmarkGenerator> + '_ {
        self.sports()
            .into_iter()
            .filter_map(move |sport| self.get(sport))
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: OnceLock<GeneratorRegistry> = OnceLock::new();

/// Returns the registry with every built-in sport.
pub fn default_registry() -> &'static GeneratorRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

pub fn build_default_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(Box::new(crate::athletics::AthleticsGenerator));
    registry.register(Box::new(crate::rugby::RugbyGenerator));
    registry.register(Box::new(crate::irish_dancing::IrishDancingGenerator));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyGenerator;

    impl BenchmarkGenerator for EmptyGenerator {
        fn sport(&self) -> Sport {
            Sport::Rugby
        }

        fn default_file_name(&self) -> &'static str {
            "empty.json"
        }

        fn generate(&self) -> Vec<BenchmarkRecord> {
            Vec::new()
        }
    }

    #[test]
    fn default_registry_has_all_sports() {
        let registry = default_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.sports(),
            vec![Sport::Athletics, Sport::Rugby, Sport::IrishDancing]
        );
    }

    #[test]
    fn lookup_by_code_accepts_cli_spelling() {
        let registry = default_registry();
        assert_eq!(
            registry.get_by_code("irish-dancing").map(|g| g.sport()),
            Some(Sport::IrishDancing)
        );
        assert!(registry.get_by_code("hurling").is_none());
    }

    #[test]
    fn register_replaces_existing_generator() {
        let mut registry = build_default_registry();
        registry.register(Box::new(EmptyGenerator));
        assert_eq!(registry.len(), 3);
        let rugby = registry.get(Sport::Rugby).unwrap();
        assert_eq!(rugby.default_file_name(), "empty.json");
        assert_eq!(rugby.description(), "Benchmark generator");
        assert!(rugby.generate().is_empty());
    }
}
