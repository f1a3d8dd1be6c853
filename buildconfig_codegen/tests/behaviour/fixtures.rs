//! Shared scenario state for generator behaviour tests.

use buildconfig_codegen::ConfigSnapshot;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State threaded through the generator scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct GeneratorContext {
    /// Snapshot under construction.
    pub snapshot: Slot<ConfigSnapshot>,
    /// Most recently generated module.
    pub module: Slot<String>,
    /// Module generated before the most recent one.
    pub previous_module: Slot<String>,
}

/// Provides a clean context for each scenario.
#[fixture]
pub fn generator_context() -> GeneratorContext {
    GeneratorContext::default()
}
