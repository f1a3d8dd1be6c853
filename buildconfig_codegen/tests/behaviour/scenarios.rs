//! Binds the generator feature files to the step registry.

use crate::fixtures::{GeneratorContext, generator_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/generate_module.feature",
    fixtures = [generator_context: GeneratorContext]
);
