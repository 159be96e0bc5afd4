pub mod catalog;
pub mod generator;
pub mod tables;

pub use generator::{GeneratorSettings, ScenarioGenerator, GENERATOR};

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_whos_first::WhosFirstScenarios;

/// Прогрев статических таблиц и генератора до первого запроса
pub fn warm_up() {
    tables::init();
    let scenarios = catalog::base_scenario_count();
    let settings = GENERATOR.settings();
    tracing::info!(
        "{}: {} base scenarios, brand '{}', default region '{}'",
        WhosFirstScenarios::full_name(),
        scenarios,
        settings.brand_name,
        settings.default_region
    );
}
