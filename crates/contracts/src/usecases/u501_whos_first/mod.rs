pub mod catalog;
pub mod content;
pub mod key;

pub use catalog::{CatalogResponse, DamageTypeCatalog, SitemapEntry, SitemapResponse, UseCaseInfo, VocabularyItem};
pub use content::{CaseStudy, CostImpact, Faq, ScenarioContent, WrongFirstCall};
pub use key::{ScenarioKey, SlugError};

use crate::usecases::common::UseCaseMetadata;

pub struct WhosFirstScenarios;

impl UseCaseMetadata for WhosFirstScenarios {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "whos_first_scenarios"
    }

    fn display_name() -> &'static str {
        "Who's First? Scenarios"
    }

    fn description() -> &'static str {
        "SEO landing-page content for every damage type, variation, time factor and property type"
    }
}

impl WhosFirstScenarios {
    pub fn info() -> UseCaseInfo {
        UseCaseInfo {
            full_name: Self::full_name(),
            display_name: Self::display_name().to_string(),
            description: Self::description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usecase_full_name() {
        assert_eq!(WhosFirstScenarios::full_name(), "u501_whos_first_scenarios");
        assert_eq!(WhosFirstScenarios::info().full_name, "u501_whos_first_scenarios");
    }
}
