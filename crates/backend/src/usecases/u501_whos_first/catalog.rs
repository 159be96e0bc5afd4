use contracts::shared::format::display_name;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_whos_first::{
    CatalogResponse, DamageTypeCatalog, ScenarioContent, ScenarioKey, SitemapEntry,
    SitemapResponse, VocabularyItem, WhosFirstScenarios,
};

use super::generator::ScenarioGenerator;
use super::tables::{self, DamageTypeEntry};

/// Build the vocabulary catalog in declaration order.
pub fn catalog() -> CatalogResponse {
    let damage_types = tables::DAMAGE_TYPES
        .iter()
        .map(|entry| DamageTypeCatalog {
            damage_type: item(entry.slug),
            variations: items(entry.variations),
            time_factors: items(entry.time_factors),
            property_types: items(entry.property_types),
        })
        .collect();

    CatalogResponse {
        usecase: WhosFirstScenarios::info(),
        damage_types,
        scenario_count: base_scenario_count(),
    }
}

/// Number of catalog combinations without locations.
pub fn base_scenario_count() -> usize {
    tables::DAMAGE_TYPES.iter().map(DamageTypeEntry::combinations).sum()
}

/// Every catalog key, each followed by one key per location.
///
/// Order: damage type, variation, time factor, property type; the base key
/// always precedes its location variants.
pub fn catalog_keys(locations: &[String]) -> Vec<ScenarioKey> {
    let mut keys = Vec::with_capacity(base_scenario_count() * (locations.len() + 1));

    for entry in tables::DAMAGE_TYPES {
        for variation in entry.variations {
            for time_factor in entry.time_factors {
                for property_type in entry.property_types {
                    let base = ScenarioKey::new(entry.slug, *variation)
                        .with_time_factor(*time_factor)
                        .with_property_type(*property_type);
                    keys.push(base.clone());
                    keys.extend(
                        locations
                            .iter()
                            .map(|location| base.clone().with_location(location)),
                    );
                }
            }
        }
    }

    keys
}

/// Generate content for the whole catalog (SEO pre-rendering).
pub fn generate_all(generator: &ScenarioGenerator, locations: &[String]) -> Vec<ScenarioContent> {
    catalog_keys(locations)
        .iter()
        .map(|key| generator.generate(key))
        .collect()
}

/// Identity strings of `generate_all` without building the content.
pub fn sitemap(locations: &[String]) -> SitemapResponse {
    let entries: Vec<SitemapEntry> = catalog_keys(locations)
        .iter()
        .map(|key| SitemapEntry {
            id: key.id(),
            path: key.path(),
        })
        .collect();

    SitemapResponse {
        locations: locations.to_vec(),
        total: entries.len(),
        entries,
    }
}

fn item(slug: &str) -> VocabularyItem {
    VocabularyItem {
        slug: slug.to_string(),
        display_name: display_name(slug),
    }
}

fn items(slugs: &[&str]) -> Vec<VocabularyItem> {
    slugs.iter().map(|slug| item(slug)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.damage_types.len(), 4);
        assert_eq!(catalog.damage_types[0].damage_type.slug, "water-damage");
        assert_eq!(catalog.damage_types[0].damage_type.display_name, "Water Damage");
        assert_eq!(catalog.damage_types[0].variations.len(), 12);
        assert_eq!(catalog.damage_types[2].variations[0].display_name, "Black Mould");
        assert_eq!(catalog.scenario_count, 576);
        assert_eq!(catalog.usecase.full_name, "u501_whos_first_scenarios");
    }

    #[test]
    fn test_catalog_keys_order() {
        let locations = vec!["Sydney".to_string(), "Gold Coast".to_string()];
        let keys = catalog_keys(&locations);
        assert_eq!(keys.len(), 576 * 3);

        assert_eq!(keys[0].id(), "water-damage-burst-pipe-immediate-residential");
        assert_eq!(keys[1].id(), "water-damage-burst-pipe-immediate-residential-sydney");
        assert_eq!(keys[2].id(), "water-damage-burst-pipe-immediate-residential-gold-coast");
        assert_eq!(keys[3].id(), "water-damage-burst-pipe-immediate-commercial");

        let last = keys.last().unwrap();
        assert_eq!(last.id(), "storm-damage-hail-damage-season-end-factory-gold-coast");
    }

    #[test]
    fn test_catalog_keys_without_locations() {
        let keys = catalog_keys(&[]);
        assert_eq!(keys.len(), base_scenario_count());
        assert!(keys.iter().all(|k| k.location().is_none()));
    }

    #[test]
    fn test_generate_all_matches_sitemap() {
        let locations = vec!["Perth".to_string()];
        let generator = ScenarioGenerator::default();
        let all = generate_all(&generator, &locations);
        let sitemap = sitemap(&locations);

        assert_eq!(all.len(), sitemap.total);
        assert_eq!(sitemap.entries.len(), sitemap.total);
        for (content, entry) in all.iter().zip(&sitemap.entries) {
            assert_eq!(content.id, entry.id);
            assert_eq!(content.path, entry.path);
            assert_eq!(content.timeline_critical.len(), 6);
        }
    }

    #[test]
    fn test_every_sitemap_path_rebuilds_its_key() {
        for key in catalog_keys(&["Gold Coast".to_string()]) {
            let path = key.path();
            let parts: Vec<&str> = path.split('/').collect();
            let rebuilt = ScenarioKey::from_path_parts(
                parts[0],
                parts[1],
                parts[2],
                parts[3],
                parts.get(4).copied(),
            )
            .unwrap();
            assert_eq!(rebuilt, key);
        }
    }
}
