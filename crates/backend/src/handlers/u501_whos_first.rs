use axum::{extract::Path, http::StatusCode, Json};
use contracts::usecases::u501_whos_first::{
    CatalogResponse, ScenarioContent, ScenarioKey, SitemapResponse, SlugError,
};
use once_cell::sync::Lazy;

use crate::usecases::u501_whos_first::{catalog, GENERATOR};

/// Локации для sitemap из секции [seo] конфига
static SEO_LOCATIONS: Lazy<Vec<String>> = Lazy::new(|| match crate::shared::config::load_config() {
    Ok(cfg) => cfg.seo.locations,
    Err(e) => {
        tracing::warn!("Sitemap: cannot load config: {}; no SEO locations", e);
        Vec::new()
    }
});

/// GET /api/whos-first/:slug
///
/// Legacy позиционный slug: `damageType-variation[-timeFactor[-propertyType[-location]]]`.
pub async fn get_by_slug(Path(slug): Path<String>) -> Result<Json<ScenarioContent>, StatusCode> {
    let key = ScenarioKey::parse(&slug).map_err(|e| not_found(&slug, e))?;
    Ok(Json(GENERATOR.generate(&key)))
}

/// GET /api/scenarios/:damage_type/:variation/:time_factor/:property_type
pub async fn get_by_path(
    Path((damage_type, variation, time_factor, property_type)): Path<(String, String, String, String)>,
) -> Result<Json<ScenarioContent>, StatusCode> {
    let key = ScenarioKey::from_path_parts(&damage_type, &variation, &time_factor, &property_type, None)
        .map_err(|e| not_found(&damage_type, e))?;
    Ok(Json(GENERATOR.generate(&key)))
}

/// GET /api/scenarios/:damage_type/:variation/:time_factor/:property_type/:location
pub async fn get_by_path_with_location(
    Path((damage_type, variation, time_factor, property_type, location)): Path<(
        String,
        String,
        String,
        String,
        String,
    )>,
) -> Result<Json<ScenarioContent>, StatusCode> {
    let key = ScenarioKey::from_path_parts(
        &damage_type,
        &variation,
        &time_factor,
        &property_type,
        Some(&location),
    )
    .map_err(|e| not_found(&damage_type, e))?;
    Ok(Json(GENERATOR.generate(&key)))
}

/// GET /api/catalog/whos-first
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(catalog::catalog())
}

/// GET /api/sitemap/whos-first
pub async fn get_sitemap() -> Json<SitemapResponse> {
    let sitemap = catalog::sitemap(&SEO_LOCATIONS);
    tracing::info!(
        "Sitemap: {} entries for {} locations",
        sitemap.total,
        sitemap.locations.len()
    );
    Json(sitemap)
}

fn not_found(input: &str, err: SlugError) -> StatusCode {
    tracing::warn!("Scenario '{}' rejected: {}", input, err);
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4(d: &str, v: &str, t: &str, p: &str) -> Path<(String, String, String, String)> {
        Path((d.into(), v.into(), t.into(), p.into()))
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let Json(content) = get_by_slug(Path("fire-kitchen-immediate-home-gold-coast".into()))
            .await
            .unwrap();
        assert_eq!(content.id, "fire-kitchen-immediate-home-gold-coast");
        assert!(content.title.ends_with(" - Gold Coast"));
        assert_eq!(content.timeline_critical.len(), 6);
    }

    #[tokio::test]
    async fn test_get_by_slug_defaults() {
        let Json(content) = get_by_slug(Path("flooding-basement".into())).await.unwrap();
        assert_eq!(content.id, "flooding-basement-immediate-residential");
    }

    #[tokio::test]
    async fn test_get_by_slug_not_found() {
        assert_eq!(
            get_by_slug(Path(String::new())).await.unwrap_err(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_by_slug(Path("water".into())).await.unwrap_err(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_get_by_path_authored_scenario() {
        let Json(content) = get_by_path(path4("fire-damage", "kitchen-fire", "immediate", "residential"))
            .await
            .unwrap();
        assert!(content.title.contains("Kitchen Fire"));
        assert_eq!(content.cost_impact.with_us, "$10,000-$30,000");
        assert_eq!(content.path, "fire-damage/kitchen-fire/immediate/residential");
    }

    #[tokio::test]
    async fn test_response_uses_camel_case_fields() {
        let Json(content) = get_by_slug(Path("alien-invasion".into())).await.unwrap();
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["costImpact"]["withUs"], "Minimized");
        assert_eq!(json["timelineCritical"].as_array().unwrap().len(), 6);
        assert!(json["wrongFirstCalls"][0]["who"].is_string());
        assert!(json["caseStudy"]["title"].is_string());
    }

    #[tokio::test]
    async fn test_get_by_path_with_location() {
        let Json(content) = get_by_path_with_location(Path((
            "water-damage".into(),
            "burst-pipe".into(),
            "within-hours".into(),
            "strata".into(),
            "Gold Coast".into(),
        )))
        .await
        .unwrap();
        assert_eq!(
            content.id,
            "water-damage-burst-pipe-within-hours-strata-gold-coast"
        );
        assert_eq!(content.cost_impact.with_us, "$10,000-$50,000");
    }

    #[tokio::test]
    async fn test_get_by_path_rejects_empty_damage_type() {
        let result = get_by_path(path4("", "burst-pipe", "immediate", "residential")).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_catalog() {
        let Json(catalog) = get_catalog().await;
        assert_eq!(catalog.damage_types.len(), 4);
        assert_eq!(catalog.scenario_count, 576);
    }

    #[tokio::test]
    async fn test_get_sitemap() {
        let Json(sitemap) = get_sitemap().await;
        assert_eq!(sitemap.total, 576 * (sitemap.locations.len() + 1));
        assert_eq!(sitemap.entries[0].id, "water-damage-burst-pipe-immediate-residential");
    }
}
