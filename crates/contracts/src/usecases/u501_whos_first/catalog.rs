use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary catalog
// ---------------------------------------------------------------------------

/// One authored vocabulary value with its display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub slug: String,
    pub display_name: String,
}

/// Authored variations, time factors and property types of one damage type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageTypeCatalog {
    pub damage_type: VocabularyItem,
    pub variations: Vec<VocabularyItem>,
    pub time_factors: Vec<VocabularyItem>,
    pub property_types: Vec<VocabularyItem>,
}

/// Usecase identity as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseInfo {
    pub full_name: String,
    pub display_name: String,
    pub description: String,
}

/// GET /api/catalog/whos-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub usecase: UseCaseInfo,
    pub damage_types: Vec<DamageTypeCatalog>,
    /// Number of base scenarios (without locations).
    pub scenario_count: usize,
}

// ---------------------------------------------------------------------------
// Sitemap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Legacy slug (`/api/whos-first/:slug`).
    pub id: String,
    /// Structured path (`/api/scenarios/...`).
    pub path: String,
}

/// GET /api/sitemap/whos-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapResponse {
    pub locations: Vec<String>,
    pub total: usize,
    pub entries: Vec<SitemapEntry>,
}
