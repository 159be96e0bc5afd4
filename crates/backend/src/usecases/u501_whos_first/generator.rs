//! Генератор контента сценария "Who's First?".
//!
//! Каждое поле собирается отдельной чистой функцией по трем уровням:
//! точная запись (damage type, variation) → запись уровня damage type →
//! общий шаблон. Общий шаблон определен для любых входных строк,
//! поэтому `generate` тотален и не возвращает ошибок.

use contracts::shared::format::{display_name, display_name_lower};
use contracts::usecases::u501_whos_first::{
    CaseStudy, CostImpact, Faq, ScenarioContent, ScenarioKey, WrongFirstCall,
};
use once_cell::sync::Lazy;

use super::tables::{self, fill, CostBand, DamageTypeEntry};
use crate::shared::config::ContentConfig;

// ─── Настройки ──────────────────────────────────────────────────────────────

/// Брендовые строки и значения по умолчанию, которые подставляются в тексты
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub brand_name: String,
    /// Регион для meta description, когда локации нет
    pub default_region: String,
    /// Город для кейса, когда локации нет
    pub default_case_study_city: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            brand_name: "Disaster Recovery".into(),
            default_region: "Australia".into(),
            default_case_study_city: "Brisbane".into(),
        }
    }
}

impl From<ContentConfig> for GeneratorSettings {
    fn from(cfg: ContentConfig) -> Self {
        Self {
            brand_name: cfg.brand_name,
            default_region: cfg.default_region,
            default_case_study_city: cfg.default_case_study_city,
        }
    }
}

// ─── Глобальный экземпляр ───────────────────────────────────────────────────

pub static GENERATOR: Lazy<ScenarioGenerator> = Lazy::new(|| {
    match crate::shared::config::load_config() {
        Ok(cfg) => ScenarioGenerator::new(cfg.content.into()),
        Err(e) => {
            tracing::warn!("ScenarioGenerator: cannot load config: {}; using defaults", e);
            ScenarioGenerator::default()
        }
    }
});

// ─── Генератор ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ScenarioGenerator {
    settings: GeneratorSettings,
}

impl ScenarioGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Собрать полный контент страницы для ключа
    pub fn generate(&self, key: &ScenarioKey) -> ScenarioContent {
        let entry = tables::damage_type(key.damage_type());
        let residential = is_residential(key.property_type());

        let content = ScenarioContent {
            id: key.id(),
            path: key.path(),
            title: title(key),
            question: question(key),
            meta_description: self.meta_description(key),
            situation: situation(key, entry),
            why_us_first: why_us_first(entry),
            wrong_first_calls: wrong_first_calls(key, entry),
            our_process: our_process(key.time_factor()),
            timeline_critical: timeline_critical(),
            insurance_insights: to_strings(tables::INSURANCE_INSIGHTS),
            health_safety: health_safety(key, entry),
            cost_impact: cost_impact(entry, residential),
            faqs: faqs(entry),
            case_study: Some(self.case_study(key, residential)),
            related_scenarios: related_scenarios(key.damage_type()),
            search_keywords: search_keywords(key),
        };

        tracing::debug!(
            "Scenario generated: {} (authored damage type: {})",
            content.id,
            entry.is_some()
        );
        content
    }

    fn meta_description(&self, key: &ScenarioKey) -> String {
        let place = key
            .location()
            .map(display_name)
            .unwrap_or_else(|| self.settings.default_region.clone());
        format!(
            "Discover who to call first for {} in {}. Expert guidance on the critical first steps, insurance coordination, and why {} should be your first call. Available 24/7.",
            display_name(key.variation()),
            place,
            self.settings.brand_name
        )
    }

    fn case_study(&self, key: &ScenarioKey, residential: bool) -> CaseStudy {
        let city = key
            .location()
            .map(display_name)
            .unwrap_or_else(|| self.settings.default_case_study_city.clone());
        let (client, premises, caller) = if residential {
            ("Family", "a family home", "homeowner")
        } else {
            ("Business", "a commercial property", "owner")
        };

        CaseStudy {
            title: format!("{} {} Saves $45,000 by Calling Us First", city, client),
            situation: format!(
                "A {} incident occurred in {}. The {} almost called their insurance company first, but remembered our \"Who's First?\" message.",
                display_name(key.variation()),
                premises,
                caller
            ),
            action: format!(
                "They called {} immediately. We arrived within 45 minutes, documented everything, stopped damage spread, and coordinated the entire restoration while maximizing their insurance claim.",
                self.settings.brand_name
            ),
            result: "Insurance covered 95% of costs (industry average: 60%). Total savings: $45,000. Time to resolution: 3 weeks (industry average: 8 weeks). Zero secondary damage.".into(),
        }
    }
}

/// Жилой тарифный уровень: точное совпадение с residential / home / house
pub fn is_residential(property_type: &str) -> bool {
    tables::RESIDENTIAL_PROPERTY_TYPES.contains(property_type)
}

// ─── Поля контента ──────────────────────────────────────────────────────────

fn title(key: &ScenarioKey) -> String {
    let base = format!(
        "Who to Call First: {} in {} Property",
        display_name(key.variation()),
        display_name(key.property_type())
    );
    match key.location() {
        Some(location) => format!("{} - {}", base, display_name(location)),
        None => base,
    }
}

fn question(key: &ScenarioKey) -> String {
    let subject = format!(
        "My {} has {}",
        display_name(key.property_type()),
        display_name(key.variation())
    );
    match tables::TIME_CONTEXT.get(key.time_factor()) {
        Some(context) => format!("{} {} - who do I call first?", subject, context),
        None => format!("{} - who do I call first?", subject),
    }
}

fn situation(key: &ScenarioKey, entry: Option<&DamageTypeEntry>) -> String {
    let property = key.property_type();

    if let Some(entry) = entry {
        if let Some(template) = entry.situation_for(key.variation()) {
            return fill(template, &[("property", property)]);
        }
        let variation = display_name_lower(key.variation());
        return fill(
            entry.default_situation,
            &[("property", property), ("variation", variation.as_str())],
        );
    }

    let variation = display_name(key.variation());
    let damage = display_name(key.damage_type());
    fill(
        tables::GENERIC_SITUATION,
        &[
            ("property", property),
            ("variation", variation.as_str()),
            ("damage", damage.as_str()),
        ],
    )
}

fn why_us_first(entry: Option<&DamageTypeEntry>) -> Vec<String> {
    let specific = entry.map(|e| e.why_us_first).unwrap_or_default();
    tables::BASE_REASONS
        .iter()
        .chain(specific.iter())
        .map(|s| s.to_string())
        .collect()
}

fn wrong_first_calls(key: &ScenarioKey, entry: Option<&DamageTypeEntry>) -> Vec<WrongFirstCall> {
    match entry {
        Some(entry) => entry
            .wrong_first_calls
            .iter()
            .map(|(who, consequence)| WrongFirstCall {
                who: who.to_string(),
                consequence: consequence.to_string(),
            })
            .collect(),
        None => {
            let damage = display_name_lower(key.damage_type());
            tables::GENERIC_WRONG_FIRST_CALLS
                .iter()
                .map(|(who, consequence)| WrongFirstCall {
                    who: who.to_string(),
                    consequence: fill(consequence, &[("damage", damage.as_str())]),
                })
                .collect()
        }
    }
}

fn our_process(time_factor: &str) -> Vec<String> {
    let first = if tables::URGENT_TIME_FACTORS.contains(time_factor) {
        tables::URGENT_FIRST_STEP
    } else {
        tables::SCHEDULED_FIRST_STEP
    };
    std::iter::once(first)
        .chain(tables::PROCESS_STEPS.iter().copied())
        .map(String::from)
        .collect()
}

fn timeline_critical() -> Vec<String> {
    to_strings(&tables::TIMELINE_CRITICAL)
}

fn health_safety(key: &ScenarioKey, entry: Option<&DamageTypeEntry>) -> Vec<String> {
    match entry {
        Some(entry) => to_strings(entry.health_safety),
        None => {
            let damage = display_name_lower(key.damage_type());
            tables::GENERIC_HEALTH_SAFETY
                .iter()
                .map(|hazard| fill(hazard, &[("damage", damage.as_str())]))
                .collect()
        }
    }
}

fn cost_impact(entry: Option<&DamageTypeEntry>, residential: bool) -> CostImpact {
    let band: CostBand = match entry {
        Some(entry) if residential => entry.cost.residential,
        Some(entry) => entry.cost.other,
        None => tables::GENERIC_COST_BAND,
    };
    CostImpact {
        with_us: band.with_us.into(),
        without_us: band.without_us.into(),
        savings: band.savings.into(),
    }
}

fn faqs(entry: Option<&DamageTypeEntry>) -> Vec<Faq> {
    let specific = entry.map(|e| e.faqs).unwrap_or_default();
    tables::GENERIC_FAQS
        .iter()
        .chain(specific.iter())
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

/// Перелинковка по фиксированным шаблонам; не проверяется, что цель генерируема
fn related_scenarios(damage_type: &str) -> Vec<String> {
    tables::RELATED_TEMPLATES
        .iter()
        .map(|template| fill(template, &[("damage", damage_type)]))
        .collect()
}

fn search_keywords(key: &ScenarioKey) -> Vec<String> {
    let variation = display_name_lower(key.variation());
    let damage = display_name_lower(key.damage_type());
    let property = display_name_lower(key.property_type());
    let vars = [
        ("variation", variation.as_str()),
        ("damage", damage.as_str()),
        ("property", property.as_str()),
    ];

    let mut keywords: Vec<String> = tables::KEYWORD_TEMPLATES
        .iter()
        .map(|template| fill(template, &vars))
        .collect();

    if let Some(location) = key.location() {
        let location = display_name_lower(location);
        keywords.extend(tables::LOCATION_KEYWORD_TEMPLATES.iter().map(|template| {
            fill(
                template,
                &[
                    ("location", location.as_str()),
                    ("variation", variation.as_str()),
                    ("damage", damage.as_str()),
                ],
            )
        }));
    }

    keywords
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
