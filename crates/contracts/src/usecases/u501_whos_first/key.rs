use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::shared::format::slugify_location;

/// Разделитель полей в slug сценария
pub const SEPARATOR: char = '-';

/// Значение time factor, если в slug его нет
pub const DEFAULT_TIME_FACTOR: &str = "immediate";

/// Значение property type, если в slug его нет
pub const DEFAULT_PROPERTY_TYPE: &str = "residential";

/// Максимальное число позиционных полей в slug (location забирает остаток)
const MAX_FIELDS: usize = 5;

/// Ошибки разбора идентификатора сценария.
///
/// Генератор сам по себе тотален; эти ошибки нужны только слою роутинга,
/// чтобы ответить 404 на заведомо пустой slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("damage type segment is empty")]
    EmptyDamageType,

    #[error("variation segment is missing or empty")]
    MissingVariation,
}

// ============================================================================
// ScenarioKey
// ============================================================================

/// Идентичность сценария: (damage type, variation, time factor, property type, location?).
///
/// Неизменяемое значение. Location хранится уже нормализованным
/// (нижний регистр, пробелы заменены на `-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ScenarioKeyFields")]
pub struct ScenarioKey {
    damage_type: String,
    variation: String,
    time_factor: String,
    property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

/// Сырые поля из JSON; в `ScenarioKey` попадают только через `from_path_parts`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioKeyFields {
    damage_type: String,
    variation: String,
    #[serde(default)]
    time_factor: String,
    #[serde(default)]
    property_type: String,
    #[serde(default)]
    location: Option<String>,
}

impl TryFrom<ScenarioKeyFields> for ScenarioKey {
    type Error = SlugError;

    fn try_from(fields: ScenarioKeyFields) -> Result<Self, Self::Error> {
        Self::from_path_parts(
            &fields.damage_type,
            &fields.variation,
            &fields.time_factor,
            &fields.property_type,
            fields.location.as_deref(),
        )
    }
}

impl ScenarioKey {
    /// Ключ с дефолтными time factor / property type и без локации
    pub fn new(damage_type: impl Into<String>, variation: impl Into<String>) -> Self {
        Self {
            damage_type: damage_type.into(),
            variation: variation.into(),
            time_factor: DEFAULT_TIME_FACTOR.to_string(),
            property_type: DEFAULT_PROPERTY_TYPE.to_string(),
            location: None,
        }
    }

    pub fn with_time_factor(mut self, time_factor: impl Into<String>) -> Self {
        self.time_factor = time_factor.into();
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = property_type.into();
        self
    }

    /// Локация нормализуется; пустая после нормализации означает "без локации"
    pub fn with_location(mut self, location: &str) -> Self {
        let slug = slugify_location(location);
        self.location = if slug.is_empty() { None } else { Some(slug) };
        self
    }

    /// Разбор legacy slug вида
    /// `<damageType>-<variation>[-<timeFactor>[-<propertyType>[-<location>]]]`.
    ///
    /// Разбиение чисто позиционное по `-`: значение с внутренним дефисом
    /// (`water-damage`, `burst-pipe`) сдвигает все последующие поля.
    /// Формат закрытый: ровно пять полей, пятое (location) забирает
    /// остаток строки вместе с дефисами. Пустые time factor / property type
    /// заменяются дефолтами.
    pub fn parse(slug: &str) -> Result<Self, SlugError> {
        let mut tokens = slug.splitn(MAX_FIELDS, SEPARATOR);

        let damage_type = tokens.next().unwrap_or_default();
        if damage_type.is_empty() {
            return Err(SlugError::EmptyDamageType);
        }

        let variation = match tokens.next() {
            Some(v) if !v.is_empty() => v,
            _ => return Err(SlugError::MissingVariation),
        };

        let mut key = Self::new(damage_type, variation);
        if let Some(time_factor) = tokens.next().filter(|t| !t.is_empty()) {
            key = key.with_time_factor(time_factor);
        }
        if let Some(property_type) = tokens.next().filter(|t| !t.is_empty()) {
            key = key.with_property_type(property_type);
        }
        if let Some(location) = tokens.next() {
            key = key.with_location(location);
        }

        Ok(key)
    }

    /// Сборка ключа из структурированного пути (один сегмент на поле).
    ///
    /// Каждое значение может содержать дефисы, неоднозначности нет.
    pub fn from_path_parts(
        damage_type: &str,
        variation: &str,
        time_factor: &str,
        property_type: &str,
        location: Option<&str>,
    ) -> Result<Self, SlugError> {
        if damage_type.is_empty() {
            return Err(SlugError::EmptyDamageType);
        }
        if variation.is_empty() {
            return Err(SlugError::MissingVariation);
        }

        let mut key = Self::new(damage_type, variation);
        if !time_factor.is_empty() {
            key = key.with_time_factor(time_factor);
        }
        if !property_type.is_empty() {
            key = key.with_property_type(property_type);
        }
        if let Some(location) = location {
            key = key.with_location(location);
        }
        Ok(key)
    }

    pub fn damage_type(&self) -> &str {
        &self.damage_type
    }

    pub fn variation(&self) -> &str {
        &self.variation
    }

    pub fn time_factor(&self) -> &str {
        &self.time_factor
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Канонический legacy-идентификатор:
    /// `damageType-variation-timeFactor-propertyType[-location]`
    pub fn id(&self) -> String {
        let mut id = format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.damage_type,
            self.variation,
            self.time_factor,
            self.property_type,
            sep = SEPARATOR
        );
        if let Some(location) = &self.location {
            id.push(SEPARATOR);
            id.push_str(location);
        }
        id
    }

    /// Структурированный путь: `damageType/variation/timeFactor/propertyType[/location]`
    pub fn path(&self) -> String {
        let mut parts = vec![
            self.damage_type.as_str(),
            self.variation.as_str(),
            self.time_factor.as_str(),
            self.property_type.as_str(),
        ];
        if let Some(location) = &self.location {
            parts.push(location);
        }
        parts.join("/")
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for ScenarioKey {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_defaults() {
        let key = ScenarioKey::parse("flooding-basement").unwrap();
        assert_eq!(key.damage_type(), "flooding");
        assert_eq!(key.variation(), "basement");
        assert_eq!(key.time_factor(), "immediate");
        assert_eq!(key.property_type(), "residential");
        assert_eq!(key.location(), None);
    }

    #[test]
    fn test_parse_all_fields() {
        let key = ScenarioKey::parse("fire-kitchen-now-commercial-brisbane").unwrap();
        assert_eq!(key.damage_type(), "fire");
        assert_eq!(key.variation(), "kitchen");
        assert_eq!(key.time_factor(), "now");
        assert_eq!(key.property_type(), "commercial");
        assert_eq!(key.location(), Some("brisbane"));
    }

    #[test]
    fn test_parse_location_keeps_remainder() {
        let key = ScenarioKey::parse("storm-hail-today-house-gold-coast").unwrap();
        assert_eq!(key.property_type(), "house");
        assert_eq!(key.location(), Some("gold-coast"));
    }

    #[test]
    fn test_parse_hyphenated_values_shift_fields() {
        // Позиционный формат: дефис внутри значения сдвигает поля
        let key = ScenarioKey::parse("water-damage-burst-pipe").unwrap();
        assert_eq!(key.damage_type(), "water");
        assert_eq!(key.variation(), "damage");
        assert_eq!(key.time_factor(), "burst");
        assert_eq!(key.property_type(), "pipe");
        assert_eq!(key.location(), None);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(ScenarioKey::parse(""), Err(SlugError::EmptyDamageType));
        assert_eq!(ScenarioKey::parse("-burst"), Err(SlugError::EmptyDamageType));
        assert_eq!(ScenarioKey::parse("water"), Err(SlugError::MissingVariation));
        assert_eq!(ScenarioKey::parse("water-"), Err(SlugError::MissingVariation));
    }

    #[test]
    fn test_parse_empty_optional_segments_use_defaults() {
        let key = ScenarioKey::parse("water-leak--").unwrap();
        assert_eq!(key.time_factor(), "immediate");
        assert_eq!(key.property_type(), "residential");
        assert_eq!(key.location(), None);
    }

    #[test]
    fn test_location_normalized() {
        let key = ScenarioKey::new("water-damage", "burst-pipe").with_location("  Gold   Coast ");
        assert_eq!(key.location(), Some("gold-coast"));
        assert_eq!(key.id(), "water-damage-burst-pipe-immediate-residential-gold-coast");

        let key = ScenarioKey::new("water-damage", "burst-pipe").with_location("   ");
        assert_eq!(key.location(), None);
    }

    #[test]
    fn test_structured_path_keeps_hyphens() {
        let key = ScenarioKey::new("water-damage", "burst-pipe")
            .with_time_factor("within-hours")
            .with_property_type("owner-occupied")
            .with_location("Gold Coast");
        assert_eq!(
            key.path(),
            "water-damage/burst-pipe/within-hours/owner-occupied/gold-coast"
        );

        let rebuilt = ScenarioKey::from_path_parts(
            "water-damage",
            "burst-pipe",
            "within-hours",
            "owner-occupied",
            Some("gold-coast"),
        )
        .unwrap();
        assert_eq!(rebuilt, key);
    }

    #[test]
    fn test_from_path_parts_rejects_empty() {
        assert_eq!(
            ScenarioKey::from_path_parts("", "x", "immediate", "residential", None),
            Err(SlugError::EmptyDamageType)
        );
        assert_eq!(
            ScenarioKey::from_path_parts("fire-damage", "", "immediate", "residential", None),
            Err(SlugError::MissingVariation)
        );
    }

    #[test]
    fn test_display_and_from_str() {
        let key: ScenarioKey = "mould-attic-spreading-rental".parse().unwrap();
        assert_eq!(key.to_string(), "mould-attic-spreading-rental");
    }

    #[test]
    fn test_serde_camel_case() {
        let key = ScenarioKey::new("fire-damage", "kitchen-fire");
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["damageType"], "fire-damage");
        assert_eq!(json["timeFactor"], "immediate");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_deserialize_validates_and_normalizes() {
        let key: ScenarioKey = serde_json::from_str(
            r#"{"damageType":"water-damage","variation":"burst-pipe","location":"Gold Coast"}"#,
        )
        .unwrap();
        assert_eq!(key.time_factor(), "immediate");
        assert_eq!(key.property_type(), "residential");
        assert_eq!(key.location(), Some("gold-coast"));

        let roundtrip: ScenarioKey = serde_json::from_value(serde_json::to_value(&key).unwrap()).unwrap();
        assert_eq!(roundtrip, key);

        let empty = serde_json::from_str::<ScenarioKey>(r#"{"damageType":"","variation":"x"}"#);
        assert!(empty.unwrap_err().to_string().contains("damage type segment is empty"));
    }

    proptest! {
        #[test]
        fn legacy_id_roundtrips_for_hyphen_free_fields(
            damage in "[a-z]{1,12}",
            variation in "[a-z]{1,12}",
            time in "[a-z]{1,12}",
            property in "[a-z]{1,12}",
            location in "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}",
        ) {
            let key = ScenarioKey::new(damage, variation)
                .with_time_factor(time)
                .with_property_type(property)
                .with_location(&location);
            let parsed = ScenarioKey::parse(&key.id()).unwrap();
            prop_assert_eq!(parsed, key);
        }

        #[test]
        fn structured_path_roundtrips_any_hyphenation(
            damage in "[a-z]{1,6}(-[a-z]{1,6}){0,2}",
            variation in "[a-z]{1,6}(-[a-z]{1,6}){0,2}",
            time in "[a-z]{1,6}(-[a-z]{1,6}){0,1}",
            property in "[a-z]{1,6}(-[a-z]{1,6}){0,1}",
        ) {
            let key = ScenarioKey::new(damage, variation)
                .with_time_factor(time)
                .with_property_type(property);
            let path = key.path();
            let parts: Vec<&str> = path.split('/').collect();
            prop_assert_eq!(parts.len(), 4);
            let rebuilt = ScenarioKey::from_path_parts(parts[0], parts[1], parts[2], parts[3], None).unwrap();
            prop_assert_eq!(rebuilt, key);
        }
    }
}
