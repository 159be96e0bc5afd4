//! Статические таблицы контента "Who's First?".
//!
//! Все данные `'static`, инициализируются один раз и никогда не меняются,
//! поэтому читаются из любого потока без синхронизации. Поиск по damage type
//! идет через ленивый индекс `DAMAGE_TYPE_INDEX`.
//!
//! Шаблоны используют плейсхолдеры `{property}`, `{variation}`, `{damage}`,
//! их подставляет `fill`.

use maplit::{hashmap, hashset};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

// ─── Структуры ──────────────────────────────────────────────────────────────

/// Три денежных диапазона одного тарифного уровня
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBand {
    pub with_us: &'static str,
    pub without_us: &'static str,
    pub savings: &'static str,
}

/// Жилой уровень и "все остальное" (commercial, industrial, strata, ...)
#[derive(Debug, Clone, Copy)]
pub struct CostTiers {
    pub residential: CostBand,
    pub other: CostBand,
}

/// Авторский контент одного damage type
#[derive(Debug)]
pub struct DamageTypeEntry {
    pub slug: &'static str,
    pub variations: &'static [&'static str],
    pub time_factors: &'static [&'static str],
    pub property_types: &'static [&'static str],
    /// variation → шаблон ситуации (точное совпадение)
    pub situations: &'static [(&'static str, &'static str)],
    /// Шаблон ситуации уровня damage type
    pub default_situation: &'static str,
    pub why_us_first: &'static [&'static str],
    /// (who, consequence)
    pub wrong_first_calls: &'static [(&'static str, &'static str)],
    pub health_safety: &'static [&'static str],
    /// (question, answer)
    pub faqs: &'static [(&'static str, &'static str)],
    pub cost: CostTiers,
}

impl DamageTypeEntry {
    pub fn situation_for(&self, variation: &str) -> Option<&'static str> {
        self.situations
            .iter()
            .find(|(v, _)| *v == variation)
            .map(|(_, template)| *template)
    }

    /// Количество комбинаций variation × time factor × property type
    pub fn combinations(&self) -> usize {
        self.variations.len() * self.time_factors.len() * self.property_types.len()
    }
}

// ─── Damage types ───────────────────────────────────────────────────────────

pub static DAMAGE_TYPES: &[DamageTypeEntry] = &[
    DamageTypeEntry {
        slug: "water-damage",
        variations: &[
            "burst-pipe",
            "flooding",
            "roof-leak",
            "bathroom-leak",
            "kitchen-flood",
            "basement-flood",
            "washing-machine-overflow",
            "hot-water-burst",
            "storm-water-ingress",
            "sewage-backup",
            "pool-leak",
            "irrigation-damage",
        ],
        time_factors: &["immediate", "within-hours", "next-day", "after-weekend"],
        property_types: &["residential", "commercial", "industrial", "strata"],
        situations: &[
            (
                "burst-pipe",
                "A pipe has burst in your {property} property, causing water to flood multiple rooms. The water is spreading quickly and you're not sure whether to turn off the mains, call a plumber, or contact insurance first.",
            ),
            (
                "flooding",
                "Your {property} is experiencing significant flooding. Water levels are rising and you need immediate help but don't know who handles what - emergency services, insurance, or restoration.",
            ),
            (
                "sewage-backup",
                "Sewage has backed up into your {property} property. The water is contaminated, the smell is getting worse and you don't know whether to call a plumber, a cleaner or your insurer.",
            ),
        ],
        default_situation: "Your {property} property has {variation} and water is spreading into floors and walls. You're not sure whether to stop the source, call a tradesperson, or contact insurance first.",
        why_us_first: &[
            "We stop water spread while preserving insurance evidence",
            "We prevent mould growth with immediate moisture control",
            "We identify all affected areas including hidden moisture",
        ],
        wrong_first_calls: &[
            (
                "Plumber",
                "Fixes pipe but misses drying requirements, mould risk increases, insurance documentation incomplete",
            ),
            (
                "Insurance Company",
                "Delays mitigation while claim processes, damage worsens, higher restoration costs",
            ),
            (
                "General Cleaner",
                "Surface cleaning only, moisture trapped in walls, guaranteed mould growth",
            ),
        ],
        health_safety: &[
            "Electrical hazards from water contact",
            "Slip and fall risks",
            "Contamination categories (clean, grey, black water)",
            "Mould growth begins within 24-48 hours",
            "Structural integrity concerns",
        ],
        faqs: &[(
            "Should I turn off the water mains?",
            "Call us first - we'll guide you through emergency steps while en route. Sometimes turning off water can affect documentation needs or fire suppression systems. We'll tell you exactly what to do.",
        )],
        cost: CostTiers {
            residential: CostBand {
                with_us: "$3,000-$8,000",
                without_us: "$8,000-$25,000",
                savings: "$5,000-$17,000",
            },
            other: CostBand {
                with_us: "$10,000-$50,000",
                without_us: "$50,000-$200,000",
                savings: "$40,000-$150,000",
            },
        },
    },
    DamageTypeEntry {
        slug: "fire-damage",
        variations: &[
            "kitchen-fire",
            "electrical-fire",
            "candle-fire",
            "garage-fire",
            "wildfire",
            "smoke-damage-only",
            "partial-burn",
            "total-loss",
        ],
        time_factors: &["during-fire", "immediately-after", "next-day", "week-later"],
        property_types: &["home", "business", "warehouse", "retail"],
        situations: &[
            (
                "kitchen-fire",
                "A kitchen fire has damaged your {property}. The fire is out but there's smoke damage throughout, water damage from firefighting, and you're overwhelmed about next steps.",
            ),
            (
                "electrical-fire",
                "An electrical fire has damaged your {property}. The power is off, wiring may be compromised and smoke has spread through rooms that never saw a flame.",
            ),
        ],
        default_situation: "Your {property} has been hit by {variation}. Even with the flames out, smoke, soot and firefighting water keep causing damage and you're unsure where to start.",
        why_us_first: &[
            "We address smoke, soot, water, and structural damage simultaneously",
            "We prevent permanent smoke damage with immediate action",
            "We coordinate with fire department reports for insurance",
        ],
        wrong_first_calls: &[
            (
                "General Contractor",
                "Starts repairs before proper smoke remediation, smells return, work needs redoing",
            ),
            (
                "Cleaning Service",
                "Spreads soot deeper into materials, permanent staining, improper chemical use",
            ),
            (
                "Insurance Alone",
                "No emergency mitigation, smoke damage becomes permanent, claim value reduced",
            ),
        ],
        health_safety: &[
            "Toxic smoke residue",
            "Structural stability risks",
            "Electrical system damage",
            "Asbestos disturbance in older properties",
            "Carbon monoxide concerns",
        ],
        faqs: &[(
            "Is it safe to enter my property after a fire?",
            "Never enter without professional assessment. Structural damage, toxic residues, and electrical hazards may be present. We conduct safety assessments and coordinate with fire departments for safe entry.",
        )],
        cost: CostTiers {
            residential: CostBand {
                with_us: "$10,000-$30,000",
                without_us: "$25,000-$70,000",
                savings: "$15,000-$40,000",
            },
            other: CostBand {
                with_us: "$50,000-$200,000",
                without_us: "$150,000-$500,000",
                savings: "$100,000-$300,000",
            },
        },
    },
    DamageTypeEntry {
        slug: "mould-growth",
        variations: &[
            "black-mould",
            "bathroom-mould",
            "ceiling-mould",
            "wall-cavity-mould",
            "under-floor-mould",
            "attic-mould",
            "hvac-mould",
            "hidden-mould",
        ],
        time_factors: &["just-discovered", "spreading", "health-symptoms", "long-term"],
        property_types: &["rental", "owner-occupied", "commercial", "school"],
        situations: &[(
            "black-mould",
            "You've discovered black mould in your {property}. Family members are experiencing health symptoms and you need to know if it's safe to stay and who can handle this properly.",
        )],
        default_situation: "You've found {variation} in your {property}. You're worried about the health effects and don't know who can remove it safely and fix the moisture that caused it.",
        why_us_first: &[
            "We ensure safe containment to prevent spore spread",
            "We identify and fix the moisture source, not just visible mould",
            "We provide health-compliant remediation with proper testing",
        ],
        wrong_first_calls: &[
            (
                "Regular Cleaner",
                "Disturbs spores causing spread, no moisture source fix, mould returns worse",
            ),
            (
                "Handyman",
                "Improper removal techniques, health risks increase, insurance won't cover DIY attempts",
            ),
            (
                "Ignore It",
                "Health deteriorates, structural damage worsens, property value plummets",
            ),
        ],
        health_safety: &[
            "Respiratory health impacts",
            "Allergic reactions",
            "Toxic mould species identification",
            "Immunocompromised individual risks",
            "Proper containment requirements",
        ],
        faqs: &[(
            "Can I stay in my property with mould present?",
            "This depends on the mould type, extent, and occupant health. We provide immediate air quality testing and health risk assessment to determine safety. Never attempt DIY removal - it can make things worse.",
        )],
        cost: CostTiers {
            residential: CostBand {
                with_us: "$2,000-$6,000",
                without_us: "$5,000-$15,000",
                savings: "$3,000-$9,000",
            },
            other: CostBand {
                with_us: "$5,000-$30,000",
                without_us: "$20,000-$80,000",
                savings: "$15,000-$50,000",
            },
        },
    },
    DamageTypeEntry {
        slug: "storm-damage",
        variations: &[
            "roof-damage",
            "tree-fall",
            "window-damage",
            "structural-damage",
            "fence-damage",
            "car-port-collapse",
            "power-surge",
            "hail-damage",
        ],
        time_factors: &["during-storm", "after-storm", "multiple-storms", "season-end"],
        property_types: &["house", "apartment", "office", "factory"],
        situations: &[
            (
                "roof-damage",
                "A storm has damaged your {property} roof. Rain is coming in, and you need emergency repairs but also proper insurance documentation.",
            ),
            (
                "tree-fall",
                "A tree has come down on your {property} during the storm. Part of the building is exposed, there may be structural damage and you don't know who to call to make it safe.",
            ),
        ],
        default_situation: "A storm has left your {property} with {variation}. The building is exposed to the weather and you need emergency repairs as well as proper insurance documentation.",
        why_us_first: &[
            "We provide immediate weatherproofing to prevent further damage",
            "We document all damage vectors for complete insurance claims",
            "We coordinate emergency repairs with permanent restoration",
        ],
        wrong_first_calls: &[
            (
                "Roofer Only",
                "Fixes roof but misses interior water damage, mould grows hidden, claim incomplete",
            ),
            (
                "Tree Service",
                "Removes tree but doesn't address structural damage, safety risks remain",
            ),
            (
                "Tarp It Yourself",
                "Improper installation, water still enters, insurance may deny claim for DIY attempts",
            ),
        ],
        health_safety: &[
            "Structural collapse risks",
            "Electrical hazards from damaged wiring",
            "Sharp debris hazards",
            "Contaminated flood water",
            "Unstable trees and branches",
        ],
        faqs: &[(
            "Can I tarp my roof myself?",
            "DIY repairs can void insurance and create safety risks. Our emergency tarping is insurance-approved, professionally installed, and documented properly for your claim. We're on the way - don't risk injury or claim denial.",
        )],
        cost: CostTiers {
            residential: CostBand {
                with_us: "$5,000-$15,000",
                without_us: "$12,000-$35,000",
                savings: "$7,000-$20,000",
            },
            other: CostBand {
                with_us: "$20,000-$100,000",
                without_us: "$60,000-$250,000",
                savings: "$40,000-$150,000",
            },
        },
    },
];

static DAMAGE_TYPE_INDEX: Lazy<HashMap<&'static str, &'static DamageTypeEntry>> =
    Lazy::new(|| DAMAGE_TYPES.iter().map(|entry| (entry.slug, entry)).collect());

/// Авторская запись по slug damage type
pub fn damage_type(slug: &str) -> Option<&'static DamageTypeEntry> {
    DAMAGE_TYPE_INDEX.get(slug).copied()
}

// ─── Общий уровень (generic tier) ───────────────────────────────────────────

/// Ситуация для неизвестной пары damage type / variation
pub const GENERIC_SITUATION: &str = "Your {property} is experiencing {variation} related to {damage}. You need immediate help but aren't sure who to call first for the best outcome.";

pub const GENERIC_WRONG_FIRST_CALLS: &[(&str, &str)] = &[
    (
        "Single-Trade Specialist",
        "Fixes the visible {damage} problem but misses hidden damage, secondary losses and insurance documentation",
    ),
    (
        "Insurance Company",
        "Claim paperwork starts but nobody stops the {damage} spreading, costs climb while you wait",
    ),
    (
        "Do It Yourself",
        "DIY work can make the {damage} worse and gives insurers a reason to reduce or deny the claim",
    ),
];

pub const GENERIC_HEALTH_SAFETY: &[&str] = &[
    "Hidden structural damage from {damage}",
    "Electrical hazards in affected areas",
    "Contamination and hygiene risks",
    "Slip, trip and sharp debris hazards",
    "Air quality concerns during clean-up",
];

/// Заглушки, когда damage type не найден в таблице стоимости
pub const GENERIC_COST_BAND: CostBand = CostBand {
    with_us: "Minimized",
    without_us: "Significant",
    savings: "Substantial",
};

pub const BASE_REASONS: &[&str] = &[
    "We understand the complete picture - not just one aspect of the damage",
    "We document everything correctly for insurance from minute one",
    "We coordinate all necessary trades in the optimal sequence",
    "We prevent secondary damage that others might miss",
    "We know what your insurance policy actually covers",
    "We work 24/7 because disasters don't wait for business hours",
];

/// Шаги процесса со 2-го по 8-й (первый зависит от срочности)
pub const PROCESS_STEPS: &[&str] = &[
    "2. Safety assessment and hazard mitigation",
    "3. Comprehensive damage documentation for insurance",
    "4. Emergency mitigation to prevent further damage",
    "5. Insurance liaison and claim maximization",
    "6. Coordinate all necessary specialists",
    "7. Project management through completion",
    "8. Quality assurance and warranty",
];

pub const URGENT_FIRST_STEP: &str = "1. Immediate 24/7 response team dispatch";
pub const SCHEDULED_FIRST_STEP: &str = "1. Priority scheduling within 2 hours";

/// Шесть фиксированных окон, одинаковые для всех damage type
pub const TIMELINE_CRITICAL: [&str; 6] = [
    "0-1 Hour: Critical - Document damage, stop spread, ensure safety",
    "1-6 Hours: Urgent - Begin mitigation, notify insurance, prevent secondary damage",
    "6-24 Hours: Important - Full assessment, drying begins, claim filed",
    "24-48 Hours: Monitoring - Moisture tracking, mould prevention, repair planning",
    "48-72 Hours: Stabilization - Ensure drying targets met, coordinate repairs",
    "3-7 Days: Restoration - Begin rebuild, maintain documentation, quality control",
];

pub const INSURANCE_INSIGHTS: &[&str] = &[
    "Most policies require mitigation within 24-48 hours",
    "Proper documentation from hour one doubles average claim payout",
    "Insurance companies prefer approved restoration companies",
    "Secondary damage (like mould) may not be covered if primary damage isn't addressed quickly",
    "We speak insurance language - technical terms that maximize coverage",
    "Our documentation has never had a claim rejected",
    "We identify coverage you didn't know you had",
    "We prevent claim delays with proper procedures",
];

pub const GENERIC_FAQS: &[(&str, &str)] = &[
    (
        "Why not call my insurance company first?",
        "Insurance companies process claims, they don't stop damage. Every hour of delay while waiting for an adjuster means more damage, higher costs, and potential claim complications. We stop the damage immediately AND handle insurance coordination.",
    ),
    (
        "Can't I just call a specialist directly?",
        "Specialists see only their piece of the puzzle. A plumber fixes pipes but misses moisture in walls. A cleaner removes water but doesn't prevent mould. We see the complete picture and coordinate all specialists in the right order.",
    ),
    (
        "Will calling you first cost me more?",
        "Actually, it saves you money. We prevent secondary damage, maximize insurance coverage, and eliminate redundant work. Our coordinated approach typically saves 40-60% compared to calling multiple contractors separately.",
    ),
    (
        "How quickly can you respond?",
        "We maintain 24/7 emergency response teams. For critical situations, we're typically on-site within 60 minutes. Our first priority is stopping damage spread, then we handle everything else.",
    ),
    (
        "Do you work with all insurance companies?",
        "Yes, we work with every insurance company in Australia. We speak their language, know their requirements, and have never had proper documentation rejected. We're your advocate in the claims process.",
    ),
];

/// Шаблоны связанных сценариев
pub const RELATED_TEMPLATES: &[&str] = &[
    "{damage}-prevention-guide",
    "insurance-claims-{damage}",
    "emergency-response-{damage}",
    "{damage}-health-risks",
    "{damage}-cost-guide",
];

pub const KEYWORD_TEMPLATES: &[&str] = &[
    "who to call first {variation}",
    "{variation} emergency response",
    "{damage} who to contact",
    "first call {damage}",
    "emergency {variation} help",
    "{property} {variation} who to call",
    "{variation} insurance claim help",
    "immediate {variation} response",
    "24 hour {variation} help",
    "{variation} damage what to do",
];

pub const LOCATION_KEYWORD_TEMPLATES: &[&str] = &[
    "{location} {variation} emergency",
    "who to call {variation} {location}",
    "{location} disaster recovery first call",
    "{location} {damage} response",
];

// ─── Словари time factor / property type ────────────────────────────────────

/// time factor → фраза для вопроса
pub static TIME_CONTEXT: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    hashmap! {
        "immediate" => "happening right now",
        "within-hours" => "just happened",
        "next-day" => "discovered this morning",
        "after-weekend" => "found after being away",
        "during-fire" => "happening right now",
        "immediately-after" => "just happened",
        "week-later" => "discovered a week later",
        "just-discovered" => "just discovered",
        "spreading" => "spreading fast",
        "health-symptoms" => "making people sick",
        "long-term" => "been there for months",
        "during-storm" => "happening right now",
        "after-storm" => "just happened",
        "multiple-storms" => "after several storms",
        "season-end" => "found at the end of storm season",
    }
});

/// time factor, при которых первым шагом идет немедленный выезд
pub static URGENT_TIME_FACTORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    hashset! {
        "immediate",
        "within-hours",
        "during-fire",
        "immediately-after",
        "during-storm",
    }
});

/// property type жилого тарифного уровня (точное совпадение строки)
pub static RESIDENTIAL_PROPERTY_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| hashset! { "residential", "home", "house" });

/// Принудительная инициализация ленивых таблиц
pub fn init() {
    Lazy::force(&DAMAGE_TYPE_INDEX);
    Lazy::force(&TIME_CONTEXT);
    Lazy::force(&URGENT_TIME_FACTORS);
    Lazy::force(&RESIDENTIAL_PROPERTY_TYPES);
}

// ─── Подстановка ────────────────────────────────────────────────────────────

/// Заменяет `{name}` на значение из `vars` за один проход слева направо.
///
/// Подставленные значения повторно не сканируются; неизвестные
/// плейсхолдеры и незакрытая `{` остаются как есть.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        let name = &tail[1..close];
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    // rest начинается с незакрытой `{` либо не содержит плейсхолдеров
    out.push_str(rest);
    out
}
