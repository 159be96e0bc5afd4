use serde::{Deserialize, Serialize};

/// Готовый контент страницы сценария "Who's First?".
///
/// Производное значение: полностью вычисляется из `ScenarioKey`
/// и статических таблиц, после создания не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioContent {
    /// Legacy-идентификатор сценария (slug)
    pub id: String,
    /// Структурированный путь (один сегмент на поле)
    pub path: String,
    pub title: String,
    pub question: String,
    pub meta_description: String,
    pub situation: String,
    pub why_us_first: Vec<String>,
    pub wrong_first_calls: Vec<WrongFirstCall>,
    pub our_process: Vec<String>,
    /// Всегда ровно 6 временных окон
    pub timeline_critical: Vec<String>,
    pub insurance_insights: Vec<String>,
    pub health_safety: Vec<String>,
    pub cost_impact: CostImpact,
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
    pub related_scenarios: Vec<String>,
    pub search_keywords: Vec<String>,
}

/// Ошибочный первый звонок: кому позвонили и чем это кончилось
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongFirstCall {
    pub who: String,
    pub consequence: String,
}

/// Денежные диапазоны: с нами / без нас / экономия
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostImpact {
    pub with_us: String,
    pub without_us: String,
    pub savings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub situation: String,
    pub action: String,
    pub result: String,
}
