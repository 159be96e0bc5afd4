/// Метаданные UseCase для идентификации в каталоге и логах
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "whos_first_scenarios")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для каталога
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_whos_first_scenarios"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
