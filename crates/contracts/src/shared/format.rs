/// Человекочитаемая форма токена: `burst-pipe` → `Burst Pipe`.
///
/// Единственная функция форматирования для заголовков, вопросов,
/// ключевых слов и кейсов. Каждый кусок между `-` получает заглавную
/// первую букву, остальные символы не трогаются.
///
/// # Примеры
/// ```
/// use contracts::shared::format::display_name;
/// assert_eq!(display_name("black-mould"), "Black Mould");
/// assert_eq!(display_name("flooding"), "Flooding");
/// ```
pub fn display_name(token: &str) -> String {
    token
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Та же форма в нижнем регистре, для SEO-фраз: `burst-pipe` → `burst pipe`.
pub fn display_name_lower(token: &str) -> String {
    display_name(token).to_lowercase()
}

/// Нормализация локации в slug: нижний регистр, пробелы → `-`.
///
/// Серии пробельных символов схлопываются в один дефис, края обрезаются.
pub fn slugify_location(location: &str) -> String {
    location
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("black-mould"), "Black Mould");
        assert_eq!(display_name("flooding"), "Flooding");
        assert_eq!(display_name("washing-machine-overflow"), "Washing Machine Overflow");
        assert_eq!(display_name("hvac-mould"), "Hvac Mould");
    }

    #[test]
    fn test_display_name_keeps_tail_case() {
        // Only the first letter of each piece changes
        assert_eq!(display_name("gold-coast"), "Gold Coast");
        assert_eq!(display_name("mcKay"), "McKay");
    }

    #[test]
    fn test_display_name_empty_pieces() {
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("a--b"), "A  B");
    }

    #[test]
    fn test_display_name_lower() {
        assert_eq!(display_name_lower("burst-pipe"), "burst pipe");
        assert_eq!(display_name_lower("water-damage"), "water damage");
    }

    #[test]
    fn test_slugify_location() {
        assert_eq!(slugify_location("Gold Coast"), "gold-coast");
        assert_eq!(slugify_location("  Sydney   CBD "), "sydney-cbd");
        assert_eq!(slugify_location("brisbane"), "brisbane");
        assert_eq!(slugify_location(""), "");
    }
}
