//! Фильтрация строк входного файла.
//!
//! Из свободного текста вложения остаются только строки, первый токен
//! которых похож на bond-номер (содержит один из префиксов) либо
//! является целым числом. Всё остальное — заголовки, колонтитулы,
//! пустые строки — отбрасывается.

/// Проверяет, является ли первый пробельно-разделённый токен строки
/// десятичным целым числом.
///
/// # Пример
///
/// ```
/// use bondrec::filter::first_word_is_number;
///
/// assert!(first_word_is_number("123 MAIN ST"));
/// assert!(!first_word_is_number("F1234 100 MAIN ST"));
/// ```
#[must_use]
pub fn first_word_is_number(line: &str) -> bool {
    let first = line.split(' ').next().unwrap_or("");
    first.parse::<i64>().is_ok()
}

/// Проверяет, содержит ли первый токен хотя бы одну из подстрок.
#[must_use]
pub fn first_word_contains(word: &str, substrings: &[String]) -> bool {
    is_match(word, substrings)
}

/// Возвращает `true`, если любая из подстрок содержится в `s`.
#[must_use]
pub fn is_match(s: &str, substrings: &[String]) -> bool {
    substrings.iter().any(|sub| s.contains(sub.as_str()))
}

/// Отбирает строки, похожие на bond-записи.
///
/// Строка проходит фильтр, если её первый токен содержит один из
/// префиксов ИЛИ парсится как целое число. Обе проверки применяются
/// независимо: строка, удовлетворяющая обеим, добавляется дважды.
/// С префиксами по умолчанию это недостижимо (ни один из них не
/// является числом), но поведение сохранено и закреплено тестом.
#[must_use]
pub fn filter_lines(lines: &[String], bond_prefixes: &[String]) -> Vec<String> {
    let mut kept = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let first = line.split(' ').next().unwrap_or("");
        if first_word_contains(first, bond_prefixes) {
            kept.push(line.to_string());
        }
        if first_word_is_number(line) {
            kept.push(line.to_string());
        }
    }

    kept
}
