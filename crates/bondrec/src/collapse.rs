//! Склейка пар строк в единые записи.
//!
//! Входной формат чередует строку идентификатора и строку-продолжение
//! с адресом. Склейка разбивает последовательность по чётности индекса
//! и соединяет каждую чётную строку со следующей нечётной.

/// Склеивает чётные строки с соответствующими нечётными.
///
/// Для индекса `i` пара `even[i] + ";" + odd[i]` попадает в вывод,
/// только если `i + 2 < even.len()` (хвостовые пары исключаются
/// намеренно) и нечётная строка с индексом `i + 1` короче
/// `max_address_length`. Это эвристика «продолжение похоже на короткий
/// адрес», а не общий алгоритм: не прошедшие проверку пары молча
/// отбрасываются.
///
/// # Пример
///
/// ```
/// use bondrec::collapse::collapse_pairs;
///
/// let lines: Vec<String> =
///     ["0", "1", "2", "3", "4", "5"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(collapse_pairs(&lines, 60), vec!["0;1".to_string()]);
/// ```
#[must_use]
pub fn collapse_pairs(lines: &[String], max_address_length: usize) -> Vec<String> {
    let mut even = Vec::new();
    let mut odd = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if i % 2 == 0 {
            even.push(line.as_str());
        } else {
            odd.push(line.as_str());
        }
    }

    let mut collapsed = Vec::new();
    for i in 0..even.len() {
        // The original bound is `i + 1 < even.len() - 1`; written additively
        // so an empty input cannot underflow.
        if i + 2 < even.len() && odd[i + 1].len() < max_address_length {
            collapsed.push(format!("{};{}", even[i], odd[i]));
        }
    }

    collapsed
}
