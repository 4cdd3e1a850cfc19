//! Нормализация токенов отфильтрованных строк.
//!
//! Два прохода: схлопывание повторяющихся пробелов между токенами
//! и замена пробельного разделителя на точку с запятой.

/// Схлопывает повторяющиеся пробелы внутри каждой строки.
///
/// Пустые токены отбрасываются, оставшиеся соединяются одиночными
/// пробелами. Операция идемпотентна: повторное применение к уже
/// нормализованным строкам ничего не меняет.
#[must_use]
pub fn trim_space_from_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| l.split(' ').filter(|w| !w.is_empty()).map(str::trim).collect::<Vec<_>>().join(" "))
        .collect()
}

/// Заменяет пробельные разделители на точки с запятой.
///
/// После [`trim_space_from_lines`] каждый токен отделён одиночным
/// пробелом, так что замена даёт плоскую `;`-разделённую запись.
#[must_use]
pub fn to_semicolons(lines: &[String]) -> Vec<String> {
    lines.iter().map(|l| l.split(' ').collect::<Vec<_>>().join(";")).collect()
}
