//! Чтение строк входного файла.
//!
//! Вход читается построчно в упорядоченную последовательность строк.
//! Никакой нормализации переводов строк сверх стандартной: `\n` и
//! `\r\n` отбрасываются, содержимое строк не трогается.

use std::io::{BufRead, BufReader, Read};

use crate::error::ConvertResult;

/// Читает все строки из источника в упорядоченный вектор.
///
/// Источник оборачивается в [`BufReader`]. Пустые строки сохраняются —
/// их отбрасывает следующий этап конвейера, фильтрация.
///
/// # Ошибки
///
/// Любая ошибка чтения фатальна: частично прочитанные строки не
/// возвращаются.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// let lines = bondrec::reader::read_lines(Cursor::new("a\nb\n")).unwrap();
/// assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn read_lines<R: Read>(reader: R) -> ConvertResult<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut lines = Vec::new();

    for line in reader.lines() {
        lines.push(line?);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_ordered_lines() {
        let input = "F1234 SURETY CO\n100 MAIN ST\nPAGE 1\n";
        let lines = read_lines(Cursor::new(input)).unwrap();

        assert_eq!(
            lines,
            vec![
                "F1234 SURETY CO".to_string(),
                "100 MAIN ST".to_string(),
                "PAGE 1".to_string()
            ]
        );
    }

    #[test]
    fn preserves_empty_lines() {
        let lines = read_lines(Cursor::new("a\n\nb\n")).unwrap();
        assert_eq!(lines, vec!["a".to_string(), String::new(), "b".to_string()]);
    }

    #[test]
    fn handles_crlf() {
        let lines = read_lines(Cursor::new("a\r\nb\r\n")).unwrap();
        assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_input() {
        let lines = read_lines(Cursor::new("")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn missing_trailing_newline() {
        let lines = read_lines(Cursor::new("a\nb")).unwrap();
        assert_eq!(lines.len(), 2);
    }
}
