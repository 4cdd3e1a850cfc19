//! Конвейер конвертации: от сырых строк к итоговым записям.
//!
//! Один линейный проход без состояния: фильтрация, нормализация,
//! склейка пар, две перестановки разделителей. Каждый этап принимает
//! последовательность строк и отдаёт новую; никакого разделяемого
//! изменяемого состояния между этапами нет.

use std::io::{Read, Write};

use crate::{
    boundary::{SubstringMarker, TrailingNumber},
    collapse::collapse_pairs,
    config::PipelineConfig,
    error::ConvertResult,
    filter::filter_lines,
    normalize::{to_semicolons, trim_space_from_lines},
    reader::read_lines,
    rewrite::{change_address_delimiter, change_delimiter},
    writer::LineWriter,
};

/// Подстрока, отмечающая конец bond-секции в исходном формате
/// (разделитель страховщика и агента).
pub const BOND_SECTION_MARKER: &str = "/";

/// Основной разделитель итоговых записей.
pub const FIELD_SEPARATOR: &str = ";";

/// Разделитель адресной секции.
pub const ADDRESS_SEPARATOR: &str = " ";

/// Прогоняет сырые строки через весь конвейер.
///
/// Этапы, по порядку:
///
/// 1. фильтрация по первому токену ([`filter_lines`]);
/// 2. схлопывание пробелов ([`trim_space_from_lines`]);
/// 3. перевод на `;`-разделитель ([`to_semicolons`]);
/// 4. склейка чётных строк с нечётными ([`collapse_pairs`]);
/// 5. переразметка bond-секции ([`change_delimiter`]);
/// 6. переразметка адресной секции ([`change_address_delimiter`]).
///
/// # Ошибки
///
/// Любая ошибка поиска границы в любой записи прерывает весь прогон:
/// конвертация — всё или ничего, без поштучного пропуска записей.
///
/// Обратная конвертация не предполагается: формат теряет информацию
/// (отброшенные строки, схлопнутые пробелы), round-trip закона нет.
pub fn convert_lines(lines: &[String], config: &PipelineConfig) -> ConvertResult<Vec<String>> {
    let kept = filter_lines(lines, &config.bond_prefixes);
    let trimmed = trim_space_from_lines(&kept);
    let records = to_semicolons(&trimmed);
    let collapsed = collapse_pairs(&records, config.max_address_length);

    let marker = SubstringMarker::new(BOND_SECTION_MARKER);
    let rewritten = change_delimiter(
        &collapsed,
        config.bond_field_offset,
        &marker,
        FIELD_SEPARATOR,
        ADDRESS_SEPARATOR,
    )?;

    change_address_delimiter(&rewritten, &TrailingNumber, FIELD_SEPARATOR, ADDRESS_SEPARATOR)
}

/// Конвертирует входной поток в выходной, возвращая число записей.
///
/// Чтение и трансформация выполняются целиком до первой записи в
/// вывод, поэтому при ошибке в вывод не попадает ничего.
pub fn convert<R: Read, W: Write>(
    input: R,
    output: W,
    config: &PipelineConfig,
) -> ConvertResult<usize> {
    let lines = read_lines(input)?;
    let records = convert_lines(&lines, config)?;

    let mut writer = LineWriter::new(output);
    writer.write_all(&records)?;
    writer.flush()?;

    Ok(writer.records_written())
}
