//! Хирургическая перестановка разделителей внутри записей.
//!
//! После склейки запись — плоская `;`-разделённая последовательность
//! токенов. Два прохода переразмечают её: первый отделяет
//! bond-идентификатор от средней секции, второй переводит адресную
//! часть на пробельный разделитель.

use crate::{
    boundary::FieldBoundary,
    error::{ConvertError, ConvertResult},
};

/// Переразмечает bond-секцию каждой записи.
///
/// Запись разбивается по `from_sep`; политика `boundary` находит
/// токен-границу (в формате по умолчанию — первый токен с `/`).
/// Результат собирается как:
///
/// ```text
/// tokens[..=start_index] (from_sep) ⸱ " " ⸱
/// tokens[start_index+1..matched] (to_sep) ⸱ from_sep ⸱
/// tokens[matched..] (from_sep)
/// ```
///
/// # Ошибки
///
/// - [`ConvertError::BondBoundaryNotFound`], если граница не найдена;
/// - [`ConvertError::MarkerBeforeOffset`], если граница лежит внутри
///   зоны bond-идентификатора (`matched <= start_index`).
///
/// Любая ошибка фатальна для всего прогона.
pub fn change_delimiter<B: FieldBoundary>(
    lines: &[String],
    start_index: usize,
    boundary: &B,
    from_sep: &str,
    to_sep: &str,
) -> ConvertResult<Vec<String>> {
    let mut rewritten = Vec::with_capacity(lines.len());

    for line in lines {
        let tokens: Vec<&str> = line.split(from_sep).collect();

        let matched = boundary
            .boundary_index(&tokens)
            .ok_or_else(|| ConvertError::BondBoundaryNotFound { record: line.clone() })?;
        if matched <= start_index {
            return Err(ConvertError::MarkerBeforeOffset {
                index: matched,
                offset: start_index,
                record: line.clone(),
            });
        }

        rewritten.push(format!(
            "{} {}{}{}",
            tokens[..=start_index].join(from_sep),
            tokens[start_index + 1..matched].join(to_sep),
            from_sep,
            tokens[matched..].join(from_sep),
        ));
    }

    Ok(rewritten)
}

/// Переводит адресную секцию каждой записи на новый разделитель.
///
/// Политика `boundary` находит границу адреса (в формате по
/// умолчанию — последний числовой токен, кроме финального). Токены до
/// границы сохраняют `from_sep`, начиная с границы соединяются
/// `to_sep`.
///
/// # Ошибки
///
/// [`ConvertError::AddressNumberNotFound`], если граница не найдена.
pub fn change_address_delimiter<B: FieldBoundary>(
    lines: &[String],
    boundary: &B,
    from_sep: &str,
    to_sep: &str,
) -> ConvertResult<Vec<String>> {
    let mut rewritten = Vec::with_capacity(lines.len());

    for line in lines {
        let tokens: Vec<&str> = line.split(from_sep).collect();

        let matched = boundary
            .boundary_index(&tokens)
            .ok_or_else(|| ConvertError::AddressNumberNotFound { record: line.clone() })?;

        rewritten.push(format!(
            "{}{}{}",
            tokens[..matched].join(from_sep),
            from_sep,
            tokens[matched..].join(to_sep),
        ));
    }

    Ok(rewritten)
}
