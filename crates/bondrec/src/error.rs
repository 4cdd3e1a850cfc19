//! Модуль ошибок конвертации записей.

use thiserror::Error;

/// Главная ошибка конвертации bond-записей.
///
/// Объединяет все возможные ошибки конвейера: I/O ошибки, ошибки
/// загрузки конфигурации и ошибки поиска границ полей. Любая из них
/// фатальна для всего прогона — частичный вывод не формируется.
#[derive(Debug, Error)]
pub enum ConvertError {
    // === I/O ошибки ===
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Ошибки конфигурации ===
    /// Некорректный JSON в файле конфигурации.
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    // === Ошибки поиска границ полей ===
    /// Граница bond-секции не найдена ни в одном токене записи.
    #[error("Could not find bond section boundary in record: {record}")]
    BondBoundaryNotFound {
        /// Запись, в которой граница не найдена.
        record: String,
    },

    /// Маркер найден раньше фиксированного смещения bond-поля.
    ///
    /// Оригинальный формат гарантирует, что идентификатор занимает
    /// токены `0..=offset`; маркер внутри этой зоны означает
    /// повреждённую запись.
    #[error("Marker at token {index} is inside the bond field (offset {offset}): {record}")]
    MarkerBeforeOffset {
        /// Индекс токена с маркером.
        index: usize,
        /// Смещение bond-поля из конфигурации.
        offset: usize,
        /// Повреждённая запись.
        record: String,
    },

    /// Не найден числовой токен адреса (кроме последнего токена).
    #[error("Could not find address number index in record: {record}")]
    AddressNumberNotFound {
        /// Запись без числового токена адреса.
        record: String,
    },
}

/// Удобный alias для Result с ConvertError.
pub type ConvertResult<T> = Result<T, ConvertError>;
