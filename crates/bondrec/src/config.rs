//! Конфигурация конвейера конвертации.
//!
//! Исторически входной формат задавался захардкоженными константами
//! (префиксы, смещение bond-поля, порог длины адреса). Здесь они
//! вынесены в явную структуру [`PipelineConfig`], которую можно
//! собрать вручную или загрузить из JSON-файла.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConvertResult;

/// Префиксы bond-номеров по умолчанию.
pub const DEFAULT_BOND_PREFIXES: [&str; 3] = ["F1", "J1", "X1"];

/// Количество ведущих токенов, занимаемых bond-идентификатором.
pub const DEFAULT_BOND_FIELD_OFFSET: usize = 5;

/// Максимальная длина адресного сегмента при склейке пар строк.
pub const DEFAULT_MAX_ADDRESS_LENGTH: usize = 60;

/// Параметры конвейера конвертации bond-записей.
///
/// # Пример
///
/// ```
/// use bondrec::config::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.bond_prefixes, vec!["F1", "J1", "X1"]);
/// assert_eq!(config.bond_field_offset, 5);
/// assert_eq!(config.max_address_length, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Префиксы, с которых начинаются bond-номера.
    ///
    /// Строка проходит фильтр, если любой из префиксов является
    /// подстрокой её первого токена.
    pub bond_prefixes: Vec<String>,
    /// Количество ведущих токенов bond-идентификатора.
    ///
    /// Первая перестановка разделителей сохраняет токены
    /// `0..=bond_field_offset` как единое поле.
    pub bond_field_offset: usize,
    /// Порог длины адресного сегмента.
    ///
    /// Пары строк, у которых продолжение длиннее порога, отбрасываются
    /// при склейке целиком.
    pub max_address_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bond_prefixes: DEFAULT_BOND_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
            bond_field_offset: DEFAULT_BOND_FIELD_OFFSET,
            max_address_length: DEFAULT_MAX_ADDRESS_LENGTH,
        }
    }
}

impl PipelineConfig {
    /// Загружает конфигурацию из JSON-файла.
    ///
    /// Отсутствующие поля заполняются значениями по умолчанию.
    ///
    /// # Ошибки
    ///
    /// Возвращает ошибку, если файл не читается или содержит
    /// некорректный JSON.
    pub fn from_path(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}
