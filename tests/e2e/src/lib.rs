//! # e2e-tests - End-to-end тесты CLI инструментов
//!
//! Этот крейт содержит e2e тесты для CLI инструментов воркспейса:
//! - `bondconv` — конвертер bond-вложений в разделённый вывод
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `attachment_a.txt` — реалистичное вложение с шумом и восемью
//!   значимыми строками
//! - `attachment_bad_address.txt` — вложение, дающее запись без
//!   числового токена адреса
//! - `pipeline_config.json` — конфигурация с заниженным порогом длины
//!   адреса

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
