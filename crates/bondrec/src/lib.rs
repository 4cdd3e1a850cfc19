//! Библиотека конвертации bond-записей.
//!
//! Этот крейт превращает текстовое вложение с записями о залоговых
//! обязательствах (bond) фиксированной раскладки в разделённый
//! CSV-подобный вывод. Конвейер линейный и без состояния:
//! фильтрация значимых строк, нормализация токенов, склейка пар
//! строк и две перестановки разделителей, отделяющие bond-номер
//! от адреса.
//!
//! # Быстрый старт
//!
//! ```
//! use std::io::Cursor;
//!
//! use bondrec::prelude::*;
//!
//! let input = "F1234 2020 06 15 00 BOND SURETY CO / JOHN AGENT\n\
//!              100 MAIN ST SPRINGFIELD\n\
//!              J1002 2020 07 01 00 BOND ACME SURETY / JANE AGENT\n\
//!              200 OAK AVE SHELBYVILLE\n\
//!              X1003 2020 08 09 00 BOND TRUST CO / BOB AGENT\n\
//!              300 ELM RD CAPITAL CITY\n";
//!
//! let mut output = Vec::new();
//! let count = convert(Cursor::new(input), &mut output, &PipelineConfig::default()).unwrap();
//! assert_eq!(count, 1);
//! ```
//!
//! Конвертация с потерями: отброшенные строки и схлопнутые пробелы
//! не восстановимы, round-trip закона нет.

pub mod boundary;
pub mod collapse;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod reader;
pub mod rewrite;
pub mod writer;

/// Часто используемые типы и функции.
pub mod prelude {
    pub use crate::{
        boundary::{FieldBoundary, SubstringMarker, TrailingNumber},
        config::PipelineConfig,
        error::{ConvertError, ConvertResult},
        pipeline::{convert, convert_lines},
        reader::read_lines,
        writer::LineWriter,
    };
}
