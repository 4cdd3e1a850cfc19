//! Буферизованный writer для итоговых записей.
//!
//! Предоставляет [`LineWriter`] для записи готовых строк в любой тип,
//! реализующий [`Write`].

use std::io::{BufWriter, Write};

use crate::error::ConvertResult;

/// Буферизованный writer итоговых записей.
///
/// Пишет по одной записи на строку, добавляя `\n`, и ведёт счётчик
/// записанного.
///
/// # Пример
///
/// ```
/// use bondrec::writer::LineWriter;
///
/// let mut buf = Vec::new();
/// let mut writer = LineWriter::new(&mut buf);
/// writer.write("F1234;SURETY;100 MAIN ST").unwrap();
/// writer.flush().unwrap();
/// assert_eq!(writer.records_written(), 1);
/// ```
pub struct LineWriter<W: Write> {
    inner: BufWriter<W>,
    /// Счётчик записанных записей.
    records_written: usize,
}

impl<W: Write> LineWriter<W> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self { inner: BufWriter::new(writer), records_written: 0 }
    }

    /// Записывает одну запись с завершающим переводом строки.
    pub fn write(&mut self, record: &str) -> ConvertResult<()> {
        writeln!(self.inner, "{record}")?;
        self.records_written += 1;
        Ok(())
    }

    /// Записывает несколько записей.
    pub fn write_all(&mut self, records: &[String]) -> ConvertResult<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> ConvertResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных записей.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Извлекает внутренний writer (с предварительным flush).
    pub fn into_inner(self) -> std::result::Result<W, std::io::IntoInnerError<BufWriter<W>>> {
        self.inner.into_inner()
    }
}
