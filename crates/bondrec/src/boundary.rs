//! Политики поиска границ полей внутри записи.
//!
//! Исходный формат не имеет схемы: граница между bond-секцией и
//! адресом определяется хрупкими эвристиками (токен с маркером,
//! последний числовой токен). Эвристики вынесены за трейт
//! [`FieldBoundary`], чтобы другой формат входа мог подставить свою
//! стратегию, не трогая форму конвейера.

/// Стратегия поиска границы поля в `;`-разделённой записи.
///
/// Реализуется типами-политиками ([`SubstringMarker`],
/// [`TrailingNumber`]); проходы перестановки разделителей принимают
/// любую реализацию.
pub trait FieldBoundary {
    /// Возвращает индекс токена-границы или `None`, если граница
    /// не найдена.
    fn boundary_index(&self, tokens: &[&str]) -> Option<usize>;
}

/// Граница — первый токен, содержащий подстроку-маркер.
///
/// В оригинальном формате bond-секция заканчивается токеном с `/`
/// (разделитель страховщика и агента).
#[derive(Debug, Clone)]
pub struct SubstringMarker {
    marker: String,
}

impl SubstringMarker {
    /// Создаёт политику с указанным маркером.
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self { marker: marker.into() }
    }

    /// Искомая подстрока-маркер.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl FieldBoundary for SubstringMarker {
    fn boundary_index(&self, tokens: &[&str]) -> Option<usize> {
        tokens.iter().position(|t| t.contains(self.marker.as_str()))
    }
}

/// Граница — последний числовой токен, исключая самый последний.
///
/// Эвристика «номер дома»: адрес начинается с последнего целого
/// числа в записи, но финальный токен (индекс `len - 1`) и нулевой
/// токен никогда не считаются границей.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingNumber;

impl FieldBoundary for TrailingNumber {
    fn boundary_index(&self, tokens: &[&str]) -> Option<usize> {
        // Scan from the end toward the start, excluding index 0
        for i in (1..tokens.len()).rev() {
            if tokens[i].parse::<i64>().is_ok() && i != tokens.len() - 1 {
                return Some(i);
            }
        }
        None
    }
}
