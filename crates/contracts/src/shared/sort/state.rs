use serde::{Deserialize, Serialize};

use super::direction::SortDirection;

/// Сырые настройки начальной сортировки (из config.toml или query string)
///
/// Ничего не гарантирует: направление может быть неизвестным, колонка пустой.
/// Нормализация происходит в [`SortState::initialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSort {
    #[serde(default, alias = "sort_by")]
    pub column: Option<String>,
    #[serde(default, alias = "sort_dir")]
    pub direction: Option<String>,
}

impl InitialSort {
    pub fn new(column: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: Some(direction.into()),
        }
    }
}

/// Что показывать в заголовке колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    /// Колонка не отсортирована, но по ней можно сортировать
    Unsorted,
}

/// Текущая сортировка таблицы: колонка и направление.
///
/// Инвариант: направление есть тогда и только тогда, когда есть колонка.
/// Поля закрыты, поэтому нарушить его снаружи нельзя.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "InitialSort", into = "InitialSort")]
pub struct SortState {
    sorted: Option<(String, SortDirection)>,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self { sorted: None }
    }

    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            sorted: Some((column.into(), direction)),
        }
    }

    /// Начальное состояние таблицы.
    ///
    /// Некорректные настройки (неизвестное направление, пустая колонка,
    /// только одна из двух половин) дают состояние без сортировки.
    pub fn initialize(initial: Option<&InitialSort>) -> Self {
        let Some(initial) = initial else {
            return Self::unsorted();
        };
        let column = initial
            .column
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let direction = initial
            .direction
            .as_deref()
            .and_then(SortDirection::parse_lenient);

        match (column, direction) {
            (Some(column), Some(direction)) => Self::new(column, direction),
            _ => Self::unsorted(),
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.sorted.as_ref().map(|(column, _)| column.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.sorted.as_ref().map(|(_, direction)| *direction)
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted.is_some()
    }

    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.column() == Some(column)
    }

    /// Следующее состояние после клика по заголовку `column`.
    ///
    /// Цикл для одной колонки: по возрастанию → по убыванию → без сортировки.
    /// Клик по другой колонке всегда начинает с возрастания.
    pub fn toggle(&self, column: &str) -> SortState {
        match &self.sorted {
            Some((current, direction)) if current == column => match direction {
                SortDirection::Ascending => Self::new(column, SortDirection::Descending),
                SortDirection::Descending => Self::unsorted(),
            },
            _ => Self::new(column, SortDirection::Ascending),
        }
    }

    pub fn indicator(&self, column: &str) -> SortIndicator {
        if !self.is_sorted_by(column) {
            return SortIndicator::Unsorted;
        }
        match self.direction() {
            Some(SortDirection::Ascending) => SortIndicator::Ascending,
            Some(SortDirection::Descending) => SortIndicator::Descending,
            None => SortIndicator::Unsorted,
        }
    }
}

impl From<InitialSort> for SortState {
    fn from(initial: InitialSort) -> Self {
        SortState::initialize(Some(&initial))
    }
}

impl From<SortState> for InitialSort {
    fn from(state: SortState) -> Self {
        match state.sorted {
            Some((column, direction)) => InitialSort {
                column: Some(column),
                direction: Some(direction.as_str().to_string()),
            },
            None => InitialSort::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_without_config_is_unsorted() {
        let state = SortState::initialize(None);
        assert_eq!(state.column(), None);
        assert_eq!(state.direction(), None);
        assert!(!state.is_sorted());
    }

    #[test]
    fn test_initialize_with_config() {
        let state = SortState::initialize(Some(&InitialSort::new("total", "desc")));
        assert_eq!(state.column(), Some("total"));
        assert_eq!(state.direction(), Some(SortDirection::Descending));
    }

    #[test]
    fn test_initialize_normalizes_malformed_config() {
        let unknown = InitialSort::new("name", "sideways");
        assert_eq!(SortState::initialize(Some(&unknown)), SortState::unsorted());

        let blank = InitialSort::new("  ", "asc");
        assert_eq!(SortState::initialize(Some(&blank)), SortState::unsorted());

        let half = InitialSort {
            column: Some("name".into()),
            direction: None,
        };
        assert_eq!(SortState::initialize(Some(&half)), SortState::unsorted());

        let other_half = InitialSort {
            column: None,
            direction: Some("asc".into()),
        };
        assert_eq!(SortState::initialize(Some(&other_half)), SortState::unsorted());
    }

    #[test]
    fn test_toggle_cycles_back_to_unsorted() {
        let state = SortState::unsorted();
        let state = state.toggle("name");
        assert_eq!(state, SortState::new("name", SortDirection::Ascending));
        let state = state.toggle("name");
        assert_eq!(state, SortState::new("name", SortDirection::Descending));
        let state = state.toggle("name");
        assert_eq!(state, SortState::unsorted());
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        let state = SortState::new("a", SortDirection::Descending);
        assert_eq!(state.toggle("b"), SortState::new("b", SortDirection::Ascending));

        let state = SortState::new("a", SortDirection::Ascending);
        assert_eq!(state.toggle("b"), SortState::new("b", SortDirection::Ascending));
    }

    #[test]
    fn test_indicator() {
        let state = SortState::new("name", SortDirection::Descending);
        assert_eq!(state.indicator("name"), SortIndicator::Descending);
        assert_eq!(state.indicator("total"), SortIndicator::Unsorted);
        assert_eq!(
            SortState::new("name", SortDirection::Ascending).indicator("name"),
            SortIndicator::Ascending
        );
        assert_eq!(SortState::unsorted().indicator("name"), SortIndicator::Unsorted);
    }

    #[test]
    fn test_is_sorted_by() {
        let state = SortState::new("name", SortDirection::Ascending);
        assert!(state.is_sorted_by("name"));
        assert!(!state.is_sorted_by("total"));
        assert!(!SortState::unsorted().is_sorted_by("name"));
        // по убыванию колонка тоже считается отсортированной
        assert!(state.toggle("name").is_sorted_by("name"));
        assert!(!state.toggle("name").toggle("name").is_sorted_by("name"));
    }

    #[test]
    fn test_serde_normalizes() {
        let state: SortState =
            serde_json::from_str(r#"{"column":"name","direction":"bogus"}"#).unwrap();
        assert_eq!(state, SortState::unsorted());

        let state: SortState =
            serde_json::from_str(r#"{"column":"name","direction":"desc"}"#).unwrap();
        assert_eq!(state, SortState::new("name", SortDirection::Descending));

        let json = serde_json::to_value(SortState::new("total", SortDirection::Ascending)).unwrap();
        assert_eq!(json["column"], "total");
        assert_eq!(json["direction"], "asc");
    }
}
