use super::state::{InitialSort, SortState};
use super::value::{SortKey, SortValue};

/// Trait для записей, поддерживающих сортировку по колонкам
pub trait Sortable {
    /// Значение колонки `column`. Для неизвестных колонок возвращает `SortValue::Absent`.
    fn sort_value(&self, column: &str) -> SortValue<'_>;
}

/// Порядок индексов записей для данного состояния сортировки
fn sorted_indices<R, F>(records: &[R], state: &SortState, accessor: F) -> Vec<usize>
where
    F: for<'r> Fn(&'r R, &str) -> SortValue<'r>,
{
    let (Some(column), Some(direction)) = (state.column(), state.direction()) else {
        return (0..records.len()).collect();
    };

    let mut keyed: Vec<(SortKey, usize)> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| (SortKey::from(accessor(record, column)), idx))
        .collect();

    // Попарное сравнение разных типов через текст не транзитивно,
    // поэтому колонка со смешанными типами целиком сравнивается как текст
    let mut kinds = keyed
        .iter()
        .filter(|(key, _)| !key.is_absent())
        .map(|(key, _)| std::mem::discriminant(key));
    let mixed = match kinds.next() {
        Some(first) => kinds.any(|kind| kind != first),
        None => false,
    };
    if mixed {
        for (key, _) in keyed.iter_mut() {
            key.coerce_to_text();
        }
    }

    // sort_by стабильный: равные по ключу записи сохраняют исходный порядок
    // в обоих направлениях
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, idx)| idx).collect()
}

/// Отсортированное представление записей через произвольный accessor колонки.
///
/// Исходный срез не изменяется. Без сортировки возвращается исходный порядок.
pub fn sorted_view_by<'a, R, F>(records: &'a [R], state: &SortState, accessor: F) -> Vec<&'a R>
where
    F: for<'r> Fn(&'r R, &str) -> SortValue<'r>,
{
    sorted_indices(records, state, accessor)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Отсортированное представление записей, реализующих [`Sortable`]
pub fn sorted_view<'a, R: Sortable>(records: &'a [R], state: &SortState) -> Vec<&'a R> {
    sorted_view_by(records, state, |record, column| record.sort_value(column))
}

/// Сортирует список, забирая его во владение
pub fn sort_list<R: Sortable>(items: Vec<R>, state: &SortState) -> Vec<R> {
    let order = sorted_indices(&items, state, |record, column| record.sort_value(column));
    let mut slots: Vec<Option<R>> = items.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}

/// Состояние сортировки одной таблицы вместе с её записями
#[derive(Debug, Clone)]
pub struct TableSort<R> {
    records: Vec<R>,
    state: SortState,
}

impl<R: Sortable> TableSort<R> {
    pub fn initialize(records: Vec<R>, initial: Option<InitialSort>) -> Self {
        Self {
            records,
            state: SortState::initialize(initial.as_ref()),
        }
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Записи в исходном порядке
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Заменить записи (например, после перезагрузки), сортировка сохраняется
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Клик по заголовку колонки
    pub fn toggle(&mut self, column: &str) -> &SortState {
        self.state = self.state.toggle(column);
        &self.state
    }

    pub fn view(&self) -> Vec<&R> {
        sorted_view(&self.records, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sort::SortDirection;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: Option<&'static str>,
        total: f64,
        date: Option<NaiveDate>,
    }

    impl Sortable for Row {
        fn sort_value(&self, column: &str) -> SortValue<'_> {
            match column {
                "id" => self.id.into(),
                "name" => self.name.into(),
                "total" => self.total.into(),
                "date" => self.date.into(),
                _ => SortValue::Absent,
            }
        }
    }

    fn row(id: u32, name: &'static str, total: f64) -> Row {
        Row {
            id,
            name: Some(name),
            total,
            date: None,
        }
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn asc(column: &str) -> SortState {
        SortState::new(column, SortDirection::Ascending)
    }

    fn desc(column: &str) -> SortState {
        SortState::new(column, SortDirection::Descending)
    }

    fn scenario_rows() -> Vec<Row> {
        vec![
            row(1, "Bravo", 50.0),
            row(2, "alpha", 200.0),
            row(3, "Charlie", 10.0),
        ]
    }

    #[test]
    fn test_unsorted_keeps_original_order() {
        let rows = scenario_rows();
        let view = sorted_view(&rows, &SortState::unsorted());
        assert_eq!(ids(&view), vec![1, 2, 3]);
    }

    #[test]
    fn test_scenario_toggle_name_three_times() {
        let mut table = TableSort::initialize(scenario_rows(), None);
        assert!(!table.state().is_sorted());

        table.toggle("name");
        assert_eq!(table.state(), &asc("name"));
        assert_eq!(ids(&table.view()), vec![2, 1, 3]);

        table.toggle("name");
        assert_eq!(table.state(), &desc("name"));
        assert_eq!(ids(&table.view()), vec![3, 1, 2]);

        table.toggle("name");
        assert_eq!(table.state(), &SortState::unsorted());
        assert_eq!(ids(&table.view()), vec![1, 2, 3]);
    }

    #[test]
    fn test_numeric_ordering() {
        let rows = vec![row(1, "a", 300.0), row(2, "b", -5.0), row(3, "c", 0.0)];
        let totals = |v: Vec<&Row>| v.iter().map(|r| r.total).collect::<Vec<_>>();
        assert_eq!(totals(sorted_view(&rows, &asc("total"))), vec![-5.0, 0.0, 300.0]);
        assert_eq!(totals(sorted_view(&rows, &desc("total"))), vec![300.0, 0.0, -5.0]);
    }

    #[test]
    fn test_date_ordering() {
        let mut may = row(1, "may", 0.0);
        may.date = NaiveDate::from_ymd_opt(2023, 5, 12);
        let mut jan = row(2, "jan", 0.0);
        jan.date = NaiveDate::from_ymd_opt(2023, 1, 1);
        let rows = vec![may, jan];
        assert_eq!(ids(&sorted_view(&rows, &asc("date"))), vec![2, 1]);
    }

    #[test]
    fn test_locale_strings_keep_ties_stable() {
        let rows = vec![row(1, "Émile", 0.0), row(2, "emile", 0.0), row(3, "Amine", 0.0)];
        assert_eq!(ids(&sorted_view(&rows, &asc("name"))), vec![3, 1, 2]);
        assert_eq!(ids(&sorted_view(&rows, &desc("name"))), vec![1, 2, 3]);
    }

    #[test]
    fn test_descending_is_reverse_without_duplicates() {
        let rows = vec![
            row(1, "delta", 4.0),
            row(2, "Alpha", 1.0),
            row(3, "charlie", 3.0),
            row(4, "Bravo", 2.0),
        ];
        for column in ["name", "total", "id"] {
            let mut ascending = ids(&sorted_view(&rows, &asc(column)));
            ascending.reverse();
            assert_eq!(ids(&sorted_view(&rows, &desc(column))), ascending);
        }
    }

    #[test]
    fn test_duplicates_keep_relative_order_in_both_directions() {
        let rows = vec![
            row(1, "x", 10.0),
            row(2, "y", 5.0),
            row(3, "z", 10.0),
            row(4, "w", 5.0),
        ];
        assert_eq!(ids(&sorted_view(&rows, &asc("total"))), vec![2, 4, 1, 3]);
        assert_eq!(ids(&sorted_view(&rows, &desc("total"))), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Row> = Vec::new();
        assert!(sorted_view(&rows, &asc("name")).is_empty());
        assert!(sort_list(rows, &desc("total")).is_empty());
    }

    #[test]
    fn test_absent_values_last_ascending_first_descending() {
        let mut nameless = row(2, "", 0.0);
        nameless.name = None;
        let rows = vec![row(1, "b", 0.0), nameless, row(3, "a", 0.0)];
        assert_eq!(ids(&sorted_view(&rows, &asc("name"))), vec![3, 1, 2]);
        assert_eq!(ids(&sorted_view(&rows, &desc("name"))), vec![2, 1, 3]);
    }

    #[test]
    fn test_unknown_column_keeps_order() {
        let rows = scenario_rows();
        assert_eq!(ids(&sorted_view(&rows, &asc("missing"))), vec![1, 2, 3]);
        assert_eq!(ids(&sorted_view(&rows, &desc("missing"))), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_types_do_not_panic() {
        let rows = vec![row(1, "b", 0.0), row(2, "a", 0.0), row(3, "10", 0.0)];
        let view = sorted_view_by(&rows, &asc("mixed"), |r, _| match r.id {
            2 => SortValue::Number(7.0),
            _ => r.name.into(),
        });
        // "10" < "7" < "b" в текстовом представлении
        assert_eq!(ids(&view), vec![3, 2, 1]);
    }

    #[test]
    fn test_mixed_column_is_compared_as_text_as_a_whole() {
        // попарно 9 < 10 < "1a" < 9, целиком как текст: "10" < "1a" < "9"
        let rows = vec![row(1, "", 0.0), row(2, "", 0.0), row(3, "1a", 0.0)];
        let view = sorted_view_by(&rows, &asc("mixed"), |r, _| match r.id {
            1 => SortValue::Number(9.0),
            2 => SortValue::Number(10.0),
            _ => r.name.into(),
        });
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_list_does_not_lose_items() {
        let rows = scenario_rows();
        let sorted = sort_list(rows.clone(), &desc("total"));
        assert_eq!(sorted.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1, 3]);
        assert_eq!(sorted.len(), rows.len());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let rows = scenario_rows();
        let before = rows.clone();
        let _ = sorted_view(&rows, &desc("name"));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_set_records_keeps_state() {
        let mut table = TableSort::initialize(scenario_rows(), Some(InitialSort::new("total", "asc")));
        assert_eq!(ids(&table.view()), vec![3, 1, 2]);
        table.set_records(vec![row(9, "z", 1.0), row(8, "y", 0.5)]);
        assert_eq!(ids(&table.view()), vec![8, 9]);
        assert_eq!(table.records().len(), 2);
    }
}
