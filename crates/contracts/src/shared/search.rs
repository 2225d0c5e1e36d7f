//! Поиск по спискам (без учёта регистра и диакритики)

use super::sort::collation::fold;

/// Минимальная длина фильтра, короче которой поиск не применяется
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Текстовые поля, по которым идёт поиск
    fn search_fields(&self) -> Vec<&str>;
}

/// Проверяет, активен ли фильтр (не пустой и не короче [`MIN_FILTER_LEN`])
pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Каждое слово фильтра должно встречаться хотя бы в одном поле
pub fn matches_filter<T: Searchable + ?Sized>(item: &T, filter: &str) -> bool {
    let fields: Vec<String> = item.search_fields().into_iter().map(fold).collect();
    fold(filter)
        .split_whitespace()
        .all(|term| fields.iter().any(|field| field.contains(term)))
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }

    items
        .into_iter()
        .filter(|item| matches_filter(item, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: &'static str,
        city: &'static str,
    }

    impl Searchable for Person {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Émile Durand", city: "Lyon" },
            Person { name: "Amine Benali", city: "Casablanca" },
            Person { name: "Chloé Martin", city: "Orléans" },
        ]
    }

    #[test]
    fn test_accent_and_case_insensitive() {
        let found = filter_list(people(), "EMI");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Émile Durand");

        let found = filter_list(people(), "orleans");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Chloé Martin");
    }

    #[test]
    fn test_all_terms_must_match() {
        assert_eq!(filter_list(people(), "amine casa").len(), 1);
        assert_eq!(filter_list(people(), "amine lyon").len(), 0);
    }

    #[test]
    fn test_short_filter_is_ignored() {
        assert_eq!(filter_list(people(), "ém").len(), 3);
        assert_eq!(filter_list(people(), "   ").len(), 3);
        assert!(!is_filter_active(" ab "));
        assert!(is_filter_active("abc"));
    }
}
