use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Направление сортировки колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Ошибка разбора направления сортировки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort direction: {0:?}")]
pub struct ParseSortDirectionError(pub String);

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Разбор без ошибки: всё нераспознанное превращается в `None`
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Применяет направление к результату сравнения "по возрастанию".
    ///
    /// Для `Descending` меняется только знак, равные элементы остаются равными.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("asc".parse(), Ok(SortDirection::Ascending));
        assert_eq!(" Descending ".parse(), Ok(SortDirection::Descending));
        assert_eq!("DESC".parse(), Ok(SortDirection::Descending));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(SortDirection::parse_lenient("ascending"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::parse_lenient(""), None);
    }

    #[test]
    fn test_apply_only_flips_sign() {
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&SortDirection::Descending).unwrap(), "\"desc\"");
        let parsed: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(parsed, SortDirection::Ascending);
    }
}
