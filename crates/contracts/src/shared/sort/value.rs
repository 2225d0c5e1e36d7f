use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::borrow::Cow;
use std::cmp::Ordering;

use super::collation::{compare_fr_base, CollationKey};

/// Значение поля записи, по которому идёт сортировка
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
    /// Поля нет (или оно пустое). Всегда после любых значений при сортировке по возрастанию.
    Absent,
}

impl SortValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, SortValue::Absent)
    }

    /// Текстовое представление для сравнения значений разных типов
    pub fn to_text(&self) -> String {
        match self {
            SortValue::Text(s) => s.to_string(),
            SortValue::Number(n) => n.to_string(),
            SortValue::Date(d) => d.format("%Y-%m-%dT%H:%M:%S").to_string(),
            SortValue::Bool(b) => b.to_string(),
            SortValue::Absent => String::new(),
        }
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(value: &'a str) -> Self {
        SortValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for SortValue<'a> {
    fn from(value: &'a String) -> Self {
        SortValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for SortValue<'_> {
    fn from(value: String) -> Self {
        SortValue::Text(Cow::Owned(value))
    }
}

impl From<f64> for SortValue<'_> {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SortValue<'_> {
                fn from(value: $t) -> Self {
                    SortValue::Number(value as f64)
                }
            }
        )*
    };
}

number_from!(i32, i64, u32, u64, usize, f32);

impl From<bool> for SortValue<'_> {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<NaiveDateTime> for SortValue<'_> {
    fn from(value: NaiveDateTime) -> Self {
        SortValue::Date(value)
    }
}

impl From<NaiveDate> for SortValue<'_> {
    fn from(value: NaiveDate) -> Self {
        SortValue::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<DateTime<Utc>> for SortValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Date(value.naive_utc())
    }
}

impl<'a, T> From<Option<T>> for SortValue<'a>
where
    T: Into<SortValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Absent)
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    // NaN после всех чисел
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Сравнение двух значений "по возрастанию".
///
/// - строки: французская локаль, без учёта регистра и диакритики;
/// - даты: по моменту времени;
/// - числа: численно;
/// - логические: `false < true`;
/// - разные типы: через текстовое представление;
/// - `Absent` больше любого значения и равно другому `Absent`.
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Absent, SortValue::Absent) => Ordering::Equal,
        (SortValue::Absent, _) => Ordering::Greater,
        (_, SortValue::Absent) => Ordering::Less,
        (SortValue::Text(x), SortValue::Text(y)) => compare_fr_base(x, y),
        (SortValue::Date(x), SortValue::Date(y)) => x.cmp(y),
        (SortValue::Number(x), SortValue::Number(y)) => compare_numbers(*x, *y),
        (SortValue::Bool(x), SortValue::Bool(y)) => x.cmp(y),
        (x, y) => compare_fr_base(&x.to_text(), &y.to_text()),
    }
}

/// Ключ сортировки, вычисляемый один раз на запись
#[derive(Debug, Clone)]
pub(crate) enum SortKey {
    Text(CollationKey),
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
    Absent,
}

impl SortKey {
    pub(crate) fn is_absent(&self) -> bool {
        matches!(self, SortKey::Absent)
    }

    /// Заменяет ключ его текстовым представлением (`Absent` остаётся как есть)
    pub(crate) fn coerce_to_text(&mut self) {
        if let Some(key) = self.text() {
            *self = SortKey::Text(key);
        }
    }

    fn text(&self) -> Option<CollationKey> {
        let text = match self {
            SortKey::Text(key) => return Some(key.clone()),
            SortKey::Number(n) => SortValue::Number(*n).to_text(),
            SortKey::Date(d) => SortValue::Date(*d).to_text(),
            SortKey::Bool(b) => SortValue::Bool(*b).to_text(),
            SortKey::Absent => return None,
        };
        Some(CollationKey::new(&text))
    }

    /// То же правило, что и [`compare_values`], но на предвычисленных ключах
    pub(crate) fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Absent, SortKey::Absent) => Ordering::Equal,
            (SortKey::Absent, _) => Ordering::Greater,
            (_, SortKey::Absent) => Ordering::Less,
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
            (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
            (SortKey::Number(x), SortKey::Number(y)) => compare_numbers(*x, *y),
            (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
            (x, y) => x.text().cmp(&y.text()),
        }
    }
}

impl From<SortValue<'_>> for SortKey {
    fn from(value: SortValue<'_>) -> Self {
        match value {
            SortValue::Text(s) => SortKey::Text(CollationKey::new(&s)),
            SortValue::Number(n) => SortKey::Number(n),
            SortValue::Date(d) => SortKey::Date(d),
            SortValue::Bool(b) => SortKey::Bool(b),
            SortValue::Absent => SortKey::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> SortValue<'static> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap().into()
    }

    #[test]
    fn test_compare_numbers() {
        assert_eq!(compare_values(&(-5).into(), &0.into()), Ordering::Less);
        assert_eq!(compare_values(&300.into(), &0.into()), Ordering::Greater);
        assert_eq!(compare_values(&1.5.into(), &1.5.into()), Ordering::Equal);
        assert_eq!(
            compare_values(&f64::NAN.into(), &1_000_000.into()),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_dates() {
        assert_eq!(
            compare_values(&date("2023-01-01"), &date("2023-05-12")),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_text_is_case_insensitive() {
        assert_eq!(compare_values(&"Émile".into(), &"emile".into()), Ordering::Equal);
        assert_eq!(compare_values(&"Amine".into(), &"emile".into()), Ordering::Less);
    }

    #[test]
    fn test_absent_is_greatest() {
        assert_eq!(compare_values(&SortValue::Absent, &"zzz".into()), Ordering::Greater);
        assert_eq!(compare_values(&1.into(), &SortValue::Absent), Ordering::Less);
        assert_eq!(
            compare_values(&SortValue::Absent, &SortValue::Absent),
            Ordering::Equal
        );
        assert!(SortValue::from(None::<&str>).is_absent());
    }

    #[test]
    fn test_mixed_types_compare_as_text() {
        // "10" < "abc": цифры раньше букв
        assert_eq!(compare_values(&10.into(), &"abc".into()), Ordering::Less);
        assert_eq!(compare_values(&true.into(), &"false".into()), Ordering::Greater);
    }

    #[test]
    fn test_keys_agree_with_values() {
        let values: Vec<SortValue<'static>> = vec![
            "Bravo".into(),
            42.into(),
            date("2024-02-29"),
            false.into(),
            SortValue::Absent,
            "alpha".into(),
            (-1.5).into(),
        ];
        for a in &values {
            for b in &values {
                let by_key = SortKey::from(a.clone()).compare(&SortKey::from(b.clone()));
                assert_eq!(by_key, compare_values(a, b), "{:?} vs {:?}", a, b);
            }
        }
    }
}
