//! Форматирование дат для таблиц (формат JJ/MM/AAAA)

use chrono::NaiveDate;

/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Пустая дата отображается как "—"
pub fn format_date_opt(date: &Option<NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_else(|| "—".to_string())
}
