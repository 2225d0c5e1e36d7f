use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::search::Searchable;
use crate::shared::sort::{Sortable, SortValue};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Record
// ============================================================================

/// Клиент (société ou particulier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub code: String,
    pub name: String,
    pub city: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    /// Сумма неоплаченных счетов, EUR
    pub balance: f64,
}

/// Колонки списка клиентов
pub mod columns {
    pub const CODE: &str = "code";
    pub const NAME: &str = "name";
    pub const CITY: &str = "city";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const CREATED_AT: &str = "created_at";
    pub const BALANCE: &str = "balance";
}

impl Sortable for Client {
    fn sort_value(&self, column: &str) -> SortValue<'_> {
        match column {
            columns::CODE => self.code.as_str().into(),
            columns::NAME => self.name.as_str().into(),
            columns::CITY => self.city.as_str().into(),
            columns::EMAIL => self.email.as_str().into(),
            columns::PHONE => self.phone.as_deref().into(),
            columns::CREATED_AT => self.created_at.into(),
            columns::BALANCE => self.balance.into(),
            _ => SortValue::Absent,
        }
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.code.as_str(),
            self.name.as_str(),
            self.city.as_str(),
            self.email.as_str(),
        ];
        if let Some(phone) = &self.phone {
            fields.push(phone);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sort::{sorted_view, SortDirection, SortState};

    fn client(code: &str, name: &str, phone: Option<&str>, balance: f64) -> Client {
        Client {
            id: ClientId::new(Uuid::new_v4()),
            code: code.to_string(),
            name: name.to_string(),
            city: "Paris".to_string(),
            email: format!("{}@example.fr", code.to_lowercase()),
            phone: phone.map(str::to_string),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            balance,
        }
    }

    #[test]
    fn test_sort_by_name_ignores_accents() {
        let clients = vec![
            client("CL-1", "Épicerie Fine", None, 0.0),
            client("CL-2", "Boucherie Ali", None, 0.0),
            client("CL-3", "fromagerie Vidal", None, 0.0),
        ];
        let state = SortState::new(columns::NAME, SortDirection::Ascending);
        let codes: Vec<&str> = sorted_view(&clients, &state)
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CL-2", "CL-1", "CL-3"]);
    }

    #[test]
    fn test_missing_phone_sorts_last() {
        let clients = vec![
            client("CL-1", "A", None, 0.0),
            client("CL-2", "B", Some("+33 6 12 34 56 78"), 0.0),
        ];
        let state = SortState::new(columns::PHONE, SortDirection::Ascending);
        assert_eq!(sorted_view(&clients, &state)[0].code, "CL-2");
    }

    #[test]
    fn test_search_fields_include_phone() {
        let c = client("CL-1", "A", Some("0612"), 0.0);
        assert!(c.search_fields().contains(&"0612"));
    }
}
