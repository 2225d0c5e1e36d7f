use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_client::aggregate::ClientId;
use crate::shared::search::Searchable;
use crate::shared::sort::{Sortable, SortValue};

/// Уникальный идентификатор счёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// Статус счёта (facture)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 5] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Cancelled,
    ];

    /// Код статуса, совпадает с сериализованным значением
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Подпись для таблицы
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Brouillon",
            InvoiceStatus::Sent => "Envoyée",
            InvoiceStatus::Paid => "Payée",
            InvoiceStatus::Overdue => "En retard",
            InvoiceStatus::Cancelled => "Annulée",
        }
    }
}

/// Счёт клиенту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    /// Номер вида FA-2024-0001
    pub number: String,
    #[serde(rename = "clientId")]
    pub client_id: ClientId,
    #[serde(rename = "clientName")]
    pub client_name: String,
    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "totalHt")]
    pub total_ht: f64,
    #[serde(rename = "totalTtc")]
    pub total_ttc: f64,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Сумма НДС
    pub fn total_vat(&self) -> f64 {
        self.total_ttc - self.total_ht
    }
}

pub mod columns {
    pub const NUMBER: &str = "number";
    pub const CLIENT_NAME: &str = "client_name";
    pub const ISSUE_DATE: &str = "issue_date";
    pub const DUE_DATE: &str = "due_date";
    pub const TOTAL_HT: &str = "total_ht";
    pub const TOTAL_TTC: &str = "total_ttc";
    pub const STATUS: &str = "status";
}

impl Sortable for Invoice {
    fn sort_value(&self, column: &str) -> SortValue<'_> {
        match column {
            columns::NUMBER => self.number.as_str().into(),
            columns::CLIENT_NAME => self.client_name.as_str().into(),
            columns::ISSUE_DATE => self.issue_date.into(),
            columns::DUE_DATE => self.due_date.into(),
            columns::TOTAL_HT => self.total_ht.into(),
            columns::TOTAL_TTC => self.total_ttc.into(),
            columns::STATUS => self.status.label().into(),
            _ => SortValue::Absent,
        }
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.client_name.as_str(),
            self.status.label(),
        ]
    }
}
