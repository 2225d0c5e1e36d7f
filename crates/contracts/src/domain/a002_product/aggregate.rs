use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::search::Searchable;
use crate::shared::sort::{Sortable, SortValue};

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// Товар или услуга из каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    /// Цена без НДС (HT), EUR
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    /// Ставка НДС (TVA) в процентах: 0, 5.5, 10, 20
    #[serde(rename = "vatRate")]
    pub vat_rate: f64,
    #[serde(rename = "stockQty")]
    pub stock_qty: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Product {
    /// Цена с НДС (TTC)
    pub fn price_ttc(&self) -> f64 {
        self.unit_price * (1.0 + self.vat_rate / 100.0)
    }
}

pub mod columns {
    pub const SKU: &str = "sku";
    pub const NAME: &str = "name";
    pub const UNIT_PRICE: &str = "unit_price";
    pub const VAT_RATE: &str = "vat_rate";
    pub const STOCK_QTY: &str = "stock_qty";
    pub const IS_ACTIVE: &str = "is_active";
}

impl Sortable for Product {
    fn sort_value(&self, column: &str) -> SortValue<'_> {
        match column {
            columns::SKU => self.sku.as_str().into(),
            columns::NAME => self.name.as_str().into(),
            columns::UNIT_PRICE => self.unit_price.into(),
            columns::VAT_RATE => self.vat_rate.into(),
            columns::STOCK_QTY => self.stock_qty.into(),
            columns::IS_ACTIVE => self.is_active.into(),
            _ => SortValue::Absent,
        }
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.sku.as_str(), self.name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ttc() {
        let p = Product {
            id: ProductId::new(Uuid::nil()),
            sku: "PRD-001".into(),
            name: "Café moulu 1kg".into(),
            unit_price: 10.0,
            vat_rate: 5.5,
            stock_qty: 12,
            is_active: true,
        };
        assert!((p.price_ttc() - 10.55).abs() < 1e-9);
        assert_eq!(p.sort_value(columns::STOCK_QTY), SortValue::Number(12.0));
        assert_eq!(p.sort_value("unknown"), SortValue::Absent);
    }
}
