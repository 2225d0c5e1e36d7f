//! Генератор тестовых данных
//!
//! Данные детерминированы seed'ом из config.toml: при одинаковом seed
//! списки совпадают от запуска к запуску.

use chrono::{Days, NaiveDate};
use contracts::domain::a001_client::aggregate::{Client, ClientId};
use contracts::domain::a002_product::aggregate::{Product, ProductId};
use contracts::domain::a003_invoice::aggregate::{Invoice, InvoiceId, InvoiceStatus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::shared::config::DataConfig;

const FIRST_NAMES: &[&str] = &[
    "Amine", "Émile", "Chloé", "Yasmine", "Karim", "Léa", "Mehdi", "Inès", "Hugo", "Fatima",
    "Zoé", "Rachid", "Océane", "Nadia", "Théo", "Salma",
];

const LAST_NAMES: &[&str] = &[
    "Martin", "Benali", "Durand", "El Amrani", "Lefèvre", "Bouzid", "Moreau", "Haddad",
    "Girard", "Chraïbi", "Roux", "Mansouri",
];

const COMPANY_KINDS: &[&str] = &[
    "Boulangerie", "Garage", "Épicerie", "Cabinet", "Atelier", "Pharmacie", "Librairie",
    "Société",
];

const CITIES: &[&str] = &[
    "Paris", "Lyon", "Marseille", "Orléans", "Nîmes", "Casablanca", "Rabat", "Tunis", "Alger",
    "Oran", "Béziers", "Créteil",
];

const PRODUCTS: &[&str] = &[
    "Café moulu 1kg", "Thé à la menthe", "Huile d'olive 75cl", "Semoule fine", "Dattes Deglet Nour",
    "Savon d'Alep", "Prestation de conseil", "Heure de main-d'œuvre", "Câble HDMI 2m",
    "Ramette papier A4", "Cartouche d'encre", "Écran 24 pouces", "Clavier AZERTY",
    "Abonnement maintenance",
];

const VAT_RATES: &[f64] = &[0.0, 5.5, 10.0, 20.0];

fn random_uuid(rng: &mut StdRng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// ASCII-версия строки для email-адресов
fn slug(s: &str) -> String {
    contracts::shared::sort::collation::fold(s)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn random_date(rng: &mut StdRng, max_days: u64) -> NaiveDate {
    base_date() + Days::new(rng.gen_range(0..max_days.max(1)))
}

pub fn generate_clients(rng: &mut StdRng, count: usize) -> Vec<Client> {
    (1..=count)
        .map(|n| {
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            let name = if rng.gen_bool(0.5) {
                format!("{} {}", pick(rng, COMPANY_KINDS), last)
            } else {
                format!("{} {}", first, last)
            };
            let phone = rng.gen_bool(0.8).then(|| {
                let digits: Vec<String> = (0..4)
                    .map(|_| format!("{:02}", rng.gen_range(0..100)))
                    .collect();
                format!("+33 6 {}", digits.join(" "))
            });
            Client {
                id: ClientId::new(random_uuid(rng)),
                code: format!("CL-{:04}", n),
                email: format!("{}.{}@exemple.fr", slug(first), slug(last)),
                name,
                city: pick(rng, CITIES).to_string(),
                phone,
                created_at: random_date(rng, 365),
                balance: 0.0,
            }
        })
        .collect()
}

pub fn generate_products(rng: &mut StdRng, count: usize) -> Vec<Product> {
    (1..=count)
        .map(|n| {
            let base = pick(rng, PRODUCTS);
            Product {
                id: ProductId::new(random_uuid(rng)),
                sku: format!("PRD-{:04}", n),
                name: if n > PRODUCTS.len() {
                    format!("{} (lot {})", base, n)
                } else {
                    base.to_string()
                },
                unit_price: round2(rng.gen_range(0.5..1500.0)),
                vat_rate: *VAT_RATES.choose(rng).unwrap_or(&20.0),
                stock_qty: rng.gen_range(-5..500),
                is_active: rng.gen_bool(0.9),
            }
        })
        .collect()
}

/// Генерирует счета и пересчитывает задолженность клиентов
pub fn generate_invoices(rng: &mut StdRng, clients: &mut [Client], count: usize) -> Vec<Invoice> {
    if clients.is_empty() {
        return Vec::new();
    }

    let mut invoices: Vec<Invoice> = (1..=count)
        .map(|_| {
            let client_idx = rng.gen_range(0..clients.len());
            let status = *InvoiceStatus::ALL.choose(rng).unwrap_or(&InvoiceStatus::Draft);
            let issue_date = random_date(rng, 365);
            let due_date = match status {
                InvoiceStatus::Draft => None,
                _ => issue_date.checked_add_days(Days::new(30)),
            };
            let total_ht = round2(rng.gen_range(20.0..8000.0));
            let vat_rate = *VAT_RATES.choose(rng).unwrap_or(&20.0);
            Invoice {
                id: InvoiceId::new(random_uuid(rng)),
                number: String::new(),
                client_id: clients[client_idx].id,
                client_name: clients[client_idx].name.clone(),
                issue_date,
                due_date,
                total_ht,
                total_ttc: round2(total_ht * (1.0 + vat_rate / 100.0)),
                status,
            }
        })
        .collect();

    // Номера идут по дате выставления, как в реальном журнале счетов
    invoices.sort_by_key(|inv| inv.issue_date);
    for (n, invoice) in invoices.iter_mut().enumerate() {
        invoice.number = format!("FA-{}-{:04}", invoice.issue_date.format("%Y"), n + 1);
    }

    for client in clients.iter_mut() {
        client.balance = round2(
            invoices
                .iter()
                .filter(|inv| inv.client_id == client.id)
                .filter(|inv| matches!(inv.status, InvoiceStatus::Sent | InvoiceStatus::Overdue))
                .map(|inv| inv.total_ttc)
                .sum(),
        );
    }

    invoices
}

/// Полный набор тестовых данных
pub struct MockData {
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub invoices: Vec<Invoice>,
}

pub fn generate(config: &DataConfig) -> MockData {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut clients = generate_clients(&mut rng, config.clients);
    let products = generate_products(&mut rng, config.products);
    let invoices = generate_invoices(&mut rng, &mut clients, config.invoices);
    MockData {
        clients,
        products,
        invoices,
    }
}
