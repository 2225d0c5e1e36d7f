use contracts::shared::sort::{InitialSort, SortState};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    /// Сортировка по умолчанию для каждой таблицы: `[tables.client]`, `[tables.invoice]`...
    #[serde(default)]
    pub tables: HashMap<String, InitialSort>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Seed генератора тестовых данных (одинаковый seed = одинаковые данные)
    pub seed: u64,
    pub clients: usize,
    pub products: usize,
    pub invoices: usize,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]
seed = 42
clients = 40
products = 60
invoices = 200

[tables.client]
sort_by = "name"
sort_dir = "asc"

[tables.product]
sort_by = "sku"
sort_dir = "asc"

[tables.invoice]
sort_by = "issue_date"
sort_dir = "desc"
"#;

impl Config {
    /// Initial sort state of a table.
    ///
    /// Unknown tables and malformed settings give an unsorted table.
    pub fn default_sort(&self, table: &str) -> SortState {
        let Some(initial) = self.tables.get(table) else {
            return SortState::unsorted();
        };
        let state = SortState::initialize(Some(initial));
        if !state.is_sorted() {
            tracing::warn!(
                "Invalid default sort for table '{}': {:?}, table stays unsorted",
                table,
                initial
            );
        }
        state
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(Path::new("config.toml").to_path_buf());

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
pub fn default_config() -> Config {
    parse_config(DEFAULT_CONFIG).unwrap()
}
