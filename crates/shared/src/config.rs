//! Ledger configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Ledger configuration.
///
/// Hosts embed the ledger core and may tune these knobs per deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Maximum tolerated difference between entry debit and credit totals.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Decimal,
    /// Prefix for generated journal entry numbers (e.g. "JE" in "JE-202601-000001").
    #[serde(default = "default_entry_number_prefix")]
    pub entry_number_prefix: String,
}

fn default_balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_entry_number_prefix() -> String {
    "JE".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            balance_tolerance: default_balance_tolerance(),
            entry_number_prefix: default_entry_number_prefix(),
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Reads `config/default` and `config/{RUN_MODE}` if present, then
    /// applies `ARCA__`-prefixed environment variables on top.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ARCA").separator("__"))
            .build()?;

        // Missing keys fall back to serde defaults.
        config.try_deserialize()
    }
}
