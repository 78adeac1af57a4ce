use std::path::PathBuf;
use std::str::FromStr;

use crate::common::{
    error::AppError,
    money::{DEFAULT_STARTING_BALANCE, Money},
};

pub const DATA_DIR_VAR: &str = "WALLET_DATA_DIR";
pub const STARTING_BALANCE_VAR: &str = "WALLET_STARTING_BALANCE";
pub const DEFAULT_DATA_DIR: &str = "wallet-data";
pub const DEFAULT_LOG_FILTER: &str = "monopoly_wallet=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the players and transactions files live.
    pub data_dir: PathBuf,
    /// Pre-filled starting balance for new players.
    pub starting_balance: Money,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            starting_balance: DEFAULT_STARTING_BALANCE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads `.env` and the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable lookup; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }

        if let Some(raw) = lookup(STARTING_BALANCE_VAR) {
            config.starting_balance = Money::from_str(&raw)
                .map_err(|e| AppError::Config(format!("{STARTING_BALANCE_VAR}: {e}")))?;
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// The first CLI argument after the program name overrides the data dir.
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let Some(dir) = args.get(1) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }
}
