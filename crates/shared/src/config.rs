//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Money;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Wallet engine configuration.
    #[serde(default)]
    pub wallet: WalletSettings,
}

/// Wallet engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletSettings {
    /// Amount at or above which a withdrawal requires admin approval.
    ///
    /// String-encoded so operators can supply it through any config source;
    /// parsed as a decimal amount at service construction.
    #[serde(default = "default_auto_withdrawal_limit")]
    pub auto_withdrawal_limit: String,
}

fn default_auto_withdrawal_limit() -> String {
    "2000000".to_string()
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            auto_withdrawal_limit: default_auto_withdrawal_limit(),
        }
    }
}

impl WalletSettings {
    /// Parses the automatic withdrawal limit as a monetary amount.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the configured value is not a valid
    /// decimal. A misconfigured threshold is an operator error, not a
    /// user-facing condition.
    pub fn threshold(&self) -> AppResult<Money> {
        self.auto_withdrawal_limit.parse().map_err(|e| {
            AppError::Internal(format!(
                "invalid auto withdrawal limit {:?}: {e}",
                self.auto_withdrawal_limit
            ))
        })
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAYVAULT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_threshold() {
        let settings = WalletSettings::default();
        assert_eq!(settings.auto_withdrawal_limit, "2000000");
        assert_eq!(settings.threshold().unwrap(), Money::new(dec!(2000000)));
    }

    #[test]
    fn test_threshold_parses_decimal() {
        let settings = WalletSettings {
            auto_withdrawal_limit: "1500.50".to_string(),
        };
        assert_eq!(settings.threshold().unwrap(), Money::new(dec!(1500.50)));
    }

    #[test]
    fn test_threshold_parse_failure_is_internal() {
        let settings = WalletSettings {
            auto_withdrawal_limit: "two million".to_string(),
        };
        let err = settings.threshold().unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_load_defaults_when_unset() {
        temp_env::with_vars_unset(["PAYVAULT__WALLET__AUTO_WITHDRAWAL_LIMIT"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.wallet.auto_withdrawal_limit, "2000000");
        });
    }

    #[test]
    fn test_load_env_override() {
        temp_env::with_var(
            "PAYVAULT__WALLET__AUTO_WITHDRAWAL_LIMIT",
            Some("500000"),
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.wallet.auto_withdrawal_limit, "500000");
            },
        );
    }
}
