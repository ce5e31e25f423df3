use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Storefront settings. CLI flags override whatever is set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub catalog_path: PathBuf,
    pub log_level: String,
    pub page_size: usize,
    pub showcase_limit: usize,
}

/// Load configuration from the environment, after reading `.env` if present.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric variable does not parse.
pub fn load_shop_config() -> Result<ShopConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_shop_config(|key| std::env::var(key))
}

fn build_shop_config<F>(lookup: F) -> Result<ShopConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().parse::<usize>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            Ok(n) => Ok(n),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    Ok(ShopConfig {
        catalog_path: PathBuf::from(or_default("CEREZA_CATALOG", "data/catalog.json")),
        log_level: or_default("CEREZA_LOG_LEVEL", "warn"),
        page_size: parse_positive("CEREZA_PAGE_SIZE", "12")?,
        showcase_limit: parse_positive("CEREZA_SHOWCASE_LIMIT", "8")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = build_shop_config(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.showcase_limit, 8);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = build_shop_config(lookup_from(&[
            ("CEREZA_CATALOG", "/srv/products.json"),
            ("CEREZA_LOG_LEVEL", "debug"),
            ("CEREZA_PAGE_SIZE", "24"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/srv/products.json"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.page_size, 24);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = build_shop_config(lookup_from(&[("CEREZA_PAGE_SIZE", "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { ref var, .. } if var == "CEREZA_PAGE_SIZE"
        ));

        let err = build_shop_config(lookup_from(&[("CEREZA_SHOWCASE_LIMIT", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar {
                var: "CEREZA_SHOWCASE_LIMIT".to_string(),
                reason: "must be greater than zero".to_string(),
            }
        );
    }
}
