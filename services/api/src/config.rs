use anyhow::{bail, Context, Result};
use billing_reports::{DEFAULT_TREND_BUCKETS, DEFAULT_TREND_WINDOW_DAYS};
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub environment: String,
    pub trend_window_days: u32,
    pub trend_max_buckets: usize,
    pub default_list_limit: i64,
    pub max_list_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let parsed = Url::parse(&database_url).context("DATABASE_URL is not a valid URL")?;
        if !matches!(parsed.scheme(), "postgres" | "postgresql") {
            bail!("DATABASE_URL must use the postgres scheme, got {}", parsed.scheme());
        }

        let config = Self {
            port: parse_or(&lookup, "PORT", 3000)?,
            database_url,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            trend_window_days: parse_or(&lookup, "TREND_WINDOW_DAYS", DEFAULT_TREND_WINDOW_DAYS)?,
            trend_max_buckets: parse_or(&lookup, "TREND_MAX_BUCKETS", DEFAULT_TREND_BUCKETS)?,
            default_list_limit: parse_or(&lookup, "DEFAULT_LIST_LIMIT", 100)?,
            max_list_limit: parse_or(&lookup, "MAX_LIST_LIMIT", 500)?,
        };

        if config.default_list_limit < 1 || config.default_list_limit > config.max_list_limit {
            bail!(
                "DEFAULT_LIST_LIMIT must be between 1 and MAX_LIST_LIMIT ({})",
                config.max_list_limit
            );
        }
        if config.trend_max_buckets == 0 || config.trend_max_buckets > DEFAULT_TREND_BUCKETS {
            bail!("TREND_MAX_BUCKETS must be between 1 and {}", DEFAULT_TREND_BUCKETS);
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/billing")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.trend_window_days, 30);
        assert_eq!(config.trend_max_buckets, 14);
        assert_eq!(config.default_list_limit, 100);
        assert_eq!(config.max_list_limit, 500);
    }

    #[test]
    fn missing_or_foreign_database_url_is_rejected() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DATABASE_URL", "mysql://localhost/billing")]).is_err());
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/billing"),
            ("PORT", "eighty"),
        ]);
        assert!(result.is_err());

        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/billing"),
            ("DEFAULT_LIST_LIMIT", "900"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn trend_buckets_are_capped() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/billing"),
            ("TREND_MAX_BUCKETS", "7"),
        ])
        .unwrap();
        assert_eq!(config.trend_max_buckets, 7);

        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/billing"),
            ("TREND_MAX_BUCKETS", "15"),
        ]);
        assert!(result.is_err());
    }
}
