//! Application configuration loaded from environment variables.

use std::env;

use folio_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server over the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    /// Fill empty collections with default content before serving.
    pub seed_on_startup: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_or(env::var("DB_MAX_CONNECTIONS").ok(), 10),
            min_connections: parse_or(env::var("DB_MIN_CONNECTIONS").ok(), 1),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or(env::var("PORT").ok(), 8080),
            database,
            auto_migrate: flag(env::var("AUTO_MIGRATE").ok(), false),
            seed_on_startup: flag(env::var("SEED_ON_STARTUP").ok(), true),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// `false`/`0` (any case) switch a flag off, any other value switches it on.
fn flag(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| {
            let v = v.trim().to_lowercase();
            v != "false" && v != "0"
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_when_unset() {
        assert!(flag(None, true));
        assert!(!flag(None, false));
    }

    #[test]
    fn test_flag_parses_off_values() {
        assert!(!flag(Some("FALSE".to_string()), true));
        assert!(!flag(Some("0".to_string()), true));
        assert!(flag(Some("yes".to_string()), false));
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or::<u16>(Some("not-a-port".to_string()), 8080), 8080);
        assert_eq!(parse_or::<u16>(Some("3000".to_string()), 8080), 3000);
    }
}
