//! Process configuration read from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Store used when `DATABASE_URL` is unset: a throwaway SQLite file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// User that favorites are attributed to when a request names none.
pub const DEFAULT_USER_ID: i64 = 1;

/// SQL dialect behind a connection string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(ConfigError::UnsupportedScheme(scheme.to_string()))
        }
    }

    /// Column definition for an auto-assigned integer primary key.
    pub fn id_column(self) -> &'static str {
        match self {
            Backend::Postgres => "BIGSERIAL PRIMARY KEY",
            Backend::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub backend: Backend,
    pub host: String,
    pub port: u16,
    pub default_user_id: i64,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Read `DATABASE_URL`, `HOST`, `PORT`, `DEFAULT_USER_ID` and `SEED_DEMO_DATA`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let backend = Backend::from_url(&database_url)?;
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let default_user_id = match get("DEFAULT_USER_ID") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "DEFAULT_USER_ID", value: v })?,
            None => DEFAULT_USER_ID,
        };
        let seed_demo_data = match get("SEED_DEMO_DATA").as_deref() {
            None => false,
            Some("1") => true,
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some("0") => false,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    key: "SEED_DEMO_DATA",
                    value: v.to_string(),
                })
            }
        };

        Ok(AppConfig {
            database_url,
            backend,
            host,
            port,
            default_user_id,
            seed_demo_data,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: self.host.clone(),
            })
    }
}
