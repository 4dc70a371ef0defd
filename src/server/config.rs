use sea_orm::sqlx::mysql::MySqlConnectOptions;

use crate::server::error::config::ConfigError;

const DEFAULT_DATABASE_PORT: u16 = 3306;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_PORT: u16 = 3000;

/// Where the MySQL database lives.
#[derive(Debug, PartialEq)]
pub enum DatabaseConfig {
    /// Full connection URL from `DATABASE_URL`, any credentials in it must already be
    /// percent-encoded
    Url(String),
    /// Individual `DATABASE_*` variables, used verbatim
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

impl DatabaseConfig {
    /// Connect options for the sqlx MySQL driver
    ///
    /// Parts are handed to the driver field by field and never joined into a URL, so a
    /// password may contain any character.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        match self {
            Self::Url(url) => {
                url.parse::<MySqlConnectOptions>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "DATABASE_URL".to_string(),
                        reason: e.to_string(),
                    })
            }
            Self::Parts {
                host,
                port,
                user,
                password,
                name,
            } => {
                let options = MySqlConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(name);

                if password.is_empty() {
                    Ok(options)
                } else {
                    Ok(options.password(password))
                }
            }
        }
    }
}

pub struct Config {
    pub database: DatabaseConfig,
    pub database_max_connections: u32,
    pub shopify_store_url: String,
    pub admin_token: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` passes the process environment.
    ///
    /// `DATABASE_URL` takes precedence over the individual `DATABASE_*` connection variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Parts {
                host: required(&lookup, "DATABASE_HOST")?,
                port: parse_or(&lookup, "DATABASE_PORT", DEFAULT_DATABASE_PORT)?,
                user: required(&lookup, "DATABASE_USER")?,
                password: lookup("DATABASE_PASSWORD").unwrap_or_default(),
                name: required(&lookup, "DATABASE_NAME")?,
            },
        };

        let database_max_connections = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        // Surface a malformed DATABASE_URL as a configuration error at startup
        database.connect_options()?;

        Ok(Self {
            database,
            database_max_connections,
            shopify_store_url: required(&lookup, "SHOPIFY_STORE_URL")?,
            admin_token: required(&lookup, "ADMIN_TOKEN")?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
