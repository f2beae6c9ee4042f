// Runtime configuration read from the environment (and `.env` via dotenv)

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("BCRYPT_COST must be between 4 and 31, got {got}")]
    BcryptCost { got: u32 },
}

/// Service configuration
///
/// | Variable                   | Default            |
/// |----------------------------|--------------------|
/// | `DATABASE_URL`             | unset (in memory)  |
/// | `BIND_ADDR`                | `0.0.0.0:3000`     |
/// | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST` |
/// | `DATABASE_MAX_CONNECTIONS` | `5`                |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub bcrypt_cost: u32,
    pub database_max_connections: u32,
}

impl Config {
    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let bind_addr = parse(&lookup, "BIND_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        let bcrypt_cost = parse(&lookup, "BCRYPT_COST")?.unwrap_or(bcrypt::DEFAULT_COST);
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCost { got: bcrypt_cost });
        }

        let database_max_connections =
            parse(&lookup, "DATABASE_MAX_CONNECTIONS")?.unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self {
            database_url,
            bind_addr,
            bcrypt_cost,
            database_max_connections,
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|value| {
            value
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}
