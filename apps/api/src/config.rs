// Runtime configuration
// Read from the environment, with `.env` loaded first when present

use chrono::Duration;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_JWT_SECRET: &str = "dev-secret-key";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 8;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings shared by password hashing and token issuing
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Service configuration
///
/// | Variable          | Default        |
/// |-------------------|----------------|
/// | `BIND_ADDR`       | `0.0.0.0:3000` |
/// | `DATA_DIR`        | unset (memory) |
/// | `JWT_SECRET`      | dev secret     |
/// | `TOKEN_TTL_HOURS` | `8`            |
/// | `BCRYPT_COST`     | bcrypt default |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Directory for file-backed storage; `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
    pub auth: AuthSettings,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => parse_var("BIND_ADDR", value)?,
            None => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let data_dir = lookup("DATA_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        if data_dir.is_none() {
            tracing::warn!("DATA_DIR not set, teams and users will be kept in memory only");
        }

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let token_ttl_hours: i64 = match lookup("TOKEN_TTL_HOURS") {
            Some(value) => parse_var("TOKEN_TTL_HOURS", value)?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };
        if token_ttl_hours <= 0 {
            return Err(ConfigError::Invalid {
                var: "TOKEN_TTL_HOURS",
                value: token_ttl_hours.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let bcrypt_cost: u32 = match lookup("BCRYPT_COST") {
            Some(value) => parse_var("BCRYPT_COST", value)?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                var: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            data_dir,
            auth: AuthSettings {
                jwt_secret,
                token_ttl: Duration::hours(token_ttl_hours),
                bcrypt_cost,
            },
        })
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}
