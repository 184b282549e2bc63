//! Runtime settings for the submission tracker, read once at startup.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Server and database settings.
///
/// | Env Var                | Default                 |
/// |------------------------|-------------------------|
/// | `DATABASE_URL`         | required                |
/// | `DB_MAX_CONNECTIONS`   | `20`                    |
/// | `HOST`                 | `0.0.0.0`               |
/// | `PORT`                 | `3000`                  |
/// | `CORS_ORIGINS`         | `http://localhost:5173` |
/// | `REQUEST_TIMEOUT_SECS` | `30`                    |
///
/// JWT settings come from [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Front-end origins allowed to call the API with credentials.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

/// Read `key`, falling back to `default`, and parse it.
///
/// # Panics
///
/// Panics when the value does not parse; bad config must stop startup.
fn env_or<T>(key: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}"))
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl ServerConfig {
    /// # Panics
    ///
    /// Panics on a missing `DATABASE_URL` or `JWT_SECRET` and on unparsable
    /// numbers.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Self {
            database_url,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", "20"),
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000"),
            cors_origins: parse_origins(&env_or::<String>(
                "CORS_ORIGINS",
                "http://localhost:5173",
            )),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30"),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip = IpAddr::from_str(&self.host)?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
