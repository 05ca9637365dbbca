use std::env;
use std::time::Duration;

/// Upper bound for the blocking thread pool size derived from the DB pool.
pub const MAX_BLOCKING_THREADS: usize = 128;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub app_env: String,
    pub base_url: String,

    // Database
    pub database: DatabaseConfig,
}

/// Data source settings for the connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect_string: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            base_url: env::var("BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:8080/api/v1".to_string()),

            database: DatabaseConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            connect_string: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/terms".to_string()),
            user: env::var("DB_USER").ok().filter(|v| !v.is_empty()),
            password: env::var("DB_PASSWORD").ok().filter(|v| !v.is_empty()),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            acquire_timeout_secs: env::var("DB_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),
            idle_timeout_secs: env::var("DB_IDLE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .unwrap_or(600), // 10 minutes
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Blocking thread pool size for the runtime: one extra thread for
    /// every five pool connections, never more than [`MAX_BLOCKING_THREADS`].
    pub fn thread_pool_hint(&self) -> usize {
        thread_pool_hint(self.max_connections)
    }
}

pub fn thread_pool_hint(max_connections: u32) -> usize {
    let max = max_connections as usize;
    (max + max / 5).clamp(1, MAX_BLOCKING_THREADS)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
