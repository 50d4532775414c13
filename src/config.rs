use serde::Deserialize;

/// Application configuration
///
/// Loaded from `config/default.*`, then `config/local.*`, then `TEAMDRAW__*`
/// environment variables (e.g. `TEAMDRAW__SERVER__PORT=3001`). Every field
/// has a default, so an empty environment yields a working development setup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Front-end origin allowed to make credentialed requests
    pub cors_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Signing key for session tokens; a random one is generated when unset
    pub secret: Option<String>,
    pub ttl_hours: i64,
    /// Marks the session cookie `Secure` and `SameSite=Strict`
    pub secure_cookies: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Minimum spacing between two randomize calls
    pub randomize_interval_ms: u64,
    /// Register/login attempts allowed per client IP within `auth_window_secs`
    pub auth_max_attempts: u32,
    pub auth_window_secs: u64,
    /// Requests to `/api` allowed per client IP within `api_window_secs`
    pub api_max_requests: u32,
    pub api_window_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://teamdraw.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_hours: 24,
            secure_cookies: false,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            randomize_interval_ms: 2_000,
            auth_max_attempts: 10,
            auth_window_secs: 15 * 60,
            api_max_requests: 100,
            api_window_secs: 15 * 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("TEAMDRAW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl SessionConfig {
    /// Returns the configured secret, or a fresh random one in development
    ///
    /// A generated secret invalidates every session on restart, so it is
    /// refused when `secure_cookies` marks a production deployment.
    pub fn resolve_secret(&self) -> Result<String, config::ConfigError> {
        match &self.secret {
            Some(secret) if !secret.is_empty() => Ok(secret.clone()),
            _ if self.secure_cookies => Err(config::ConfigError::Message(
                "session.secret must be set when secure_cookies is enabled".to_string(),
            )),
            _ => {
                tracing::warn!("session secret not set, generated a temporary one");
                Ok(generate_secret())
            }
        }
    }
}

fn generate_secret() -> String {
    use rand::RngCore;

    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
