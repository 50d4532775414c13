// Shared application state handed to every handler

use std::sync::Arc;

use chrono::Duration;
use sqlx::SqlitePool;

use crate::api::middleware::RateLimiters;
use crate::config::AppConfig;
use crate::domain::selection::SelectionEngine;
use crate::infrastructure::repositories::{SqliteTeamRepository, SqliteUserRepository};

/// How session tokens are signed and handed out
#[derive(Debug)]
pub struct SessionSettings {
    secret: String,
    ttl: Duration,
    secure_cookies: bool,
}

impl SessionSettings {
    pub fn new(secret: String, ttl_hours: i64, secure_cookies: bool) -> Self {
        Self {
            secret,
            ttl: Duration::hours(ttl_hours),
            secure_cookies,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub selection: Arc<SelectionEngine<SqliteTeamRepository>>,
    pub limiters: RateLimiters,
    pub session: Arc<SessionSettings>,
}

impl AppState {
    /// Builds the state over a migrated pool
    pub fn new(pool: SqlitePool, config: &AppConfig, session_secret: String) -> Self {
        let selection = SelectionEngine::new(SqliteTeamRepository::new(pool.clone()));

        Self {
            selection: Arc::new(selection),
            limiters: RateLimiters::from_config(&config.rate_limit),
            session: Arc::new(SessionSettings::new(
                session_secret,
                config.session.ttl_hours,
                config.session.secure_cookies,
            )),
            pool,
        }
    }

    pub fn teams(&self) -> SqliteTeamRepository {
        SqliteTeamRepository::new(self.pool.clone())
    }

    pub fn users(&self) -> SqliteUserRepository {
        SqliteUserRepository::new(self.pool.clone())
    }
}
