use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultDirectRateLimiter, DefaultKeyedRateLimiter, Quota, RateLimiter};
use tokio::task::JoinHandle;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::config::RateLimitConfig;

type ClientLimiter = DefaultKeyedRateLimiter<IpAddr>;

/// Rate limiters for the endpoints that must not be hammered
///
/// - api: every `/api` request, per client IP
/// - randomize: one draw per configured interval, across all callers
/// - register/login: a burst of attempts per client IP per window
///
/// A limiter that is `None` lets every request through.
#[derive(Clone, Default)]
pub struct RateLimiters {
    api: Option<Arc<ClientLimiter>>,
    randomize: Option<Arc<DefaultDirectRateLimiter>>,
    auth: Option<Arc<ClientLimiter>>,
}

/// `max` requests per `window_secs`, refilled evenly across the window
fn per_client(max: u32, window_secs: u64) -> Option<Arc<ClientLimiter>> {
    let max = NonZeroU32::new(max)?;
    Quota::with_period(Duration::from_secs(window_secs) / max.get())
        .map(|quota| Arc::new(RateLimiter::keyed(quota.allow_burst(max))))
}

impl RateLimiters {
    pub fn from_config(config: &RateLimitConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        Self {
            api: per_client(config.api_max_requests, config.api_window_secs),
            randomize: Quota::with_period(Duration::from_millis(config.randomize_interval_ms))
                .map(|quota| Arc::new(RateLimiter::direct(quota))),
            auth: per_client(config.auth_max_attempts, config.auth_window_secs),
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn check_api(&self, client: IpAddr) -> Result<(), ApiError> {
        match &self.api {
            Some(limiter) if limiter.check_key(&client).is_err() => Err(
                ApiError::too_many_requests("Too many requests, please try again later"),
            ),
            _ => Ok(()),
        }
    }

    pub fn check_randomize(&self) -> Result<(), ApiError> {
        match &self.randomize {
            Some(limiter) if limiter.check().is_err() => Err(ApiError::too_many_requests(
                "Please wait before picking another team",
            )),
            _ => Ok(()),
        }
    }

    pub fn check_auth(&self, client: IpAddr) -> Result<(), ApiError> {
        match &self.auth {
            Some(limiter) if limiter.check_key(&client).is_err() => {
                Err(ApiError::too_many_requests(
                    "Too many login attempts, please try again later",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Drops per-client state that has fully refilled
    pub fn prune(&self) {
        for limiter in [&self.api, &self.auth].into_iter().flatten() {
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    }

    /// Prunes the per-client limiters every `every` until the task is aborted
    pub fn spawn_pruning(&self, every: Duration) -> JoinHandle<()> {
        let limiters = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                limiters.prune();
            }
        })
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.auth.as_ref().map_or(0, |limiter| limiter.len())
    }
}

/// Applies the per-client `/api` quota before the route runs
pub async fn limit_api_requests(
    State(state): State<AppState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.limiters.check_api(client.ip())?;

    Ok(next.run(request).await)
}
