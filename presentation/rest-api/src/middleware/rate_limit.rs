//! Token-bucket admission control.
//!
//! One bucket is shared by every route. Each request takes a token; tokens
//! refill continuously at `per_second` up to `burst`. A request that finds the
//! bucket empty is answered with `429 Too Many Requests` without reaching the
//! wrapped endpoint.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use poem::http::{StatusCode, header};
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};
use tracing::warn;

use crate::api::error::ErrorResponse;
use crate::config::rate_limit_config::RateLimitConfig;

pub struct TokenBucket {
    capacity: f64,
    refill_per_second: f64,
    state: Mutex<BucketState>,
}

struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    /// A full bucket. Capacity is at least one token.
    pub fn new(config: &RateLimitConfig) -> Self {
        let capacity = f64::from(config.burst.max(1));
        Self {
            capacity,
            refill_per_second: f64::from(config.per_second),
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        }
    }

    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> bool {
        // The guarded section is plain arithmetic, so a poisoned lock still
        // holds a consistent state.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let elapsed = now.saturating_duration_since(state.last_refill);
        state.tokens =
            (state.tokens + elapsed.as_secs_f64() * self.refill_per_second).min(self.capacity);
        state.last_refill = now;

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Middleware rejecting requests once the shared bucket runs dry.
#[derive(Clone)]
pub struct RateLimit {
    bucket: Arc<TokenBucket>,
}

impl RateLimit {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            bucket: Arc::new(TokenBucket::new(config)),
        }
    }
}

impl<E: Endpoint> Middleware<E> for RateLimit {
    type Output = RateLimitEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RateLimitEndpoint {
            inner: ep,
            bucket: self.bucket.clone(),
        }
    }
}

pub struct RateLimitEndpoint<E> {
    inner: E,
    bucket: Arc<TokenBucket>,
}

impl<E: Endpoint> Endpoint for RateLimitEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        if !self.bucket.try_acquire() {
            warn!(path = %req.uri().path(), "Rate limit exceeded");
            return Ok(too_many_requests());
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

fn too_many_requests() -> Response {
    Json(ErrorResponse {
        error: "Too many requests".to_string(),
    })
    .with_status(StatusCode::TOO_MANY_REQUESTS)
    .with_header(header::RETRY_AFTER, "1")
    .into_response()
}
