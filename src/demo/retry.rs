use async_trait::async_trait;
use futures::future::join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub id: u32,
    pub path: String,
}

impl ApiRequest {
    pub fn new(id: u32, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub request_id: u32,
    pub status: u16,
    pub body: String,
    /// Attempts it took to get this response, filled in by the client
    pub attempts: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request {request_id} failed: {reason}")]
    Transient { request_id: u32, reason: String },

    #[error("service unavailable (status {status})")]
    Unavailable { status: u16 },

    #[error("request rejected: {reason}")]
    Rejected { reason: String },

    #[error("giving up after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last_error: Box<ApiError>,
    },
}

impl ApiError {
    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. } | Self::Unavailable { .. })
    }
}

#[async_trait]
pub trait Endpoint: Send + Sync {
    async fn call(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Endpoint that fails at random with a fixed probability.
pub struct SimulatedEndpoint {
    failure_rate: f64,
    latency: Duration,
    rng: Mutex<StdRng>,
    calls: AtomicU32,
}

impl SimulatedEndpoint {
    pub fn new(failure_rate: f64) -> Self {
        Self::from_rng(failure_rate, StdRng::from_entropy())
    }

    /// Reproducible failure sequence for a given seed.
    pub fn with_seed(failure_rate: f64, seed: u64) -> Self {
        Self::from_rng(failure_rate, StdRng::seed_from_u64(seed))
    }

    fn from_rng(failure_rate: f64, rng: StdRng) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
            latency: Duration::from_millis(5),
            rng: Mutex::new(rng),
            calls: AtomicU32::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Endpoint for SimulatedEndpoint {
    async fn call(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;

        if request.path.is_empty() {
            return Err(ApiError::Rejected {
                reason: "empty path".to_string(),
            });
        }

        let roll: f64 = self.rng.lock().await.gen();
        if roll < self.failure_rate / 2.0 {
            return Err(ApiError::Transient {
                request_id: request.id,
                reason: "connection reset".to_string(),
            });
        }
        if roll < self.failure_rate {
            return Err(ApiError::Unavailable { status: 503 });
        }

        Ok(ApiResponse {
            request_id: request.id,
            status: 200,
            body: format!("ok: {}", request.path),
            attempts: 1,
        })
    }
}

/// Exponential backoff with jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: f64,
    pub max_delay: Duration,
    /// Jitter is drawn uniformly from `[0, delay * jitter_ratio]`
    pub jitter_ratio: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_secs(5),
            jitter_ratio: 0.5,
        }
    }
}

impl RetryPolicy {
    pub fn first_delay(&self) -> Duration {
        self.initial_delay.min(self.max_delay)
    }

    /// Grows `current` by the multiplier, capped at `max_delay`.
    pub fn next_delay(&self, current: Duration) -> Duration {
        let scaled = current.as_secs_f64() * self.backoff_multiplier;
        Duration::try_from_secs_f64(scaled).map_or(self.max_delay, |d| d.min(self.max_delay))
    }

    pub fn jitter<R: Rng + ?Sized>(&self, delay: Duration, rng: &mut R) -> Duration {
        let bound = delay.as_secs_f64() * self.jitter_ratio;
        if !(bound.is_finite() && bound > 0.0) {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(Uniform::new_inclusive(0.0, bound).sample(rng))
    }
}

/// Client that retries retryable failures according to a [`RetryPolicy`].
pub struct RetryingClient<E> {
    endpoint: E,
    policy: RetryPolicy,
    jitter_rng: Mutex<StdRng>,
}

impl<E: Endpoint> RetryingClient<E> {
    pub fn new(endpoint: E, policy: RetryPolicy) -> Self {
        Self {
            endpoint,
            policy,
            jitter_rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Draws backoff jitter from a seeded generator so runs are reproducible.
    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Backoff delay plus a jitter sample from the client's generator.
    pub async fn backoff_wait(&self, delay: Duration) -> Duration {
        let mut rng = self.jitter_rng.lock().await;
        delay + self.policy.jitter(delay, &mut *rng)
    }

    /// Makes at most `max_retries + 1` attempts. Non-retryable errors are
    /// returned immediately without wrapping.
    pub async fn call_with_retry(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut delay = self.policy.first_delay();
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            match self.endpoint.call(request).await {
                Ok(mut response) => {
                    response.attempts = attempt;
                    if attempt > 1 {
                        info!("request {} succeeded after {} attempts", request.id, attempt);
                    }
                    return Ok(response);
                }
                Err(error) if !error.is_retryable() => {
                    warn!("request {} failed permanently: {}", request.id, error);
                    return Err(error);
                }
                Err(error) => {
                    if attempt > self.policy.max_retries {
                        warn!("request {} exhausted {} attempts: {}", request.id, attempt, error);
                        return Err(ApiError::RetriesExhausted {
                            attempts: attempt,
                            last_error: Box::new(error),
                        });
                    }

                    let wait = self.backoff_wait(delay).await;
                    debug!(
                        "request {} attempt {} failed ({}), retrying in {:?}",
                        request.id, attempt, error, wait
                    );
                    tokio::time::sleep(wait).await;
                    delay = self.policy.next_delay(delay);
                }
            }
        }
    }

    /// Issues every request concurrently; outcomes are indexed like `requests`.
    pub async fn call_batch(&self, requests: &[ApiRequest]) -> Vec<Result<ApiResponse, ApiError>> {
        join_all(requests.iter().map(|request| self.call_with_retry(request))).await
    }
}
