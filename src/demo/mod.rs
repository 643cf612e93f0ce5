//! Small helpers that sit beside the record processor: numeric statistics,
//! wall-clock timing, a retrying client against a simulated endpoint and a
//! webhook probe.

pub mod retry;
pub mod stats;
pub mod timing;
pub mod webhook;

pub use retry::{
    ApiError, ApiRequest, ApiResponse, Endpoint, RetryPolicy, RetryingClient, SimulatedEndpoint,
};
pub use stats::{calculate_average, NumberSeries, Statistics};
pub use timing::{timed, timed_async};
pub use webhook::{webhook_probe, SystemInfo, WebhookProbe};
