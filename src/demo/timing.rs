use std::future::Future;
use std::time::{Duration, Instant};
use tracing::debug;

/// Runs `f` and returns its output with the elapsed wall time.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();
    debug!("{label} took {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    (output, elapsed)
}

pub async fn timed_async<F: Future>(label: &str, future: F) -> (F::Output, Duration) {
    let start = Instant::now();
    let output = future.await;
    let elapsed = start.elapsed();
    debug!("{label} took {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    (output, elapsed)
}
