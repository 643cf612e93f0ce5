//! Retrying client against the simulated endpoint.

use record_tier::core::config::RetryConfig;
use record_tier::demo::{ApiError, ApiRequest, RetryPolicy, RetryingClient, SimulatedEndpoint};
use std::time::Duration;

fn quick_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(2),
        ..RetryPolicy::default()
    }
}

#[tokio::test]
async fn test_always_failing_endpoint_exhausts_retries() {
    let endpoint = SimulatedEndpoint::with_seed(1.0, 11).with_latency(Duration::ZERO);
    let client = RetryingClient::new(endpoint, quick_policy(4));

    let err = client
        .call_with_retry(&ApiRequest::new(1, "/records/1"))
        .await
        .unwrap_err();

    match err {
        ApiError::RetriesExhausted { attempts, last_error } => {
            assert_eq!(attempts, 5);
            assert!(last_error.is_retryable());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(client.endpoint().calls(), 5);
}

#[tokio::test]
async fn test_batch_against_reliable_endpoint() {
    let endpoint = SimulatedEndpoint::with_seed(0.0, 11).with_latency(Duration::from_millis(1));
    let client = RetryingClient::new(endpoint, quick_policy(2));
    let requests: Vec<ApiRequest> = (0..8)
        .map(|id| ApiRequest::new(id, format!("/records/{id}")))
        .collect();

    let outcomes = client.call_batch(&requests).await;

    assert_eq!(outcomes.len(), 8);
    for (request, outcome) in requests.iter().zip(outcomes) {
        let response = outcome.unwrap();
        assert_eq!(response.request_id, request.id);
        assert_eq!(response.attempts, 1);
        assert_eq!(response.body, format!("ok: {}", request.path));
    }
    assert_eq!(client.endpoint().calls(), 8);
}

#[tokio::test]
async fn test_attempt_count_never_exceeds_policy() {
    let endpoint = SimulatedEndpoint::with_seed(0.6, 99).with_latency(Duration::ZERO);
    let client = RetryingClient::new(endpoint, quick_policy(2));
    let requests: Vec<ApiRequest> = (0..20).map(|id| ApiRequest::new(id, "/x")).collect();

    for outcome in client.call_batch(&requests).await {
        match outcome {
            Ok(response) => assert!(response.attempts <= 3),
            Err(ApiError::RetriesExhausted { attempts, .. }) => assert_eq!(attempts, 3),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert!(client.endpoint().calls() <= 60);
}

#[test]
fn test_policy_from_config() {
    let config = RetryConfig {
        max_retries: 1,
        initial_delay_ms: 50,
        max_delay_ms: 80,
        backoff_multiplier: 3.0,
        jitter_ratio: 0.0,
    };
    let policy = config.to_policy();

    assert_eq!(policy.first_delay(), Duration::from_millis(50));
    assert_eq!(policy.next_delay(policy.first_delay()), Duration::from_millis(80));
}
