/// Configuration for record processing and the bundled demos.
///
/// Everything lives in one [`UnifiedConfig`] that round-trips through TOML.
/// Each section has its own struct so callers can take only what they need:
/// the processor reads [`ProcessingConfig`], the retry demo converts
/// [`RetryConfig`] into a policy.
pub mod unified;

pub use unified::{OutputConfig, ProcessingConfig, RetryConfig, UnifiedConfig};
