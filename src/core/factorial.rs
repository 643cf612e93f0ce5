use std::collections::HashMap;

/// Largest input the cache accepts; callers reduce values modulo 10.
pub const MAX_FACTORIAL_INPUT: u8 = 9;

/// Per-processor memo of small factorials.
///
/// Inputs are bounded to `0..=9`, so results always fit in a `u64`. A fresh
/// cache is created with every processor and nothing outlives it.
#[derive(Debug, Clone, Default)]
pub struct FactorialCache {
    values: HashMap<u8, u64>,
    hits: u64,
    misses: u64,
}

impl FactorialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factorial of `n`, with `n` clamped to [`MAX_FACTORIAL_INPUT`].
    pub fn factorial(&mut self, n: u8) -> u64 {
        let n = n.min(MAX_FACTORIAL_INPUT);

        if let Some(&cached) = self.values.get(&n) {
            self.hits += 1;
            return cached;
        }
        self.misses += 1;

        let result = if n <= 1 {
            1
        } else {
            u64::from(n) * self.factorial(n - 1)
        };

        self.values.insert(n, result);
        result
    }

    /// Reduces an arbitrary numeric value to the cache's input domain:
    /// the integer part of its magnitude, modulo 10. Non-finite values have
    /// no such reduction.
    pub fn bounded_input(value: f64) -> Option<u8> {
        if !value.is_finite() {
            return None;
        }
        let magnitude = value.abs().trunc();
        Some((magnitude % 10.0) as u8)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, n: u8) -> bool {
        self.values.contains_key(&n)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
