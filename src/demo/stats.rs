use serde::{Deserialize, Serialize};

/// Arithmetic mean; `0.0` for an empty slice.
pub fn calculate_average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// A series of numbers that can be doubled once in place.
#[derive(Debug, Clone, Default)]
pub struct NumberSeries {
    data: Vec<f64>,
    processed: bool,
}

impl NumberSeries {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            processed: false,
        }
    }

    /// Doubles every element. Only the first call has an effect.
    pub fn process(&mut self) {
        if self.processed {
            return;
        }
        self.data.iter_mut().for_each(|x| *x *= 2.0);
        self.processed = true;
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn statistics(&self) -> Option<Statistics> {
        if self.data.is_empty() {
            return None;
        }

        let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Statistics {
            min,
            max,
            average: calculate_average(&self.data),
        })
    }
}
