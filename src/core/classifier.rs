use super::constants::{DEFAULT_THRESHOLD, TEXT_HIGH_LEN, TEXT_MEDIUM_LEN};
use super::types::{Tier, Value};

/// Assigns a [`Tier`] to a record's `value` field relative to a threshold.
///
/// Numeric values (including numeric text and booleans) are compared against
/// the threshold: strictly above twice the threshold is high, strictly above
/// the threshold is medium. Text that is not numeric is tiered by its length.
/// Anything else is low. Classification never fails.
#[derive(Debug, Clone, Copy)]
pub struct TierClassifier {
    threshold: u32,
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl TierClassifier {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn classify(&self, value: &Value) -> Tier {
        classify_value(value, self.threshold)
    }
}

pub fn classify_value(value: &Value, threshold: u32) -> Tier {
    if let Some(number) = value.coerce_number() {
        return classify_number(number, threshold);
    }

    match value {
        Value::Text(text) => classify_text(text),
        _ => Tier::Low,
    }
}

pub fn classify_number(number: f64, threshold: u32) -> Tier {
    let threshold = f64::from(threshold);
    if number > threshold * 2.0 {
        Tier::High
    } else if number > threshold {
        Tier::Medium
    } else {
        Tier::Low
    }
}

fn classify_text(text: &str) -> Tier {
    let len = text.chars().count();
    if len > TEXT_HIGH_LEN {
        Tier::High
    } else if len > TEXT_MEDIUM_LEN {
        Tier::Medium
    } else {
        Tier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Record;
    use proptest::prelude::*;

    #[test]
    fn test_numeric_boundaries() {
        let classifier = TierClassifier::new(10);
        assert_eq!(classifier.classify(&Value::from(21)), Tier::High);
        assert_eq!(classifier.classify(&Value::from(20)), Tier::Medium);
        assert_eq!(classifier.classify(&Value::from(11)), Tier::Medium);
        assert_eq!(classifier.classify(&Value::from(10)), Tier::Low);
        assert_eq!(classifier.classify(&Value::from(-5)), Tier::Low);
        assert_eq!(classifier.classify(&Value::from(20.5)), Tier::High);
    }

    #[test]
    fn test_numeric_text_is_compared_as_number() {
        let classifier = TierClassifier::default();
        assert_eq!(classifier.classify(&Value::from("25")), Tier::High);
        assert_eq!(classifier.classify(&Value::from(" 15.5 ")), Tier::Medium);
        assert_eq!(classifier.classify(&Value::from("3")), Tier::Low);
    }

    #[test]
    fn test_text_length_boundaries_are_strict() {
        let classifier = TierClassifier::default();
        assert_eq!(classifier.classify(&Value::from("a".repeat(10))), Tier::Low);
        assert_eq!(classifier.classify(&Value::from("a".repeat(11))), Tier::Medium);
        assert_eq!(classifier.classify(&Value::from("a".repeat(20))), Tier::Medium);
        assert_eq!(classifier.classify(&Value::from("a".repeat(21))), Tier::High);
    }

    #[test]
    fn test_text_length_counts_characters() {
        // 11 characters, 22 bytes
        let text = "é".repeat(11);
        assert_eq!(classify_value(&Value::from(text), 10), Tier::Medium);
    }

    #[test]
    fn test_non_numeric_values_degrade_to_low() {
        assert_eq!(classify_value(&Value::Null, 10), Tier::Low);
        assert_eq!(classify_value(&Value::List(vec![Value::from(100)]), 10), Tier::Low);
        assert_eq!(classify_value(&Value::Map(Record::new().with("x", 100)), 10), Tier::Low);
        assert_eq!(classify_value(&Value::from(f64::NAN), 10), Tier::Low);
    }

    #[test]
    fn test_booleans_count_as_numbers() {
        assert_eq!(classify_value(&Value::from(true), 0), Tier::High);
        assert_eq!(classify_value(&Value::from(true), 1), Tier::Low);
    }

    proptest! {
        #[test]
        fn prop_numeric_classification(v in -1.0e6f64..1.0e6, t in 1u32..10_000) {
            let tier = classify_value(&Value::from(v), t);
            let t = f64::from(t);
            let expected = if v > 2.0 * t {
                Tier::High
            } else if v > t {
                Tier::Medium
            } else {
                Tier::Low
            };
            prop_assert_eq!(tier, expected);
        }

        #[test]
        fn prop_text_classification(s in "[a-zA-Z ]{0,40}", t in 1u32..100) {
            prop_assume!(s.trim().parse::<f64>().is_err());
            let tier = classify_value(&Value::from(s.clone()), t);
            let len = s.chars().count();
            let expected = if len > 20 {
                Tier::High
            } else if len > 10 {
                Tier::Medium
            } else {
                Tier::Low
            };
            prop_assert_eq!(tier, expected);
        }
    }
}
