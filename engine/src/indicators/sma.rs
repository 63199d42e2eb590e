// Simple Moving Average (SMA) indicator implementation
use super::{IndicatorCalculator, IndicatorOutput};
use serde_json::Value;
use shared::models::Series;

/// Mean of the `period` values ending at each index.
///
/// Positions `0..period - 1` are `None`. A zero period, or one longer than
/// the input, yields an all-`None` series of the same length.
pub fn moving_average(values: &[f64], period: usize) -> Series {
    if period == 0 || values.len() < period {
        return vec![None; values.len()];
    }

    let mut results = vec![None; period - 1];
    // Exact per-window sum, no running total.
    for end in period..=values.len() {
        let window = &values[end - period..end];
        results.push(Some(window.iter().sum::<f64>() / period as f64));
    }
    results
}

pub struct Sma {
    name: String,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            name: format!("SMA({})", period),
            period,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn series(&self, values: &[f64]) -> Series {
        moving_average(values, self.period)
    }
}

impl IndicatorCalculator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, values: &[f64]) -> IndicatorOutput {
        IndicatorOutput::Line(self.series(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_series_eq(a: &[Option<f64>], b: &[Option<f64>]) {
        assert_eq!(a.len(), b.len(), "Series differ in length");
        for (i, (val_a, val_b)) in a.iter().zip(b.iter()).enumerate() {
            match (val_a, val_b) {
                (None, None) => {}
                (Some(x), Some(y)) => {
                    assert!((x - y).abs() < 1e-9, "Mismatch at index {}: {} != {}", i, x, y)
                }
                _ => panic!("Mismatch at index {}: {:?} != {:?}", i, val_a, val_b),
            }
        }
    }

    #[test]
    fn test_sma_calculation() {
        let results = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        // expected: None, None, (1+2+3)/3=2.0, (2+3+4)/3=3.0, (3+4+5)/3=4.0
        assert_series_eq(&results, &[None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_sma_insufficient_data() {
        let results = moving_average(&[1.0, 2.0], 3);
        assert_eq!(results, vec![None, None]);
    }

    #[test]
    fn test_sma_period_one() {
        // SMA(1) is just the close price
        let results = moving_average(&[1.0, 2.0, 3.0], 1);
        assert_series_eq(&results, &[Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_sma_period_zero_is_all_none() {
        assert_eq!(moving_average(&[1.0, 2.0, 3.0], 0), vec![None, None, None]);
    }

    #[test]
    fn test_sma_empty_data() {
        assert!(moving_average(&[], 3).is_empty());
    }

    #[test]
    fn test_sma_period_equal_to_length() {
        let results = moving_average(&[2.0, 4.0, 6.0, 8.0], 4);
        assert_series_eq(&results, &[None, None, None, Some(5.0)]);
    }

    #[test]
    fn test_sma_calculator_metadata() {
        let sma = Sma::new(20);
        assert_eq!(sma.name(), "SMA(20)");
        assert_eq!(sma.parameters(), serde_json::json!({ "period": 20 }));
        match sma.calculate(&[1.0; 25]) {
            IndicatorOutput::Line(series) => {
                assert_eq!(series.len(), 25);
                assert_eq!(series[18], None);
                assert_eq!(series[19], Some(1.0));
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_sma_matches_window_mean(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 0..120),
            period in 1usize..30,
        ) {
            let results = moving_average(&values, period);
            prop_assert_eq!(results.len(), values.len());
            for (i, value) in results.iter().enumerate() {
                if i + 1 < period {
                    prop_assert!(value.is_none());
                } else {
                    let window = &values[i + 1 - period..=i];
                    let mean = window.iter().sum::<f64>() / period as f64;
                    prop_assert_eq!(*value, Some(mean));
                }
            }
        }
    }
}
