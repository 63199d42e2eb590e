// Bollinger Bands: SMA envelope at +/- k population standard deviations
use super::sma::moving_average;
use super::{IndicatorCalculator, IndicatorOutput};
use serde_json::Value;
use shared::models::BollingerBand;

pub const DEFAULT_K: f64 = 2.0;

/// Upper and lower bands around `moving_average(values, period)`.
///
/// The deviation is taken over the same window as the mean and divides by
/// `period` (population, not sample). Both edges are `None` wherever the
/// mean is.
pub fn bollinger_bands(values: &[f64], period: usize, k: f64) -> BollingerBand {
    let mid = moving_average(values, period);
    let mut upper = Vec::with_capacity(values.len());
    let mut lower = Vec::with_capacity(values.len());

    for (i, mean) in mid.iter().enumerate() {
        let Some(mean) = *mean else {
            upper.push(None);
            lower.push(None);
            continue;
        };
        let window = &values[i + 1 - period..=i];
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        let sd = variance.sqrt();
        upper.push(Some(mean + k * sd));
        lower.push(Some(mean - k * sd));
    }

    BollingerBand { upper, lower }
}

pub struct Bollinger {
    name: String,
    period: usize,
    k: f64,
}

impl Bollinger {
    pub fn new(period: usize, k: f64) -> Self {
        Self {
            name: format!("BB({}, {})", period, k),
            period,
            k,
        }
    }

    pub fn bands(&self, values: &[f64]) -> BollingerBand {
        bollinger_bands(values, self.period, self.k)
    }
}

impl IndicatorCalculator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period, "k": self.k })
    }

    fn calculate(&self, values: &[f64]) -> IndicatorOutput {
        IndicatorOutput::Band(self.bands(values))
    }
}
