// Rolling statistics over closing prices
pub mod bollinger;
pub mod sma;

pub use bollinger::{bollinger_bands, Bollinger};
pub use sma::{moving_average, Sma};

use serde_json::Value;
use shared::models::{BollingerBand, Series};

/// Output of one indicator run; every series is aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOutput {
    Line(Series),
    Band(BollingerBand),
}

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance
    fn calculate(&self, values: &[f64]) -> IndicatorOutput;
}
