use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rolling statistic aligned index-for-index with the price series.
/// `None` marks positions without enough history for the window.
pub type Series = Vec<Option<f64>>;

/// One trading session's closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Advisor API response envelope. Only the chart is consumed; the other
/// fields the API sends (recommendation, risk, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorChart {
    #[serde(default)]
    pub ticker: Option<String>,
    pub chart: Vec<PricePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerBand {
    pub upper: Series,
    pub lower: Series,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Buy => "BUY",
            SignalType::Sell => "SELL",
        }
    }
}

/// A fast/slow crossover placed on the price line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPoint {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub date: NaiveDate,
    pub price: f64,
}

/// Raw values behind one plotted line, with the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub parameters: serde_json::Value,
    pub values: Series,
}

/// Everything the rendering layer needs to draw the advisor chart.
/// Polylines are `"x,y"` pairs joined by spaces; an empty string means
/// nothing to draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayChart {
    pub width: f64,
    pub height: f64,
    pub price: String,
    pub fast: String,
    pub slow: String,
    pub bb_upper: String,
    pub bb_lower: String,
    pub signals: Vec<SignalPoint>,
    #[serde(default)]
    pub indicators: Vec<Indicator>,
}
