pub mod models;

pub use models::{
    AdvisorChart, BollingerBand, Indicator, OverlayChart, PricePoint, Series, SignalPoint,
    SignalType,
};
