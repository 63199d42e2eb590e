// Engine library root
// Indicator overlay for the trading-advisor chart: rolling statistics,
// crossover signals and the coordinate mapping that turns them into polylines.

pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod overlay;
pub mod plot;
pub mod render;
pub mod signals;

pub use config::OverlaySettings;
pub use error::EngineError;
pub use overlay::build_overlay;
