// Overlay settings, loaded from a JSON file or taken from defaults
use crate::error::EngineError;
use crate::plot::Canvas;
use serde::Deserialize;
use std::path::Path;

/// Smallest windows the overlay will compute. Anything lower is raised to
/// these so the chart always has a plottable line.
pub const MIN_FAST_PERIOD: usize = 2;
pub const MIN_SLOW_PERIOD: usize = 3;
pub const MIN_BOLLINGER_PERIOD: usize = 5;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OverlaySettings {
    pub fast_period: usize,
    pub slow_period: usize,
    pub bollinger_period: usize,
    pub bollinger_k: f64,
    pub canvas: Canvas,
    pub visibility: Visibility,
}

/// Which overlays the renderer draws. Hidden overlays still shape the frame.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Visibility {
    pub price: bool,
    pub fast: bool,
    pub slow: bool,
    pub bollinger: bool,
    pub signals: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        OverlaySettings {
            fast_period: 20,
            slow_period: 50,
            bollinger_period: 20,
            bollinger_k: 2.0,
            canvas: Canvas::default(),
            visibility: Visibility::default(),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility {
            price: true,
            fast: true,
            slow: true,
            bollinger: true,
            signals: true,
        }
    }
}

impl OverlaySettings {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let settings: OverlaySettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded overlay settings");
        Ok(settings)
    }

    /// Rejects values no amount of clamping can make drawable.
    pub fn validate(&self) -> Result<(), EngineError> {
        let Canvas { width, height } = self.canvas;
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(EngineError::ConfigError(format!(
                "canvas must have a positive finite size, got {}x{}",
                width, height
            )));
        }
        if !(self.bollinger_k.is_finite() && self.bollinger_k >= 0.0) {
            return Err(EngineError::ConfigError(format!(
                "bollinger_k must be a non-negative number, got {}",
                self.bollinger_k
            )));
        }
        Ok(())
    }

    pub fn effective_fast_period(&self) -> usize {
        self.fast_period.max(MIN_FAST_PERIOD)
    }

    pub fn effective_slow_period(&self) -> usize {
        self.slow_period.max(MIN_SLOW_PERIOD)
    }

    pub fn effective_bollinger_period(&self) -> usize {
        self.bollinger_period.max(MIN_BOLLINGER_PERIOD)
    }
}
