//! Affine mapping of aligned series onto a fixed logical canvas.
//!
//! Index maps linearly onto `0..=width`; value maps onto `height..=0`
//! (inverted, larger values plot higher) within one shared min/max frame.

use serde::{Deserialize, Serialize};

/// Logical drawing area. Renderers scale it as they see fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 220.0,
        }
    }
}

/// Shared coordinate frame for every line drawn together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    canvas: Canvas,
    len: usize,
    min: f64,
    max: f64,
}

impl PlotFrame {
    /// Fits a frame around every non-null value in `series`, all of which
    /// must be aligned to `len` points.
    ///
    /// Returns `None` for the no-plot cases: fewer than two points, or no
    /// value at all to anchor the range.
    pub fn fit<'a, I>(canvas: Canvas, len: usize, series: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [Option<f64>]>,
    {
        if len <= 1 {
            return None;
        }

        let (min, max) = series
            .into_iter()
            .flat_map(|s| s.iter().flatten().copied())
            .fold(None, |range: Option<(f64, f64)>, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        Some(Self { canvas, len, min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn x(&self, index: usize) -> f64 {
        (index as f64 / (self.len - 1) as f64) * self.canvas.width
    }

    pub fn y(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        // Flat frame: every value sits on the baseline instead of dividing by zero.
        let range = if range == 0.0 { 1.0 } else { range };
        self.canvas.height - ((value - self.min) / range) * self.canvas.height
    }

    /// `"x,y x,y ..."` for the non-null points of `series`, gaps omitted.
    pub fn polyline(&self, series: &[Option<f64>]) -> String {
        let mut points = String::new();
        for (i, value) in series.iter().enumerate() {
            let Some(value) = value else { continue };
            if !points.is_empty() {
                points.push(' ');
            }
            points.push_str(&format!("{},{}", self.x(i), self.y(*value)));
        }
        points
    }

    /// Polyline for a fully populated series such as the closes themselves.
    pub fn polyline_values(&self, values: &[f64]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{},{}", self.x(i), self.y(*v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
