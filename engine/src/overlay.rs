//! The advisor chart pipeline: closes in, polylines and signal markers out.
//!
//! Every call is a full, independent recompute. Nothing is cached between
//! calls and the input is never mutated.

use crate::config::OverlaySettings;
use crate::indicators::{Bollinger, IndicatorCalculator, Sma};
use crate::plot::PlotFrame;
use crate::signals::detect_crossovers;
use shared::models::{Indicator, OverlayChart, PricePoint, SignalPoint};

pub fn build_overlay(points: &[PricePoint], settings: &OverlaySettings) -> OverlayChart {
    let canvas = settings.canvas;
    let mut chart = OverlayChart {
        width: canvas.width,
        height: canvas.height,
        ..Default::default()
    };
    if points.is_empty() {
        tracing::debug!("Empty price series, nothing to plot");
        return chart;
    }

    let fast_period = settings.effective_fast_period();
    let slow_period = settings.effective_slow_period();
    let bollinger_period = settings.effective_bollinger_period();
    if (fast_period, slow_period, bollinger_period)
        != (settings.fast_period, settings.slow_period, settings.bollinger_period)
    {
        tracing::debug!(
            fast_period,
            slow_period,
            bollinger_period,
            "Clamped window lengths to their minimums"
        );
    }

    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
    let price: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();

    let fast_sma = Sma::new(fast_period);
    let slow_sma = Sma::new(slow_period);
    let bollinger = Bollinger::new(bollinger_period, settings.bollinger_k);
    let fast = fast_sma.series(&closes);
    let slow = slow_sma.series(&closes);
    let bands = bollinger.bands(&closes);

    let frame = PlotFrame::fit(
        canvas,
        closes.len(),
        [
            price.as_slice(),
            fast.as_slice(),
            slow.as_slice(),
            bands.upper.as_slice(),
            bands.lower.as_slice(),
        ],
    );

    if let Some(frame) = frame {
        chart.price = frame.polyline_values(&closes);
        chart.fast = frame.polyline(&fast);
        chart.slow = frame.polyline(&slow);
        chart.bb_upper = frame.polyline(&bands.upper);
        chart.bb_lower = frame.polyline(&bands.lower);
        chart.signals = detect_crossovers(&fast, &slow)
            .into_iter()
            .map(|crossover| {
                let point = &points[crossover.index];
                SignalPoint {
                    x: frame.x(crossover.index),
                    y: frame.y(point.close),
                    signal_type: crossover.signal_type,
                    date: point.date,
                    price: point.close,
                }
            })
            .collect();
    }

    let bollinger_name = bollinger.name();
    chart.indicators = vec![
        Indicator {
            name: fast_sma.name().to_string(),
            parameters: fast_sma.parameters(),
            values: fast,
        },
        Indicator {
            name: slow_sma.name().to_string(),
            parameters: slow_sma.parameters(),
            values: slow,
        },
        Indicator {
            name: format!("{} upper", bollinger_name),
            parameters: bollinger.parameters(),
            values: bands.upper,
        },
        Indicator {
            name: format!("{} lower", bollinger_name),
            parameters: bollinger.parameters(),
            values: bands.lower,
        },
    ];

    tracing::debug!(
        points = points.len(),
        signals = chart.signals.len(),
        "Recomputed advisor overlay"
    );
    chart
}
