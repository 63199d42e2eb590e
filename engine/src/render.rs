// Standalone SVG rendering of an overlay chart
use crate::config::Visibility;
use shared::models::{OverlayChart, SignalType};
use std::fmt::Write;

const BACKGROUND: &str = "#F8FAFC";
const BOLLINGER_COLOR: &str = "#0EA5E9";
const SLOW_COLOR: &str = "#EA580C";
const FAST_COLOR: &str = "#9333EA";
const PRICE_COLOR: &str = "#2563EB";
const BUY_COLOR: &str = "#16A34A";
const SELL_COLOR: &str = "#DC2626";
const MARKER_RADIUS: f64 = 4.5;

struct LineStyle {
    stroke: &'static str,
    width: f64,
    dashed: bool,
}

pub fn render_svg(chart: &OverlayChart, visibility: &Visibility) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = chart.width,
        h = chart.height
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}" rx="8" />"#,
        BACKGROUND
    );

    let band = LineStyle { stroke: BOLLINGER_COLOR, width: 1.4, dashed: true };
    let slow = LineStyle { stroke: SLOW_COLOR, width: 1.8, dashed: false };
    let fast = LineStyle { stroke: FAST_COLOR, width: 1.8, dashed: false };
    let price = LineStyle { stroke: PRICE_COLOR, width: 2.0, dashed: false };

    // Back to front: bands, slow, fast, price, markers.
    if visibility.bollinger {
        push_polyline(&mut svg, &chart.bb_upper, &band);
        push_polyline(&mut svg, &chart.bb_lower, &band);
    }
    if visibility.slow {
        push_polyline(&mut svg, &chart.slow, &slow);
    }
    if visibility.fast {
        push_polyline(&mut svg, &chart.fast, &fast);
    }
    if visibility.price {
        push_polyline(&mut svg, &chart.price, &price);
    }
    if visibility.signals {
        for signal in &chart.signals {
            let fill = match signal.signal_type {
                SignalType::Buy => BUY_COLOR,
                SignalType::Sell => SELL_COLOR,
            };
            let _ = writeln!(
                svg,
                r#"  <g><circle cx="{}" cy="{}" r="{}" fill="{}" /><title>{} | {} | ${:.2}</title></g>"#,
                signal.x,
                signal.y,
                MARKER_RADIUS,
                fill,
                signal.signal_type.as_str(),
                signal.date,
                signal.price
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_polyline(svg: &mut String, points: &str, style: &LineStyle) {
    if points.is_empty() {
        return;
    }
    let dash = if style.dashed { r#" stroke-dasharray="3 3""# } else { "" };
    let _ = writeln!(
        svg,
        r#"  <polyline fill="none" stroke="{}" stroke-width="{}"{} points="{}" />"#,
        style.stroke, style.width, dash, points
    );
}
