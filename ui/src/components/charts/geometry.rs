//! Pure layout math for the SVG charts.

use serde_json::Value;
use std::f64::consts::{FRAC_PI_2, TAU};

/// One category with a value per requested series.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub values: Vec<f64>,
}

fn category(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Pull `x_key` and `y_keys` out of uniformly shaped JSON records.
///
/// Records without a category, or without any numeric value, are skipped.
/// A missing series value within an otherwise valid record counts as zero.
pub fn extract_rows(data: &[Value], x_key: &str, y_keys: &[&str]) -> Vec<Row> {
    data.iter()
        .filter_map(|record| {
            let label = category(record.get(x_key)?)?;
            let values: Vec<Option<f64>> = y_keys
                .iter()
                .map(|key| record.get(*key).and_then(Value::as_f64))
                .collect();
            if values.iter().all(Option::is_none) {
                return None;
            }
            Some(Row {
                label,
                values: values.into_iter().map(|v| v.unwrap_or(0.0)).collect(),
            })
        })
        .collect()
}

/// Round up to 1, 2, 5 or 10 times a power of ten. Never below 1.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let scaled = max / magnitude;
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|step| scaled <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced axis values from 0 to `max`, inclusive.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| max * i as f64 / count as f64)
        .collect()
}

/// Drawing area inside an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 56.0,
            right: 16.0,
            top: 12.0,
            bottom: 32.0,
        }
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = bottom;
        self
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    /// Vertical position of `value` on a 0..=max scale.
    pub fn y(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
        self.baseline() - ratio * self.plot_height()
    }
}

/// Evenly spread points; a single point sits in the middle.
pub fn line_points(values: &[f64], frame: &Frame, max: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if n <= 1 {
                frame.left + frame.plot_width() / 2.0
            } else {
                frame.left + frame.plot_width() * i as f64 / (n - 1) as f64
            };
            (x, frame.y(*value, max))
        })
        .collect()
}

pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal slot per category: (left edge, width) of the bar group,
/// capped at `max_width` and centered in its band.
pub fn bar_slots(count: usize, frame: &Frame, max_width: f64) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let band = frame.plot_width() / count as f64;
    let width = (band * 0.8).min(max_width).max(1.0);
    (0..count)
        .map(|i| (frame.left + band * i as f64 + (band - width) / 2.0, width))
        .collect()
}

/// Start and end angles (radians, clockwise from twelve o'clock) for each
/// share of the total. Non-positive values get an empty arc.
pub fn donut_arcs(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 {
                TAU * value / total
            } else {
                0.0
            };
            let arc = (start, start + sweep);
            start += sweep;
            arc
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// SVG path for a ring segment.
pub fn ring_segment(
    center: (f64, f64),
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> String {
    let (cx, cy) = center;
    // a full circle collapses to a point, so stop just short of it
    let end = if end - start >= TAU { start + TAU - 1e-4 } else { end };
    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    format!(
        "M {x0:.2} {y0:.2} A {outer} {outer} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {inner} {inner} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}
