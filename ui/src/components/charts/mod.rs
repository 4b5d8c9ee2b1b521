//! SVG chart wrappers. Each takes uniformly shaped JSON records plus the
//! names of the category and value fields, and renders the [`NoData`]
//! placeholder when nothing usable remains.

pub mod bar_chart;
pub mod donut_chart;
pub mod geometry;
pub mod line_chart;

pub use bar_chart::{BarChart, BarSeries};
pub use donut_chart::DonutChart;
pub use line_chart::LineChart;

use serde::Serialize;
use serde_json::Value;
use yew::prelude::*;

pub const NO_DATA_MESSAGE: &str = "No data available";

/// Series colors, assigned in order.
pub const CHART_COLORS: [&str; 8] = [
    "#6366f1", "#10b981", "#f59e0b", "#ef4444", "#3b82f6", "#8b5cf6",
    "#ec4899", "#14b8a6",
];

pub fn color_at(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Chart input from typed records. Records that fail to serialize are
/// dropped like any other malformed row.
pub fn records<T: Serialize>(items: &[T]) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| serde_json::to_value(item).ok())
        .collect()
}

/// Formats an axis or tooltip value.
pub fn format_value(format: Option<&Callback<f64, String>>, value: f64) -> String {
    match format {
        Some(format) => format.emit(value),
        None => payloads::format::format_count(value),
    }
}

/// Formats a category label.
pub fn format_label(format: Option<&Callback<String, String>>, label: &str) -> String {
    match format {
        Some(format) => format.emit(label.to_string()),
        None => label.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct NoDataProps {
    pub height: u32,
}

#[function_component]
pub fn NoData(props: &NoDataProps) -> Html {
    html! {
        <div
            role="status"
            class="flex items-center justify-center text-sm text-neutral-500 \
                   dark:text-neutral-400"
            style={format!("height: {}px", props.height)}
        >
            {NO_DATA_MESSAGE}
        </div>
    }
}
