use serde_json::Value;
use yew::prelude::*;

use super::geometry::{Frame, extract_rows, line_points, nice_max, polyline, ticks};
use super::{CHART_COLORS, NoData, format_label, format_value};

const WIDTH: f64 = 600.0;
const MAX_X_LABELS: usize = 8;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Vec<Value>,
    pub x_key: AttrValue,
    pub y_key: AttrValue,
    /// Series name shown in tooltips; defaults to `y_key`.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or(260)]
    pub height: u32,
    #[prop_or_default]
    pub color: Option<AttrValue>,
    #[prop_or_default]
    pub y_format: Option<Callback<f64, String>>,
    #[prop_or_default]
    pub x_format: Option<Callback<String, String>>,
}

#[function_component]
pub fn LineChart(props: &Props) -> Html {
    let rows = extract_rows(&props.data, &props.x_key, &[props.y_key.as_str()]);
    if rows.is_empty() {
        return html! { <NoData height={props.height} /> };
    }

    let frame = Frame::new(WIDTH, props.height as f64);
    let values: Vec<f64> = rows.iter().map(|row| row.values[0]).collect();
    let max = nice_max(values.iter().copied().fold(0.0, f64::max));
    let points = line_points(&values, &frame, max);
    let color = props
        .color
        .clone()
        .unwrap_or_else(|| AttrValue::from(CHART_COLORS[0]));
    let name = props.name.clone().unwrap_or_else(|| props.y_key.clone());
    let label_every = rows.len().div_ceil(MAX_X_LABELS).max(1);

    let grid = ticks(max, 4).into_iter().map(|tick| {
        let y = frame.y(tick, max);
        html! {
            <g>
                <line
                    x1={frame.left.to_string()} x2={(frame.width - frame.right).to_string()}
                    y1={y.to_string()} y2={y.to_string()}
                    class="stroke-neutral-200 dark:stroke-neutral-700"
                />
                <text
                    x={(frame.left - 8.0).to_string()} y={(y + 4.0).to_string()}
                    text-anchor="end"
                    class="fill-neutral-500 text-[10px]"
                >
                    {format_value(props.y_format.as_ref(), tick)}
                </text>
            </g>
        }
    });

    let markers = rows.iter().zip(&points).enumerate().map(|(i, (row, (x, y)))| {
        let label = format_label(props.x_format.as_ref(), &row.label);
        let value = format_value(props.y_format.as_ref(), row.values[0]);
        html! {
            <g>
                <circle cx={x.to_string()} cy={y.to_string()} r="3" fill={color.clone()}>
                    <title>{format!("{label}\n{name}: {value}")}</title>
                </circle>
                if i % label_every == 0 {
                    <text
                        x={x.to_string()} y={(frame.baseline() + 18.0).to_string()}
                        text-anchor="middle"
                        class="fill-neutral-500 text-[10px]"
                    >
                        {label.clone()}
                    </text>
                }
            </g>
        }
    });

    html! {
        <svg
            viewBox={format!("0 0 {WIDTH} {}", props.height)}
            class="w-full"
            style={format!("height: {}px", props.height)}
            role="img"
        >
            {for grid}
            <polyline
                points={polyline(&points)}
                fill="none"
                stroke={color.clone()}
                stroke-width="2"
            />
            {for markers}
        </svg>
    }
}
