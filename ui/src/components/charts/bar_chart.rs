use serde_json::Value;
use yew::prelude::*;

use super::geometry::{Frame, bar_slots, extract_rows, nice_max, ticks};
use super::{NoData, color_at, format_label, format_value};

const WIDTH: f64 = 600.0;
const MAX_BAR_WIDTH: f64 = 48.0;

/// One value field of the records, drawn as its own bar or stack layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub key: AttrValue,
    pub name: AttrValue,
    pub color: Option<AttrValue>,
    /// Series sharing an id are stacked on top of each other.
    pub stack_id: Option<AttrValue>,
}

impl BarSeries {
    pub fn new(key: impl Into<AttrValue>, name: impl Into<AttrValue>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            color: None,
            stack_id: None,
        }
    }

    pub fn color(mut self, color: impl Into<AttrValue>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn stacked(mut self, stack_id: impl Into<AttrValue>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Vec<Value>,
    pub x_key: AttrValue,
    pub series: Vec<BarSeries>,
    #[prop_or(260)]
    pub height: u32,
    #[prop_or_default]
    pub legend: bool,
    /// Rotation of the category labels in degrees, for long names.
    #[prop_or_default]
    pub tick_angle: i32,
    #[prop_or_default]
    pub y_format: Option<Callback<f64, String>>,
    #[prop_or_default]
    pub x_format: Option<Callback<String, String>>,
}

/// Groups series into columns: stacked series share one column, every
/// other series gets its own.
fn columns(series: &[BarSeries]) -> Vec<Vec<usize>> {
    let mut columns: Vec<(Option<&AttrValue>, Vec<usize>)> = Vec::new();
    for (index, s) in series.iter().enumerate() {
        match s.stack_id.as_ref() {
            Some(id) => match columns.iter_mut().find(|(key, _)| *key == Some(id)) {
                Some((_, members)) => members.push(index),
                None => columns.push((Some(id), vec![index])),
            },
            None => columns.push((None, vec![index])),
        }
    }
    columns.into_iter().map(|(_, members)| members).collect()
}

#[function_component]
pub fn BarChart(props: &Props) -> Html {
    let keys: Vec<&str> = props.series.iter().map(|s| s.key.as_str()).collect();
    let rows = extract_rows(&props.data, &props.x_key, &keys);
    if rows.is_empty() || props.series.is_empty() {
        return html! { <NoData height={props.height} /> };
    }

    let columns = columns(&props.series);
    let highest = rows
        .iter()
        .flat_map(|row| {
            columns
                .iter()
                .map(|members| members.iter().map(|i| row.values[*i].max(0.0)).sum::<f64>())
        })
        .fold(0.0, f64::max);
    let max = nice_max(highest);

    let bottom = if props.tick_angle != 0 { 72.0 } else { 32.0 };
    let frame = Frame::new(WIDTH, props.height as f64).with_bottom(bottom);
    let slots = bar_slots(rows.len(), &frame, MAX_BAR_WIDTH * columns.len() as f64);
    let color_of = |index: usize| {
        props.series[index]
            .color
            .clone()
            .unwrap_or_else(|| AttrValue::from(color_at(index)))
    };

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

    let bars = rows.iter().zip(&slots).map(|(row, (left, width))| {
        let column_width = width / columns.len() as f64;
        let label = format_label(props.x_format.as_ref(), &row.label);
        let label_x = left + width / 2.0;
        let label_y = frame.baseline() + 16.0;
        let transform = (props.tick_angle != 0)
            .then(|| format!("rotate({} {label_x} {label_y})", props.tick_angle));
        let anchor = if props.tick_angle != 0 { "end" } else { "middle" };

        let rects = columns.iter().enumerate().flat_map(|(c, members)| {
            let x = left + column_width * c as f64;
            let mut base = 0.0;
            members
                .iter()
                .map(|index| {
                    let value = row.values[*index].max(0.0);
                    let top = frame.y(base + value, max);
                    let bottom = frame.y(base, max);
                    base += value;
                    let tooltip = format!(
                        "{label}\n{}: {}",
                        props.series[*index].name,
                        format_value(props.y_format.as_ref(), row.values[*index])
                    );
                    html! {
                        <rect
                            x={x.to_string()} y={top.to_string()}
                            width={(column_width - 1.0).max(1.0).to_string()}
                            height={(bottom - top).to_string()}
                            fill={color_of(*index)}
                        >
                            <title>{tooltip}</title>
                        </rect>
                    }
                })
                .collect::<Vec<_>>()
        });

        html! {
            <g>
                {for rects}
                <text
                    x={label_x.to_string()} y={label_y.to_string()}
                    text-anchor={anchor}
                    transform={transform}
                    class="fill-neutral-500 text-[10px]"
                >
                    {label.clone()}
                </text>
            </g>
        }
    });

    html! {
        <div>
            <svg
                viewBox={format!("0 0 {WIDTH} {}", props.height)}
                class="w-full"
                style={format!("height: {}px", props.height)}
                role="img"
            >
                {for grid}
                {for bars}
            </svg>
            if props.legend {
                <ul class="flex flex-wrap justify-center gap-4 mt-2 text-xs \
                           text-neutral-600 dark:text-neutral-300">
                    {for props.series.iter().enumerate().map(|(index, s)| html! {
                        <li class="flex items-center gap-1">
                            <span
                                class="inline-block w-3 h-3 rounded-sm"
                                style={format!("background: {}", color_of(index))}
                            />
                            {s.name.clone()}
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}
