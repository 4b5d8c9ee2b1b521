use serde_json::Value;
use yew::prelude::*;

use super::geometry::{donut_arcs, extract_rows, ring_segment};
use super::{NoData, color_at, format_value};

const SIZE: f64 = 200.0;
const OUTER: f64 = 90.0;
const INNER: f64 = 56.0;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: Vec<Value>,
    pub label_key: AttrValue,
    pub value_key: AttrValue,
    #[prop_or(260)]
    pub height: u32,
    #[prop_or_default]
    pub colors: Option<Vec<AttrValue>>,
    #[prop_or_default]
    pub value_format: Option<Callback<f64, String>>,
}

#[function_component]
pub fn DonutChart(props: &Props) -> Html {
    let rows: Vec<_> = extract_rows(&props.data, &props.label_key, &[props.value_key.as_str()])
        .into_iter()
        .filter(|row| row.values[0] > 0.0)
        .collect();
    if rows.is_empty() {
        return html! { <NoData height={props.height} /> };
    }

    let values: Vec<f64> = rows.iter().map(|row| row.values[0]).collect();
    let total: f64 = values.iter().sum();
    let arcs = donut_arcs(&values);
    let color_of = |index: usize| match &props.colors {
        Some(colors) if !colors.is_empty() => colors[index % colors.len()].clone(),
        _ => AttrValue::from(color_at(index)),
    };
    let center = (SIZE / 2.0, SIZE / 2.0);

    html! {
        <div class="flex flex-col sm:flex-row items-center gap-4">
            <svg
                viewBox={format!("0 0 {SIZE} {SIZE}")}
                style={format!("height: {}px", props.height.min(SIZE as u32 + 40))}
                role="img"
            >
                {for rows.iter().zip(&arcs).enumerate().map(|(index, (row, (start, end)))| {
                    let value = format_value(props.value_format.as_ref(), row.values[0]);
                    html! {
                        <path d={ring_segment(center, OUTER, INNER, *start, *end)} fill={color_of(index)}>
                            <title>{format!("{}: {value}", row.label)}</title>
                        </path>
                    }
                })}
            </svg>
            <ul class="space-y-1 text-sm text-neutral-700 dark:text-neutral-300">
                {for rows.iter().enumerate().map(|(index, row)| {
                    let share = row.values[0] / total * 100.0;
                    html! {
                        <li class="flex items-center gap-2">
                            <span
                                class="inline-block w-3 h-3 rounded-full"
                                style={format!("background: {}", color_of(index))}
                            />
                            <span>{row.label.clone()}</span>
                            <span class="text-neutral-500">{format!("{share:.1}%")}</span>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
