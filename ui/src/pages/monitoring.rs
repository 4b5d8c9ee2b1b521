use payloads::{
    Endpoint,
    format::{format_count, format_decimal, format_delta},
    reshape::Trend,
    responses::{ConclusionsCount, PeakHour, TimePoint},
};
use yew::prelude::*;

use super::{PageProps, day_label};
use crate::components::charts::records;
use crate::components::{BarChart, BarSeries, LineChart, SectionCard};
use crate::hooks::{use_analytics_list, use_analytics_object};

/// Headline of one monitored signal: its latest value against the one before.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendCard {
    pub label: &'static str,
    pub value: String,
    pub delta: String,
    pub status: &'static str,
}

impl TrendCard {
    fn new(
        label: &'static str,
        series: &[TimePoint],
        format: fn(f64) -> String,
        (holding, slipping): (&'static str, &'static str),
    ) -> Self {
        let values: Vec<f64> = series.iter().map(|point| point.value).collect();
        let trend = Trend::from_series(&values);
        Self {
            label,
            value: format(trend.current),
            delta: format_delta(trend.delta()),
            status: if trend.is_holding() { holding } else { slipping },
        }
    }
}

pub fn trend_cards(
    active: &[TimePoint],
    messages: &[TimePoint],
    rating: &[TimePoint],
) -> [TrendCard; 3] {
    [
        TrendCard::new("Active Users", active, format_count, ("Stable", "Watch")),
        TrendCard::new("AI Load", messages, format_count, ("Rising", "Cooling")),
        TrendCard::new("Avg Rating", rating, format_decimal, ("Healthy", "Attention")),
    ]
}

#[function_component]
pub fn MonitoringPage(props: &PageProps) -> Html {
    let active = use_analytics_list::<TimePoint>(
        Endpoint::UsersActive,
        props.date_range,
        props.refresh,
        true,
    );
    let backlog = use_analytics_list::<TimePoint>(
        Endpoint::AiMessagesPerDay,
        props.date_range,
        props.refresh,
        true,
    );
    let rating_trend = use_analytics_list::<TimePoint>(
        Endpoint::RatingsTrend,
        props.date_range,
        props.refresh,
        true,
    );
    let peak_hours = use_analytics_list::<PeakHour>(
        Endpoint::AiPeakHours,
        props.date_range,
        props.refresh,
        true,
    );
    let conclusions = use_analytics_list::<TimePoint>(
        Endpoint::ConclusionsTimeseries,
        props.date_range,
        props.refresh,
        true,
    );
    let conclusions_count = use_analytics_object::<ConclusionsCount>(
        Endpoint::ConclusionsCount,
        props.date_range,
        props.refresh,
    );

    let active_data = active.data_or_default();
    let backlog_data = backlog.data_or_default();
    let rating_data = rating_trend.data_or_default();
    let cards = trend_cards(&active_data, &backlog_data, &rating_data);

    html! {
        <div class="flex flex-col gap-5">
            <div class="grid gap-5 md:grid-cols-3">
                {for cards.into_iter().map(|card| html! {
                    <div
                        key={card.label}
                        class="rounded-lg border border-neutral-200 dark:border-neutral-700 \
                               bg-white dark:bg-neutral-800 p-5"
                    >
                        <p class="text-xs uppercase tracking-wide text-neutral-500 dark:text-neutral-400">
                            {card.label}
                        </p>
                        <p class="mt-3 text-3xl font-semibold">{card.value}</p>
                        <p class="text-sm text-teal-600 dark:text-teal-300">{card.delta}</p>
                        <p class="text-xs text-neutral-500 dark:text-neutral-400">{card.status}</p>
                    </div>
                })}
            </div>

            <div class="grid gap-5 lg:grid-cols-2">
                <SectionCard
                    title="Activity Pulse"
                    subtitle="Live user throughput"
                    loading={active.is_loading}
                    error={active.error.clone()}
                >
                    <LineChart
                        data={records(&active_data)}
                        x_key="date"
                        y_key="value"
                        name="Active users"
                        x_format={day_label()}
                    />
                </SectionCard>
                <SectionCard
                    title="Quality Monitor"
                    subtitle="Rolling customer rating"
                    loading={rating_trend.is_loading}
                    error={rating_trend.error.clone()}
                >
                    <LineChart
                        data={records(&rating_data)}
                        x_key="date"
                        y_key="value"
                        name="Rating"
                        y_format={Callback::from(format_decimal)}
                        x_format={day_label()}
                    />
                </SectionCard>
            </div>

            <SectionCard
                title="Traffic Stress Test"
                subtitle="Peak hour load distribution"
                loading={peak_hours.is_loading}
                error={peak_hours.error.clone()}
            >
                <BarChart
                    data={records(&peak_hours.data_or_default())}
                    x_key="hour"
                    series={vec![BarSeries::new("value", "Messages")]}
                />
            </SectionCard>

            <SectionCard
                title="Backlog Tracker"
                subtitle="AI queue depth vs previous period"
                loading={backlog.is_loading}
                error={backlog.error.clone()}
            >
                <LineChart
                    data={records(&backlog_data)}
                    x_key="date"
                    y_key="value"
                    name="Messages"
                    color="#f59e0b"
                    x_format={day_label()}
                />
            </SectionCard>

            <SectionCard
                title="Conclusions"
                subtitle={conclusions_count
                    .data
                    .as_ref()
                    .map(|total| format!("{} in range", format_count(total.count as f64)))}
                loading={conclusions.is_loading}
                error={conclusions.error.clone().or_else(|| conclusions_count.error.clone())}
            >
                <LineChart
                    data={records(&conclusions.data_or_default())}
                    x_key="date"
                    y_key="value"
                    name="Conclusions"
                    color="#8b5cf6"
                    x_format={day_label()}
                />
            </SectionCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<TimePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| TimePoint {
                date: format!("2024-01-0{}", i + 1),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn cards_compare_last_two_points() {
        let [active, load, rating] = trend_cards(
            &series(&[900.0, 1200.0, 1100.0]),
            &series(&[40.0, 55.0]),
            &series(&[4.5, 4.25]),
        );
        assert_eq!(active.value, "1,100");
        assert_eq!(active.delta, "-100");
        assert_eq!(active.status, "Watch");
        assert_eq!(load.delta, "+15");
        assert_eq!(load.status, "Rising");
        assert_eq!(rating.value, "4.25");
        assert_eq!(rating.status, "Attention");
    }

    #[test]
    fn empty_series_holds_at_zero() {
        let [active, ..] = trend_cards(&[], &[], &[]);
        assert_eq!(active.value, "0");
        assert_eq!(active.delta, "+0");
        assert_eq!(active.status, "Stable");
    }
}
