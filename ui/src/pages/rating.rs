use payloads::{
    Endpoint,
    format::{format_count, format_decimal},
    responses::{HistogramBucket, RatingSummary, TimePoint, TopUser},
};
use yew::prelude::*;

use super::{PageProps, day_label};
use crate::components::charts::records;
use crate::components::{BarChart, BarSeries, LineChart, SectionCard};
use crate::hooks::{use_analytics_list, use_analytics_object};

#[derive(Properties, PartialEq)]
struct SummaryMetricProps {
    label: AttrValue,
    value: String,
}

#[function_component]
fn SummaryMetric(props: &SummaryMetricProps) -> Html {
    html! {
        <div class="rounded-lg border border-neutral-200 dark:border-neutral-700 p-4">
            <p class="text-xs uppercase tracking-wide text-neutral-500 dark:text-neutral-400">
                {props.label.clone()}
            </p>
            <p class="mt-2 text-3xl font-semibold">{props.value.clone()}</p>
        </div>
    }
}

#[function_component]
pub fn RatingPage(props: &PageProps) -> Html {
    let summary = use_analytics_object::<RatingSummary>(
        Endpoint::RatingsSummary,
        props.date_range,
        props.refresh,
    );
    let histogram = use_analytics_list::<HistogramBucket>(
        Endpoint::RatingsHistogram,
        props.date_range,
        props.refresh,
        true,
    );
    let trend = use_analytics_list::<TimePoint>(
        Endpoint::RatingsTrend,
        props.date_range,
        props.refresh,
        true,
    );
    let top_users = use_analytics_list::<TopUser>(
        Endpoint::RatingsTopUsers,
        props.date_range,
        props.refresh,
        true,
    );
    let top_users = top_users_view(&top_users.data_or_default(), top_users.is_loading, top_users.error.clone());

    html! {
        <div class="flex flex-col gap-5">
            <SectionCard
                title="Rating Summary"
                subtitle="Quality signals"
                loading={summary.is_loading}
                error={summary.error.clone()}
            >
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    if let Some(data) = summary.data.as_ref() {
                        <SummaryMetric label="Total Chats" value={format_count(data.total_chats as f64)} />
                        <SummaryMetric label="Avg. Chat Length" value={format_decimal(data.avg_chat_length)} />
                        <SummaryMetric label="Total Ratings" value={format_count(data.total_ratings as f64)} />
                        <SummaryMetric label="Avg. Rating" value={format_decimal(data.avg_rating)} />
                    } else {
                        <div class="col-span-full text-sm text-neutral-500">{"Awaiting data..."}</div>
                    }
                </div>
            </SectionCard>

            <div class="grid gap-5 lg:grid-cols-2">
                <SectionCard
                    title="Rating Distribution"
                    subtitle="Histogram"
                    loading={histogram.is_loading}
                    error={histogram.error.clone()}
                >
                    <BarChart
                        data={records(&histogram.data_or_default())}
                        x_key="bucket"
                        series={vec![BarSeries::new("value", "Votes")]}
                    />
                </SectionCard>
                <SectionCard
                    title="Rating Trend"
                    subtitle="Smoothed daily rating"
                    loading={trend.is_loading}
                    error={trend.error.clone()}
                >
                    <LineChart
                        data={records(&trend.data_or_default())}
                        x_key="date"
                        y_key="value"
                        name="Rating"
                        y_format={Callback::from(format_decimal)}
                        x_format={day_label()}
                    />
                </SectionCard>
            </div>

            {top_users}
        </div>
    }
}

fn top_users_view(users: &[TopUser], loading: bool, error: Option<String>) -> Html {
    html! {
        <SectionCard
            title="Top Engaged Users"
            subtitle="High impact contributors"
            {loading}
            {error}
        >
            <div class="space-y-3">
                {for users.iter().map(|user| html! {
                    <div
                        key={user.name.clone()}
                        class="flex items-center justify-between rounded-lg border \
                               border-neutral-200 dark:border-neutral-700 px-4 py-3"
                    >
                        <div>
                            <p class="font-medium">{user.name.clone()}</p>
                            <p class="text-xs text-neutral-500">
                                {format!("{} msgs", format_count(user.messages as f64))}
                            </p>
                        </div>
                        <span class="text-lg font-semibold text-teal-600 dark:text-teal-300">
                            {format_decimal(user.rating)}
                        </span>
                    </div>
                })}
                if users.is_empty() {
                    <p class="text-sm text-neutral-500">{"No engaged users found."}</p>
                }
            </div>
        </SectionCard>
    }
}
