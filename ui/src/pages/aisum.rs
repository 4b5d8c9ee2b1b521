use payloads::{
    Endpoint,
    reshape::top_n,
    responses::{LabelValue, PeakHour, TimePoint, TopicSplit},
};
use yew::prelude::*;

use super::{PageProps, day_label};
use crate::components::charts::records;
use crate::components::{BarChart, BarSeries, LineChart, SectionCard};
use crate::hooks::use_analytics_list;

const TOP_DOCTORS: usize = 10;

#[function_component]
pub fn AISumPage(props: &PageProps) -> Html {
    let messages = use_analytics_list::<TimePoint>(
        Endpoint::AiMessagesPerDay,
        props.date_range,
        props.refresh,
        true,
    );
    let topics = use_analytics_list::<TopicSplit>(
        Endpoint::AiTopics,
        props.date_range,
        props.refresh,
        true,
    );
    let doctors = use_analytics_list::<LabelValue>(
        Endpoint::AiDoctors,
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

    html! {
        <div class="flex flex-col gap-5">
            <SectionCard
                title="AI Messages per Day"
                subtitle="Combined platform activity"
                loading={messages.is_loading}
                error={messages.error.clone()}
            >
                <LineChart
                    data={records(&messages.data_or_default())}
                    x_key="date"
                    y_key="value"
                    name="Messages"
                    color="#f59e0b"
                    x_format={day_label()}
                />
            </SectionCard>

            <div class="grid gap-5 lg:grid-cols-2">
                <SectionCard
                    title="Topics"
                    subtitle="AI vs human handled"
                    loading={topics.is_loading}
                    error={topics.error.clone()}
                >
                    <BarChart
                        data={records(&topics.data_or_default())}
                        x_key="topic"
                        series={vec![
                            BarSeries::new("ai", "AI").stacked("topics"),
                            BarSeries::new("doctor", "Doctor").stacked("topics"),
                        ]}
                        legend={true}
                        tick_angle={-30}
                    />
                </SectionCard>
                <SectionCard
                    title="Doctor Distribution"
                    subtitle="Sessions handled"
                    loading={doctors.is_loading}
                    error={doctors.error.clone()}
                >
                    <BarChart
                        data={records(&top_n(doctors.data_or_default(), TOP_DOCTORS))}
                        x_key="label"
                        series={vec![BarSeries::new("value", "Sessions")]}
                        tick_angle={-30}
                    />
                </SectionCard>
            </div>

            <SectionCard
                title="Peak Hours"
                subtitle="Hourly intensity"
                loading={peak_hours.is_loading}
                error={peak_hours.error.clone()}
            >
                <BarChart
                    data={records(&peak_hours.data_or_default())}
                    x_key="hour"
                    series={vec![BarSeries::new("value", "Messages")]}
                />
            </SectionCard>
        </div>
    }
}
