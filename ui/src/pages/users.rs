use payloads::{
    Endpoint,
    reshape::{
        AGE_ORDER, exclude_unknown, from_map, group_by, normalize_age_group,
        normalize_language, normalize_region, order_by_labels, top_n,
    },
    responses::{AgeGroup, LabelValue, TimePoint, UsersStats},
};
use yew::prelude::*;

use super::{PageProps, day_label};
use crate::components::charts::records;
use crate::components::{BarChart, BarSeries, DonutChart, LineChart, SectionCard};
use crate::hooks::use_analytics_list;

const TOP_REGIONS: usize = 15;

/// Canonical language codes, excluded labels dropped; the same grouping
/// the Top Language card uses.
pub fn language_chart(languages: Vec<LabelValue>) -> Vec<LabelValue> {
    exclude_unknown(group_by(languages, normalize_language))
}

/// Languages come from the stats snapshot when it breaks them down at all.
fn languages_from_stats(stats: Option<&UsersStats>) -> Option<Vec<LabelValue>> {
    let languages = language_chart(from_map(&stats?.by_language));
    (languages.len() > 1).then_some(languages)
}

fn regions_from_stats(stats: Option<&UsersStats>) -> Option<Vec<LabelValue>> {
    let regions = from_map(stats?.regions());
    (!regions.is_empty()).then_some(regions)
}

/// Canonical names, excluded labels dropped, largest first.
pub fn region_chart(regions: Vec<LabelValue>) -> Vec<LabelValue> {
    top_n(exclude_unknown(group_by(regions, normalize_region)), TOP_REGIONS)
}

pub fn age_chart(groups: Vec<AgeGroup>) -> Vec<LabelValue> {
    let groups = groups
        .into_iter()
        .map(|group| LabelValue::new(group.group, group.value));
    order_by_labels(group_by(groups, normalize_age_group), &AGE_ORDER)
}

#[function_component]
pub fn UsersPage(props: &PageProps) -> Html {
    let stats = props.stats.as_ref();
    let language_fallback = languages_from_stats(stats);
    let region_fallback = regions_from_stats(stats);

    let active = use_analytics_list::<TimePoint>(
        Endpoint::UsersActive,
        props.date_range,
        props.refresh,
        true,
    );
    let dau = use_analytics_list::<TimePoint>(
        Endpoint::UsersDau,
        props.date_range,
        props.refresh,
        true,
    );
    let mau = use_analytics_list::<TimePoint>(
        Endpoint::UsersMau,
        props.date_range,
        props.refresh,
        true,
    );
    let genders = use_analytics_list::<LabelValue>(
        Endpoint::UsersGender,
        props.date_range,
        props.refresh,
        true,
    );
    let languages = use_analytics_list::<LabelValue>(
        Endpoint::UsersLanguage,
        props.date_range,
        props.refresh,
        language_fallback.is_none(),
    );
    let regions = use_analytics_list::<LabelValue>(
        Endpoint::UsersRegions,
        props.date_range,
        props.refresh,
        region_fallback.is_none(),
    );
    let age_groups = use_analytics_list::<AgeGroup>(
        Endpoint::UsersAgeGroups,
        props.date_range,
        props.refresh,
        true,
    );

    let (language_data, language_loading, language_error) = match language_fallback {
        Some(data) => (data, false, None),
        None => (
            language_chart(languages.data_or_default()),
            languages.is_loading,
            languages.error.clone(),
        ),
    };
    let (region_data, region_loading, region_error) = match region_fallback {
        Some(data) => (region_chart(data), false, None),
        None => (
            region_chart(regions.data_or_default()),
            regions.is_loading,
            regions.error.clone(),
        ),
    };

    html! {
        <div class="flex flex-col gap-5">
            <div class="grid gap-5 lg:grid-cols-3">
                <SectionCard
                    title="Active Users"
                    subtitle="Time-series"
                    loading={active.is_loading}
                    error={active.error.clone()}
                >
                    <LineChart
                        data={records(&active.data_or_default())}
                        x_key="date"
                        y_key="value"
                        name="Active users"
                        x_format={day_label()}
                    />
                </SectionCard>
                <SectionCard
                    title="Gender"
                    loading={genders.is_loading}
                    error={genders.error.clone()}
                >
                    <DonutChart
                        data={records(&genders.data_or_default())}
                        label_key="label"
                        value_key="value"
                    />
                </SectionCard>
                <SectionCard title="Language" loading={language_loading} error={language_error}>
                    <DonutChart
                        data={records(&language_data)}
                        label_key="label"
                        value_key="value"
                    />
                </SectionCard>
            </div>

            <div class="grid gap-5 lg:grid-cols-2">
                <SectionCard
                    title="Daily Active Users"
                    loading={dau.is_loading}
                    error={dau.error.clone()}
                >
                    <LineChart
                        data={records(&dau.data_or_default())}
                        x_key="date"
                        y_key="value"
                        name="DAU"
                        x_format={day_label()}
                    />
                </SectionCard>
                <SectionCard
                    title="Monthly Active Users"
                    loading={mau.is_loading}
                    error={mau.error.clone()}
                >
                    <LineChart
                        data={records(&mau.data_or_default())}
                        x_key="date"
                        y_key="value"
                        name="MAU"
                        color="#10b981"
                        x_format={day_label()}
                    />
                </SectionCard>
            </div>

            <div class="grid gap-5 lg:grid-cols-5">
                <SectionCard
                    title="Regions"
                    subtitle="Top performing"
                    loading={region_loading}
                    error={region_error}
                    class="lg:col-span-3"
                >
                    <BarChart
                        data={records(&region_data)}
                        x_key="label"
                        series={vec![BarSeries::new("value", "Users")]}
                        height={500}
                        tick_angle={-45}
                    />
                </SectionCard>
                <SectionCard
                    title="Age Groups"
                    subtitle="Engagement split"
                    loading={age_groups.is_loading}
                    error={age_groups.error.clone()}
                    class="lg:col-span-2"
                >
                    <BarChart
                        data={records(&age_chart(age_groups.data_or_default()))}
                        x_key="label"
                        series={vec![BarSeries::new("value", "Users")]}
                    />
                </SectionCard>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn stats_with(languages: &[(&str, f64)], regions: &[(&str, f64)]) -> UsersStats {
        let to_map = |pairs: &[(&str, f64)]| -> BTreeMap<String, f64> {
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
        };
        UsersStats {
            by_language: to_map(languages),
            by_region: to_map(regions),
            ..UsersStats::default()
        }
    }

    #[test]
    fn single_language_falls_back_to_the_endpoint() {
        let stats = stats_with(&[("uz", 10.0)], &[]);
        assert_eq!(languages_from_stats(Some(&stats)), None);
        assert_eq!(languages_from_stats(None), None);

        let stats = stats_with(&[("uz", 10.0), ("ru", 4.0)], &[]);
        assert_eq!(languages_from_stats(Some(&stats)).map(|l| l.len()), Some(2));
    }

    #[test]
    fn language_donut_merges_aliases_like_the_card() {
        let stats = stats_with(
            &[("ru", 30.0), ("Russian", 25.0), ("uz", 40.0), ("unknown", 99.0)],
            &[],
        );
        assert_eq!(
            languages_from_stats(Some(&stats)),
            Some(vec![LabelValue::new("RU", 55.0), LabelValue::new("UZ", 40.0)])
        );
        assert_eq!(
            stats.top_language(),
            Some(LabelValue::new("RU", 55.0))
        );
    }

    #[test]
    fn aliases_of_one_language_are_not_a_breakdown() {
        let stats = stats_with(&[("ru", 30.0), ("russian", 25.0)], &[]);
        assert_eq!(languages_from_stats(Some(&stats)), None);
    }

    #[test]
    fn legacy_location_map_feeds_the_region_chart() {
        let stats = UsersStats {
            by_location: [("Toshkent".to_string(), 3.0)].into_iter().collect(),
            ..UsersStats::default()
        };
        assert_eq!(
            regions_from_stats(Some(&stats)),
            Some(vec![LabelValue::new("Toshkent", 3.0)])
        );
    }

    #[test]
    fn empty_region_map_falls_back_to_the_endpoint() {
        assert_eq!(regions_from_stats(Some(&stats_with(&[], &[]))), None);
        let stats = stats_with(&[], &[("Toshkent", 3.0)]);
        assert!(regions_from_stats(Some(&stats)).is_some());
    }

    #[test]
    fn region_chart_drops_excluded_and_caps_length() {
        let mut regions: Vec<LabelValue> = (0..20)
            .map(|i| LabelValue::new(format!("Region {i:02}"), i as f64))
            .collect();
        regions.push(LabelValue::new("Unknown", 1000.0));
        regions.push(LabelValue::new("Kokand", 900.0));

        let chart = region_chart(regions);
        assert_eq!(chart.len(), TOP_REGIONS);
        assert_eq!(chart[0], LabelValue::new("Region 19", 19.0));
        assert!(chart.iter().all(|r| r.label != "Unknown" && r.label != "Kokand"));
    }

    #[test]
    fn age_groups_follow_natural_order() {
        let groups = vec![
            AgeGroup { group: "60+".into(), value: 1.0 },
            AgeGroup { group: "<20".into(), value: 2.0 },
            AgeGroup { group: "20-40".into(), value: 3.0 },
        ];
        let labels: Vec<String> = age_chart(groups).into_iter().map(|g| g.label).collect();
        assert_eq!(labels, ["<20", "20-40", "60+"]);
    }
}
