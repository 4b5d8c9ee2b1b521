use payloads::{
    DateRange, Endpoint, RangeKey, responses::UsersStats, summary::summary_cards,
};
use yew::prelude::*;

use super::{AISumPage, MonitoringPage, PageProps, RatingPage, Tab, UsersPage};
use crate::components::{MainLayout, StatCard, TabHeader};
use crate::hooks::use_analytics_object;

/// Landing range when the dashboard opens.
pub const DEFAULT_RANGE: RangeKey = RangeKey::NinetyDays;

/// Root shell: owns the active tab, the selected range and the refresh
/// token, and shares the `users/stats` snapshot with the pages.
#[function_component]
pub fn DashboardPage() -> Html {
    let active_tab = use_state(Tab::default);
    let range = use_state(|| DEFAULT_RANGE);
    let refresh = use_state(|| 0u64);
    let date_range = use_memo(*range, |range| DateRange::today_in_utc(*range));

    let stats = use_analytics_object::<UsersStats>(
        Endpoint::UsersStats,
        *date_range,
        *refresh,
    );
    let cards = summary_cards(stats.data.as_ref(), *range);

    let on_range_change = {
        let range = range.clone();
        Callback::from(move |next: RangeKey| {
            tracing::debug!(range = %next, "range changed");
            range.set(next);
        })
    };
    let on_refresh = {
        let refresh = refresh.clone();
        Callback::from(move |()| refresh.set(*refresh + 1))
    };
    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let page_props = PageProps {
        range: *range,
        date_range: *date_range,
        refresh: *refresh,
        stats: stats.data.as_ref().cloned(),
    };
    let page = match *active_tab {
        Tab::Users => html! { <UsersPage ..page_props /> },
        Tab::Rating => html! { <RatingPage ..page_props /> },
        Tab::AISum => html! { <AISumPage ..page_props /> },
        Tab::Monitoring => html! { <MonitoringPage ..page_props /> },
    };

    html! {
        <MainLayout range={*range} {on_range_change} {on_refresh}>
            <div class="space-y-8">
                <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-4">
                    {for cards.into_iter().map(|card| html! {
                        <StatCard
                            key={card.id}
                            title={card.title}
                            value={card.value}
                            subtitle={(!card.subtitle.is_empty()).then_some(card.subtitle)}
                            loading={stats.is_initial_loading()}
                        />
                    })}
                </div>
                if let Some(error) = stats.error.clone() {
                    <p role="alert" class="text-sm text-red-600 dark:text-red-300">{error}</p>
                }
                <TabHeader active_tab={*active_tab} {on_select} />
                {page}
            </div>
        </MainLayout>
    }
}
