use payloads::RangeKey;
use yew::prelude::*;

use crate::components::layout::Header;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub range: RangeKey,
    pub on_range_change: Callback<RangeKey>,
    pub on_refresh: Callback<()>,
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header
                range={props.range}
                on_range_change={props.on_range_change.clone()}
                on_refresh={props.on_refresh.clone()}
            />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}
