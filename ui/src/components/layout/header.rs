use payloads::{RANGE_OPTIONS, RangeKey};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub range: RangeKey,
    pub on_range_change: Callback<RangeKey>,
    pub on_refresh: Callback<()>,
}

#[function_component]
pub fn Header(props: &Props) -> Html {
    let on_change = {
        let on_range_change = props.on_range_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_range_change.emit(RangeKey::parse_lossy(&select.value()));
        })
    };
    let on_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Analytics"}
                    </h1>
                    <div class="flex items-center space-x-4">
                        <label class="sr-only" for="range">{"Date range"}</label>
                        <select
                            id="range"
                            onchange={on_change}
                            class="rounded-md border border-neutral-300 dark:border-neutral-600 \
                                   bg-white dark:bg-neutral-700 px-3 py-1.5 text-sm \
                                   text-neutral-900 dark:text-neutral-100"
                        >
                            {for RANGE_OPTIONS.iter().map(|(label, key)| html! {
                                <option
                                    value={key.to_string()}
                                    selected={*key == props.range}
                                >
                                    {*label}
                                </option>
                            })}
                        </select>
                        <button
                            onclick={on_click}
                            class="rounded-md bg-neutral-900 dark:bg-neutral-100 px-3 py-1.5 \
                                   text-sm font-medium text-white dark:text-neutral-900 \
                                   hover:bg-neutral-700 dark:hover:bg-neutral-300"
                        >
                            {"Refresh"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
