use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component]
pub fn StatCard(props: &Props) -> Html {
    html! {
        <div class="flex min-h-[140px] flex-1 flex-col gap-3 p-5 rounded-lg \
                    border border-neutral-200 dark:border-neutral-700 \
                    bg-white dark:bg-neutral-800">
            <h3 class="text-sm font-medium uppercase tracking-wide \
                       text-neutral-600 dark:text-neutral-400">
                {props.title.clone()}
            </h3>
            if props.loading {
                <div class="flex flex-col gap-2">
                    <div class="h-8 w-24 animate-pulse rounded \
                                bg-neutral-100 dark:bg-neutral-700" />
                    <div class="h-4 w-16 animate-pulse rounded \
                                bg-neutral-100 dark:bg-neutral-700" />
                </div>
            } else {
                <p class="text-4xl font-semibold text-neutral-900 dark:text-white">
                    {props.value.clone()}
                </p>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm whitespace-nowrap text-neutral-500 \
                              dark:text-neutral-400">
                        {subtitle.clone()}
                    </p>
                }
            }
        </div>
    }
}
