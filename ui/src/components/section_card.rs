use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// A titled panel that owns one section's loading and error display, so a
/// failing request only affects its own panel.
#[function_component]
pub fn SectionCard(props: &Props) -> Html {
    let body = if props.loading {
        html! {
            <div class="flex flex-1 items-center justify-center" aria-busy="true">
                <div class="h-24 w-full animate-pulse rounded-lg \
                            bg-neutral-100 dark:bg-neutral-700" />
            </div>
        }
    } else if let Some(error) = &props.error {
        html! {
            <div
                role="alert"
                class="rounded-lg border border-red-300 bg-red-50 p-4 text-sm \
                       text-red-700 dark:border-red-500/40 dark:bg-red-500/10 \
                       dark:text-red-200"
            >
                {error.clone()}
            </div>
        }
    } else {
        props.children.clone()
    };

    html! {
        <section class={classes!(
            "flex", "w-full", "flex-col", "gap-4", "p-5", "rounded-lg",
            "border", "border-neutral-200", "dark:border-neutral-700",
            "bg-white", "dark:bg-neutral-800",
            props.class.clone()
        )}>
            <div>
                <h2 class="text-base font-semibold text-neutral-900 dark:text-white">
                    {props.title.clone()}
                </h2>
                if let Some(subtitle) = &props.subtitle {
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">
                        {subtitle.clone()}
                    </p>
                }
            </div>
            {body}
        </section>
    }
}
