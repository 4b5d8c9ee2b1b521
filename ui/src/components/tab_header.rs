use yew::prelude::*;

use crate::pages::Tab;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component]
pub fn TabHeader(props: &Props) -> Html {
    html! {
        <div class="border-b border-neutral-200 dark:border-neutral-700">
            <nav class="-mb-px flex space-x-8">
                {for Tab::ALL.into_iter().map(|tab| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            {onclick}
                            aria-current={(tab == props.active_tab).then_some("page")}
                            class={classes!(format!(
                                "py-2 px-1 border-b-2 font-medium text-sm {}",
                                if tab == props.active_tab {
                                    "border-neutral-500 text-neutral-600 dark:text-neutral-400"
                                } else {
                                    "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300 dark:text-neutral-400 dark:hover:text-neutral-300"
                                }
                            ))}
                        >
                            {tab.to_string()}
                        </button>
                    }
                })}
            </nav>
        </div>
    }
}
