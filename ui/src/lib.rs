use payloads::{APIClient, normalize_base};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;

use pages::{DashboardPage, NotFoundPage};

/// Client for the analytics api. The base url is fixed at build time via
/// `API_BASE`.
pub fn get_api_client() -> APIClient {
    APIClient::new(&normalize_base(option_env!("API_BASE")))
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <DashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
