use payloads::{DateRange, Endpoint, lenient};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::{FetchHookReturn, FetchOptions, use_fetch};

/// An array endpoint for the current range and refresh token. Malformed
/// elements are dropped, so a bad payload renders as "no data".
#[hook]
pub fn use_analytics_list<T>(
    endpoint: Endpoint,
    range: DateRange,
    refresh: u64,
    enabled: bool,
) -> FetchHookReturn<Vec<T>>
where
    T: Clone + DeserializeOwned + 'static,
{
    use_fetch(
        endpoint.url_for(&range, refresh),
        FetchOptions::default()
            .enabled(enabled)
            .transform(lenient::list::<T>),
    )
}

/// An object endpoint; a mismatched shape becomes `T::default()`.
#[hook]
pub fn use_analytics_object<T>(
    endpoint: Endpoint,
    range: DateRange,
    refresh: u64,
) -> FetchHookReturn<T>
where
    T: Clone + Default + DeserializeOwned + 'static,
{
    use_fetch(
        endpoint.url_for(&range, refresh),
        FetchOptions::default().transform(lenient::object::<T>),
    )
}
