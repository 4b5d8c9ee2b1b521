use payloads::{ClientError, FetchSlot, FetchState, fetch::guarded};
use serde::de::DeserializeOwned;
use serde_json::Value;
use yew::prelude::*;

use crate::get_api_client;

/// Converts a decoded payload into the hook's data type. Compared by
/// function address, so passing the same function keeps the fetch stable
/// across renders.
pub struct Transform<T>(pub fn(Value) -> T);

impl<T> Clone for Transform<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Transform<T> {}

impl<T> PartialEq for Transform<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

pub struct FetchOptions<T> {
    /// Reported as fetched data until the first response lands.
    pub initial: Option<T>,
    /// A disabled hook issues no request and keeps its current state.
    pub enabled: bool,
    pub transform: Option<Transform<T>>,
}

impl<T> Default for FetchOptions<T> {
    fn default() -> Self {
        Self {
            initial: None,
            enabled: true,
            transform: None,
        }
    }
}

impl<T> FetchOptions<T> {
    pub fn initial(mut self, initial: T) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn transform(mut self, transform: fn(Value) -> T) -> Self {
        self.transform = Some(Transform(transform));
        self
    }
}

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone + Default> FetchHookReturn<T> {
    /// The fetched data, or an empty value before the first response.
    pub fn data_or_default(&self) -> T {
        self.data.as_ref().cloned().unwrap_or_default()
    }
}

impl<T> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }
}

fn decode<T: DeserializeOwned>(
    value: Value,
    transform: Option<Transform<T>>,
) -> Result<T, String> {
    match transform {
        Some(Transform(transform)) => Ok(transform(value)),
        None => serde_json::from_value(value)
            .map_err(|e| ClientError::from(e).to_string()),
    }
}

/// Fetch `endpoint` (a path below the api base, query included).
///
/// Fetches on mount and whenever the endpoint, the enabled flag, or the
/// transform changes. Changing inputs or unmounting cancels the request in
/// flight. There is no automatic retry; call `refetch`.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_gender(range: DateRange, refresh: u64) -> FetchHookReturn<Vec<LabelValue>> {
///     use_fetch(
///         Endpoint::UsersGender.url_for(&range, refresh),
///         FetchOptions::default().transform(lenient::list::<LabelValue>),
///     )
/// }
/// ```
#[hook]
pub fn use_fetch<T>(
    endpoint: String,
    options: FetchOptions<T>,
) -> FetchHookReturn<T>
where
    T: Clone + DeserializeOwned + 'static,
{
    let FetchOptions {
        initial,
        enabled,
        transform,
    } = options;
    let slot = use_mut_ref(move || FetchSlot::for_view(initial, enabled));
    let trigger = use_force_update();

    let refetch = {
        let slot = slot.clone();

        use_callback(
            (endpoint.clone(), enabled, transform),
            move |_: (), (endpoint, enabled, transform)| {
                let Some((attempt, registration)) =
                    slot.borrow_mut().begin_if(*enabled)
                else {
                    return;
                };
                trigger.force_update();

                let slot = slot.clone();
                let trigger = trigger.clone();
                let endpoint = endpoint.clone();
                let transform = *transform;

                yew::platform::spawn_local(async move {
                    let request = async {
                        let value = get_api_client()
                            .get_json(&endpoint)
                            .await
                            .map_err(|e| e.to_string())?;
                        decode(value, transform)
                    };
                    // superseded or torn down: the newer attempt owns state
                    let Some(outcome) = guarded(registration, request).await
                    else {
                        return;
                    };
                    if let Err(e) = &outcome {
                        tracing::warn!(%endpoint, "fetch failed: {e}");
                    }
                    if slot.borrow_mut().resolve(attempt, outcome) {
                        trigger.force_update();
                    }
                });
            },
        )
    };

    // Fetch on mount and when inputs change; cancel on teardown
    {
        let refetch = refetch.clone();
        let slot = slot.clone();

        use_effect_with((endpoint, enabled, transform), move |_| {
            refetch.emit(());
            move || slot.borrow_mut().cancel()
        });
    }

    let current = slot.borrow();
    FetchHookReturn {
        data: current.data().clone(),
        is_loading: current.loading(),
        error: current.error().map(str::to_string),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
